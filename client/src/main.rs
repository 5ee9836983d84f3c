use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use resizable_pda_client::{ClientConfig, ConfigOverrides, PdaClient};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "resizable-pda")]
#[command(about = "Create, read, update and resize PDA accounts", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC URL or cluster moniker (m, t, d, l)
    #[arg(short, long, global = true)]
    url: Option<String>,

    /// Path to the fee payer and authority keypair
    #[arg(short, long, global = true)]
    keypair: Option<PathBuf>,

    /// Solana CLI config file [default: ~/.config/solana/cli/config.yml]
    #[arg(short = 'C', long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Call the program's initialize instruction
    Initialize,

    /// Create the PDA with a message, or overwrite the stored message
    Write {
        /// Message to store
        message: String,

        /// Nonce used in the PDA seeds
        #[arg(short, long, default_value = "1")]
        nonce: u64,
    },

    /// Show the PDA and its stored message
    Read {
        /// Nonce used in the PDA seeds
        #[arg(short, long, default_value = "1")]
        nonce: u64,
    },

    /// Resize the PDA data buffer
    Resize {
        /// New data buffer size in bytes
        new_size: u64,

        /// Nonce used in the PDA seeds
        #[arg(short, long, default_value = "1")]
        nonce: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        match cli.verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let overrides = ConfigOverrides {
        config_file: cli.config,
        url: cli.url,
        keypair: cli.keypair,
    };
    let config = ClientConfig::load(&overrides).context("failed to load configuration")?;
    let client = PdaClient::new(&config)?;

    match cli.command {
        Commands::Initialize => {
            commands::initialize::run(&client).await?;
        }
        Commands::Write { message, nonce } => {
            commands::write::run(&client, nonce, &message).await?;
        }
        Commands::Read { nonce } => {
            commands::read::run(&client, nonce).await?;
        }
        Commands::Resize { new_size, nonce } => {
            commands::resize::run(&client, nonce, new_size).await?;
        }
    }

    Ok(())
}
