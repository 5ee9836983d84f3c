//! Provider configuration: RPC endpoint, signing keypair and commitment.
//!
//! Values come from, in order of priority: command line overrides, the Solana
//! CLI config file (`~/.config/solana/cli/config.yml`), built-in defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    signature::{read_keypair_file, Keypair},
};
use tracing::debug;

use crate::error::{ClientError, Result};

pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";
pub const DEFAULT_COMMITMENT: &str = "confirmed";

/// Subset of the Solana CLI config file this client understands.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfigFile {
    pub json_rpc_url: Option<String>,
    pub keypair_path: Option<String>,
    pub commitment: Option<String>,
}

/// Values given on the command line; each one wins over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub url: Option<String>,
    pub keypair: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub rpc_url: String,
    pub keypair_path: PathBuf,
    pub commitment: CommitmentConfig,
}

impl ClientConfig {
    /// Reads the config file (if any) and applies `overrides`.
    ///
    /// A missing default config file is not an error; a missing file that was
    /// asked for explicitly is.
    pub fn load(overrides: &ConfigOverrides) -> Result<Self> {
        let file = match &overrides.config_file {
            Some(path) => Some(read_config_file(path)?),
            None => match default_cli_config_path() {
                Some(path) if path.exists() => Some(read_config_file(&path)?),
                _ => None,
            },
        };
        Self::resolve(file.unwrap_or_default(), overrides)
    }

    pub fn from_yaml(yaml: &str, overrides: &ConfigOverrides) -> Result<Self> {
        let file: CliConfigFile = serde_yaml::from_str(yaml).map_err(|source| ClientError::ConfigFile {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        Self::resolve(file, overrides)
    }

    fn resolve(file: CliConfigFile, overrides: &ConfigOverrides) -> Result<Self> {
        let rpc_url = overrides
            .url
            .clone()
            .or(file.json_rpc_url)
            .map(|url| normalize_url(&url))
            .unwrap_or_else(|| DEFAULT_RPC_URL.to_string());

        let keypair_path = match (&overrides.keypair, file.keypair_path) {
            (Some(path), _) => path.clone(),
            (None, Some(path)) => expand_tilde(&path),
            (None, None) => default_keypair_path()
                .ok_or_else(|| ClientError::Config("cannot determine home directory".to_string()))?,
        };

        let commitment =
            parse_commitment(file.commitment.as_deref().unwrap_or(DEFAULT_COMMITMENT))?;

        Ok(Self {
            rpc_url,
            keypair_path,
            commitment,
        })
    }

    pub fn load_keypair(&self) -> Result<Keypair> {
        debug!("Loading keypair from {}", self.keypair_path.display());
        read_keypair_file(&self.keypair_path).map_err(|e| ClientError::Keypair {
            path: self.keypair_path.clone(),
            message: e.to_string(),
        })
    }
}

fn read_config_file(path: &Path) -> Result<CliConfigFile> {
    debug!("Reading config file {}", path.display());
    let content = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|source| ClientError::ConfigFile {
        path: path.to_path_buf(),
        source,
    })
}

pub fn default_cli_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config/solana/cli/config.yml"))
}

pub fn default_keypair_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config/solana/id.json"))
}

/// Accepts the same cluster monikers as the Solana CLI.
pub fn normalize_url(url: &str) -> String {
    match url {
        "m" | "mainnet-beta" => "https://api.mainnet-beta.solana.com",
        "t" | "testnet" => "https://api.testnet.solana.com",
        "d" | "devnet" => DEFAULT_RPC_URL,
        "l" | "localhost" => "http://localhost:8899",
        other => other,
    }
    .to_string()
}

fn expand_tilde(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}

fn parse_commitment(value: &str) -> Result<CommitmentConfig> {
    match value {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        other => Err(ClientError::Config(format!("unknown commitment level: {other}"))),
    }
}
