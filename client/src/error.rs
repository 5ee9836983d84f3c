//! Error types for the resizable PDA client.

use std::path::PathBuf;

use resizable_pda::error::ResizablePdaError;
use solana_sdk::{instruction::InstructionError, pubkey::Pubkey, transaction::TransactionError};
use thiserror::Error;

/// Result type alias using the client's Error type.
pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Config file could not be parsed
    #[error("Invalid config file {path}: {source}")]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Signing keypair could not be loaded
    #[error("Failed to read keypair {path}: {message}")]
    Keypair { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The program rejected the transaction with one of its own error codes
    #[error("Program error {code}: {message}")]
    Program { code: u32, message: &'static str },

    /// RPC or transaction failure not raised by the program itself
    #[error("RPC error: {0}")]
    Rpc(Box<solana_client::client_error::ClientError>),

    /// No account at the derived address
    #[error("PDA {0} does not exist")]
    AccountNotFound(Pubkey),

    /// Account exists but does not hold a PDA record
    #[error("Account {address} is not a PDA record: {reason}")]
    InvalidAccount { address: Pubkey, reason: String },
}

impl ClientError {
    /// Program error carried by a failed transaction, if any.
    pub fn program_error(&self) -> Option<ResizablePdaError> {
        match self {
            ClientError::Program { code, .. } => ResizablePdaError::from_code(*code),
            _ => None,
        }
    }
}

/// Custom program error code inside a transaction error, if there is one.
pub fn custom_error_code(err: &TransactionError) -> Option<u32> {
    match err {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => Some(*code),
        _ => None,
    }
}

impl From<solana_client::client_error::ClientError> for ClientError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        let program_error = err
            .get_transaction_error()
            .as_ref()
            .and_then(custom_error_code)
            .and_then(ResizablePdaError::from_code);
        match program_error {
            Some(e) => ClientError::Program {
                code: e.code(),
                message: e.message(),
            },
            None => ClientError::Rpc(Box::new(err)),
        }
    }
}
