//! Client library for the resizable PDA program.

pub mod client;
pub mod config;
pub mod error;
pub mod instructions;

pub use client::{PdaClient, PdaRecord, UpdateOutcome, UpsertOutcome};
pub use config::{ClientConfig, ConfigOverrides};
pub use error::{ClientError, Result};
