pub mod instruction_data; // CreateAccountData, ResizeAccountData, UpdateDataArgs
pub mod pda_account;      // PdaAccount

// Re-export the types so everyone can `use crate::state::{...}`.
pub use instruction_data::{CreateAccountData, ResizeAccountData, UpdateDataArgs};
pub use pda_account::PdaAccount;
