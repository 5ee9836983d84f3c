use pinocchio::program_error::ProgramError;
use shank::ShankInstruction;

pub mod initialize;
pub use initialize::*;

pub mod create_account;
pub use create_account::*;

pub mod resize_account;
pub use resize_account::*;

pub mod update_data;
pub use update_data::*;

/// Instruction data is this discriminator byte followed by the payload parsed
/// by the matching type in `state::instruction_data`.
#[repr(u8)]
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankInstruction)]
pub enum ResizablePdaInstruction {
    /// Liveness check; touches no accounts.
    Initialize,

    #[account(0, writable, name = "pda_account", desc = "PDA derived from [\"my-seed\", user, nonce]")]
    #[account(1, writable, signer, name = "user", desc = "Payer and authority of the new PDA")]
    #[account(2, name = "system_program", desc = "System program")]
    CreateAccount,

    #[account(0, writable, name = "pda_account", desc = "PDA to resize")]
    #[account(1, writable, signer, name = "authority", desc = "Stored authority; pays or receives the rent difference")]
    #[account(2, name = "system_program", desc = "System program")]
    ResizeAccount,

    #[account(0, writable, name = "pda_account", desc = "PDA to update")]
    #[account(1, signer, name = "authority", desc = "Stored authority")]
    UpdateData,
}

impl TryFrom<&u8> for ResizablePdaInstruction {
    type Error = ProgramError;

    fn try_from(value: &u8) -> Result<Self, Self::Error> {
        match *value {
            0 => Ok(ResizablePdaInstruction::Initialize),
            1 => Ok(ResizablePdaInstruction::CreateAccount),
            2 => Ok(ResizablePdaInstruction::ResizeAccount),
            3 => Ok(ResizablePdaInstruction::UpdateData),
            _ => Err(ProgramError::InvalidInstructionData),
        }
    }
}
