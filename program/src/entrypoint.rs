use pinocchio::{
    account_info::AccountInfo, msg, program_entrypoint, program_error::ProgramError,
    pubkey::Pubkey, ProgramResult,
};

use crate::{
    instruction::{self, ResizablePdaInstruction},
    state::{CreateAccountData, ResizeAccountData, UpdateDataArgs},
};

// Entrypoint macro
program_entrypoint!(process_instruction);

#[inline(always)]
fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    if *program_id != crate::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    let (disc, payload) = instruction_data
        .split_first()
        .ok_or(ProgramError::InvalidInstructionData)?;

    match ResizablePdaInstruction::try_from(disc)? {
        ResizablePdaInstruction::Initialize => {
            msg!("Instruction: Initialize");
            if !payload.is_empty() {
                return Err(ProgramError::InvalidInstructionData);
            }
            instruction::initialize::process_initialize(program_id, accounts)
        }
        ResizablePdaInstruction::CreateAccount => {
            msg!("Instruction: CreateAccount");
            let args = CreateAccountData::parse(payload)?;
            instruction::create_account::process_create_account(accounts, args)
        }
        ResizablePdaInstruction::ResizeAccount => {
            msg!("Instruction: ResizeAccount");
            let args = ResizeAccountData::parse(payload)?;
            instruction::resize_account::process_resize_account(accounts, args)
        }
        ResizablePdaInstruction::UpdateData => {
            msg!("Instruction: UpdateData");
            let args = UpdateDataArgs::parse(payload)?;
            instruction::update_data::process_update_data(accounts, args)
        }
    }
}
