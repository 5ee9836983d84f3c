//! Instruction builders for the resizable PDA program.

use resizable_pda::{
    helpers::{MAX_PERMITTED_DATA_INCREASE, SEED_PREFIX},
    instruction::ResizablePdaInstruction,
    state::{CreateAccountData, ResizeAccountData, UpdateDataArgs},
};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    system_program,
};

pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(resizable_pda::ID)
}

/// PDA and canonical bump for `user` and `nonce`, using the program's seeds.
pub fn derive_pda(user: &Pubkey, nonce: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SEED_PREFIX, user.as_ref(), &nonce.to_le_bytes()], &program_id())
}

pub fn initialize() -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: vec![],
        data: vec![ResizablePdaInstruction::Initialize as u8],
    }
}

pub fn create_account(user: &Pubkey, nonce: u64, message: &str) -> Instruction {
    let (pda, _) = derive_pda(user, nonce);
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(pda, false),
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: CreateAccountData { nonce, message }.pack(),
    }
}

pub fn resize_account(authority: &Pubkey, nonce: u64, new_size: u64) -> Instruction {
    let (pda, _) = derive_pda(authority, nonce);
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(pda, false),
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data: ResizeAccountData { new_size }.pack(),
    }
}

pub fn update_data(authority: &Pubkey, nonce: u64, new_message: &str) -> Instruction {
    let (pda, _) = derive_pda(authority, nonce);
    Instruction {
        program_id: program_id(),
        accounts: vec![
            AccountMeta::new(pda, false),
            AccountMeta::new_readonly(*authority, true),
        ],
        data: UpdateDataArgs { new_message }.pack(),
    }
}

/// Intermediate sizes for going from `current` to `target`. The runtime lets a
/// single instruction grow an account by at most `MAX_PERMITTED_DATA_INCREASE`
/// bytes, so large growth is split; shrinking is always one step.
pub fn resize_steps(current: u64, target: u64) -> Vec<u64> {
    let step = MAX_PERMITTED_DATA_INCREASE as u64;
    if target <= current {
        return if target == current { Vec::new() } else { vec![target] };
    }
    let mut sizes = Vec::new();
    let mut size = current;
    while size < target {
        size = size.saturating_add(step).min(target);
        sizes.push(size);
    }
    sizes
}
