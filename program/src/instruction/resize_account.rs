use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_system::instructions::Transfer;

use crate::{
    error::ResizablePdaError,
    helpers::{load_authorized, relocate_lamports, RentAdjustment},
    state::{PdaAccount, ResizeAccountData},
};

/// Resizes the PDA's data buffer to exactly `new_size` bytes and keeps the
/// account at its rent-exempt minimum.
///
/// Growing zero-fills the new tail and the authority pays the rent shortfall;
/// shrinking truncates and the surplus lamports go back to the authority.
/// The runtime caps growth per instruction (`MAX_PERMITTED_DATA_INCREASE`).
///
/// Accounts (exactly 3):
/// 0. `[writable]`         PDA account
/// 1. `[writable, signer]` Authority stored in the PDA
/// 2. `[]`                 System program
pub fn process_resize_account(accounts: &[AccountInfo], args: ResizeAccountData) -> ProgramResult {
    let [pda_account_info, authority_info, system_program_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    let header = load_authorized(pda_account_info, authority_info)?;
    if system_program_info.key() != &pinocchio_system::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    let new_size = usize::try_from(args.new_size)
        .ok()
        .filter(|size| *size <= PdaAccount::MAX_DATA_LEN)
        .ok_or(ResizablePdaError::SizeTooLarge)?;
    let old_size = header.data_len();

    let new_space = PdaAccount::space_for(new_size);
    let required_lamports = Rent::get()?.minimum_balance(new_space);

    match RentAdjustment::compute(pda_account_info.lamports(), required_lamports) {
        RentAdjustment::TopUp(lamports) => Transfer {
            from: authority_info,
            to: pda_account_info,
            lamports,
        }
        .invoke()?,
        RentAdjustment::Refund(lamports) => {
            relocate_lamports(pda_account_info, authority_info, lamports)?
        }
        RentAdjustment::Balanced => {}
    }

    pda_account_info.resize(new_space)?;
    {
        let mut data = pda_account_info.try_borrow_mut_data()?;
        PdaAccount::sync_after_resize(&mut data)?;
    }

    log!("Resized PDA from {} to {} bytes", old_size, new_size);
    Ok(())
}
