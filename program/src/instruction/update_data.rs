use pinocchio::{account_info::AccountInfo, program_error::ProgramError, ProgramResult};
use pinocchio_log::log;

use crate::{
    helpers::{load_authorized, printable},
    state::{PdaAccount, UpdateDataArgs},
};

/// Accounts (exactly 2):
/// 0. `[writable]` PDA account
/// 1. `[signer]`   Authority stored in the PDA
pub fn process_update_data(accounts: &[AccountInfo], args: UpdateDataArgs) -> ProgramResult {
    let [pda_account_info, authority_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    load_authorized(pda_account_info, authority_info)?;

    let mut data = pda_account_info.try_borrow_mut_data()?;
    PdaAccount::write_message(&mut data, args.new_message.as_bytes())?;

    log!(
        1024,
        "Updated PDA with new message: {}",
        printable(PdaAccount::stored_data(&data))
    );
    Ok(())
}
