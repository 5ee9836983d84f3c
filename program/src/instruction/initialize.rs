use pinocchio::{account_info::AccountInfo, msg, pubkey::Pubkey, ProgramResult};

/// No accounts, no state. Succeeds so clients can confirm the program is
/// deployed and reachable.
pub fn process_initialize(program_id: &Pubkey, _accounts: &[AccountInfo]) -> ProgramResult {
    msg!("Greetings from:");
    pinocchio::pubkey::log(program_id);
    Ok(())
}
