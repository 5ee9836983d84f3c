use pinocchio::{
    account_info::AccountInfo,
    instruction::{Seed, Signer},
    program_error::ProgramError,
    sysvars::{rent::Rent, Sysvar},
    ProgramResult,
};
use pinocchio_log::log;
use pinocchio_system::instructions::{Allocate, Assign, CreateAccount, Transfer};

use crate::{
    error::ResizablePdaError,
    helpers::{derive_pda, SEED_PREFIX},
    state::{CreateAccountData, PdaAccount},
};

/// Creates the PDA for `(user, nonce)` and stores the initial message.
///
/// An address that already holds lamports but no data (someone transferred
/// to it) is still usable: the user only tops it up to the rent-exempt
/// minimum before the PDA allocates and assigns itself.
///
/// Accounts (exactly 3):
/// 0. `[writable]`         PDA account, derived from `["my-seed", user, nonce_le]`
/// 1. `[writable, signer]` User; pays rent and becomes the authority
/// 2. `[]`                 System program
pub fn process_create_account(accounts: &[AccountInfo], args: CreateAccountData) -> ProgramResult {
    let [pda_account_info, user_info, system_program_info, _rest @ ..] = accounts else {
        return Err(ProgramError::NotEnoughAccountKeys);
    };

    if !user_info.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    if system_program_info.key() != &pinocchio_system::ID {
        return Err(ProgramError::IncorrectProgramId);
    }

    // Only the canonical bump is accepted
    let (expected_pda, bump) = derive_pda(user_info.key(), args.nonce, &crate::ID);
    if pda_account_info.key() != &expected_pda {
        return Err(ProgramError::InvalidSeeds);
    }
    let current_lamports = pda_account_info.lamports();
    if pda_account_info.data_len() != 0
        || (current_lamports != 0 && !pda_account_info.is_owned_by(&pinocchio_system::ID))
    {
        return Err(ProgramError::AccountAlreadyInitialized);
    }

    let message = args.message.as_bytes();
    if message.len() > PdaAccount::MAX_DATA_LEN {
        return Err(ResizablePdaError::SizeTooLarge.into());
    }
    let space = PdaAccount::space_for(message.len());
    let lamports = Rent::get()?.minimum_balance(space);

    let nonce_bytes = args.nonce.to_le_bytes();
    let bump_bytes = [bump];
    let seeds = [
        Seed::from(SEED_PREFIX),
        Seed::from(user_info.key()),
        Seed::from(&nonce_bytes),
        Seed::from(&bump_bytes),
    ];

    if current_lamports == 0 {
        CreateAccount {
            from: user_info,
            to: pda_account_info,
            lamports,
            space: space as u64,
            owner: &crate::ID,
        }
        .invoke_signed(&[Signer::from(&seeds)])?;
    } else {
        let shortfall = lamports.saturating_sub(current_lamports);
        if shortfall > 0 {
            Transfer {
                from: user_info,
                to: pda_account_info,
                lamports: shortfall,
            }
            .invoke()?;
        }
        Allocate {
            account: pda_account_info,
            space: space as u64,
        }
        .invoke_signed(&[Signer::from(&seeds)])?;
        Assign {
            account: pda_account_info,
            owner: &crate::ID,
        }
        .invoke_signed(&[Signer::from(&seeds)])?;
    }

    {
        let mut data = pda_account_info.try_borrow_mut_data()?;
        PdaAccount::initialize(&mut data, user_info.key(), args.nonce, message)?;
    }

    log!(1024, "Created PDA with message: {}", args.message);
    Ok(())
}
