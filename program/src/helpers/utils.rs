use pinocchio::{
    account_info::AccountInfo,
    program_error::ProgramError,
    pubkey::{find_program_address, Pubkey},
    ProgramResult,
};

use crate::error::ResizablePdaError;
use crate::helpers::constant::SEED_PREFIX;
use crate::state::PdaAccount;

/// Canonical PDA and bump for `user` and `nonce`.
#[inline]
pub fn derive_pda(user: &Pubkey, nonce: u64, program_id: &Pubkey) -> (Pubkey, u8) {
    find_program_address(&[SEED_PREFIX, user.as_ref(), &nonce.to_le_bytes()], program_id)
}

/// Signer + owner + has_one(authority) checks shared by resize and update.
/// Returns a copy of the stored header.
pub fn load_authorized(
    pda_account_info: &AccountInfo,
    authority_info: &AccountInfo,
) -> Result<PdaAccount, ProgramError> {
    if !authority_info.is_signer() {
        return Err(ProgramError::MissingRequiredSignature);
    }
    if !pda_account_info.is_writable() {
        return Err(ProgramError::InvalidAccountData);
    }
    let header = PdaAccount::load(pda_account_info)?;
    if !header.is_authority(authority_info.key()) {
        return Err(ResizablePdaError::AuthorityMismatch.into());
    }
    Ok(header)
}

/// How an account's balance has to move to sit exactly at a new rent-exempt
/// minimum (never below it).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RentAdjustment {
    /// Payer must fund this many lamports
    TopUp(u64),
    /// This many lamports are surplus and go back to the authority
    Refund(u64),
    Balanced,
}

impl RentAdjustment {
    pub fn compute(current_lamports: u64, required_lamports: u64) -> Self {
        match current_lamports.cmp(&required_lamports) {
            core::cmp::Ordering::Less => Self::TopUp(required_lamports - current_lamports),
            core::cmp::Ordering::Greater => Self::Refund(current_lamports - required_lamports),
            core::cmp::Ordering::Equal => Self::Balanced,
        }
    }
}

// Move lamports between two accounts (checked). Source must be owned by this program.
pub fn relocate_lamports(
    source_account_info: &AccountInfo,
    destination_account_info: &AccountInfo,
    lamports: u64,
) -> ProgramResult {
    {
        let mut source_lamports = source_account_info.try_borrow_mut_lamports()?;
        *source_lamports = source_lamports
            .checked_sub(lamports)
            .ok_or(ProgramError::InsufficientFunds)?;
    }
    {
        let mut destination_lamports = destination_account_info.try_borrow_mut_lamports()?;
        *destination_lamports = destination_lamports
            .checked_add(lamports)
            .ok_or(ProgramError::ArithmeticOverflow)?;
    }
    Ok(())
}

/// Longest prefix of `data` that is valid UTF-8. Zero padding left by a resize
/// is kept. Used for log lines only.
pub fn printable(data: &[u8]) -> &str {
    match core::str::from_utf8(data) {
        Ok(s) => s,
        // valid_up_to() always lands on a char boundary
        Err(e) => core::str::from_utf8(&data[..e.valid_up_to()]).unwrap_or_default(),
    }
}
