use pinocchio::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey};
use shank::ShankAccount;

use crate::error::ResizablePdaError;
use crate::helpers::constant::{MAX_PERMITTED_DATA_LENGTH, PDA_ACCOUNT_DISCRIMINATOR};

/// Fixed header at the start of every PDA account. The stored message follows
/// it directly, so the account is always `PdaAccount::LEN + data_len` bytes.
///
/// Every field is a byte array, so the struct has alignment 1 and can be read
/// in place from account data.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankAccount)]
pub struct PdaAccount {
    pub discriminator: [u8; 8],
    /// Only this key may resize or update the account
    pub authority: Pubkey,
    /// u64 LE, part of the PDA seeds
    pub nonce: [u8; 8],
    /// u32 LE length of the trailing data buffer
    pub data_len: [u8; 4],
}

const _: () = assert!(PdaAccount::LEN == 8 + 32 + 8 + 4);

impl PdaAccount {
    pub const LEN: usize = core::mem::size_of::<PdaAccount>();

    /// Largest data buffer an account can carry.
    pub const MAX_DATA_LEN: usize = MAX_PERMITTED_DATA_LENGTH - Self::LEN;

    /// Total account space for a data buffer of `data_len` bytes.
    #[inline]
    pub const fn space_for(data_len: usize) -> usize {
        Self::LEN + data_len
    }

    #[inline]
    pub fn nonce(&self) -> u64 {
        u64::from_le_bytes(self.nonce)
    }

    #[inline]
    pub fn data_len(&self) -> usize {
        u32::from_le_bytes(self.data_len) as usize
    }

    #[inline]
    pub fn set_data_len(&mut self, len: u32) {
        self.data_len = len.to_le_bytes();
    }

    #[inline]
    pub fn is_authority(&self, pubkey: &Pubkey) -> bool {
        self.authority == *pubkey
    }

    /// Reads the header from raw account data, checking the discriminator and
    /// that the recorded length matches what is actually stored.
    pub fn from_bytes(data: &[u8]) -> Result<&Self, ProgramError> {
        if data.len() < Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        // alignment 1, size checked above
        let header = unsafe { &*(data.as_ptr() as *const Self) };
        header.validate(data.len())?;
        Ok(header)
    }

    pub fn from_bytes_mut(data: &mut [u8]) -> Result<&mut Self, ProgramError> {
        if data.len() < Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        let total = data.len();
        let header = unsafe { &mut *(data.as_mut_ptr() as *mut Self) };
        header.validate(total)?;
        Ok(header)
    }

    fn validate(&self, total_len: usize) -> Result<(), ProgramError> {
        if self.discriminator != PDA_ACCOUNT_DISCRIMINATOR {
            return Err(ProgramError::InvalidAccountData);
        }
        if Self::space_for(self.data_len()) != total_len {
            return Err(ProgramError::InvalidAccountData);
        }
        Ok(())
    }

    /// Writes a fresh header followed by `message` into freshly allocated
    /// account data. `data` must be exactly `space_for(message.len())` long.
    pub fn initialize(
        data: &mut [u8],
        authority: &Pubkey,
        nonce: u64,
        message: &[u8],
    ) -> Result<(), ProgramError> {
        if data.len() != Self::space_for(message.len()) {
            return Err(ProgramError::InvalidAccountData);
        }
        let data_len = u32::try_from(message.len()).map_err(|_| ProgramError::InvalidArgument)?;

        let (head, body) = data.split_at_mut(Self::LEN);
        let header = unsafe { &mut *(head.as_mut_ptr() as *mut Self) };
        header.discriminator = PDA_ACCOUNT_DISCRIMINATOR;
        header.authority = *authority;
        header.nonce = nonce.to_le_bytes();
        header.set_data_len(data_len);
        body.copy_from_slice(message);
        Ok(())
    }

    /// Brings the header in line with account data that was just reallocated:
    /// bytes past the previously stored length are zeroed and the length field
    /// is set to the new buffer size. Returns the previous length.
    pub fn sync_after_resize(data: &mut [u8]) -> Result<usize, ProgramError> {
        if data.len() < Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        let new_len = data.len() - Self::LEN;
        let stored_len = u32::try_from(new_len).map_err(|_| ResizablePdaError::SizeTooLarge)?;

        let (head, body) = data.split_at_mut(Self::LEN);
        let header = unsafe { &mut *(head.as_mut_ptr() as *mut Self) };
        if header.discriminator != PDA_ACCOUNT_DISCRIMINATOR {
            return Err(ProgramError::InvalidAccountData);
        }
        let old_len = header.data_len();
        if new_len > old_len {
            body[old_len..].fill(0);
        }
        header.set_data_len(stored_len);
        Ok(old_len)
    }

    /// Overwrites the start of the data buffer with `message`. The buffer never
    /// grows here; the rest of it is left as is.
    pub fn write_message(data: &mut [u8], message: &[u8]) -> Result<(), ProgramError> {
        Self::from_bytes_mut(data)?;
        let stored = Self::stored_data_mut(data);
        if message.len() > stored.len() {
            return Err(ResizablePdaError::DataTooLarge.into());
        }
        stored[..message.len()].copy_from_slice(message);
        Ok(())
    }

    /// The stored data buffer (everything after the header).
    #[inline]
    pub fn stored_data(data: &[u8]) -> &[u8] {
        data.get(Self::LEN..).unwrap_or(&[])
    }

    #[inline]
    pub fn stored_data_mut(data: &mut [u8]) -> &mut [u8] {
        data.get_mut(Self::LEN..).unwrap_or(&mut [])
    }

    /// Copy of the header of a program-owned account.
    pub fn load(account: &AccountInfo) -> Result<Self, ProgramError> {
        if !account.is_owned_by(&crate::ID) {
            return Err(ProgramError::InvalidAccountOwner);
        }
        let data = account.try_borrow_data()?;
        let header = *Self::from_bytes(&data)?;
        Ok(header)
    }
}
