use pinocchio::program_error::ProgramError;

/// First custom error code.
pub const ERROR_CODE_OFFSET: u32 = 6000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ResizablePdaError {
    /// New message is too large for the allocated space.
    DataTooLarge = ERROR_CODE_OFFSET,
    /// Signer is not the authority of this PDA.
    AuthorityMismatch,
    /// Requested size exceeds the maximum account size.
    SizeTooLarge,
}

impl ResizablePdaError {
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            6000 => Some(Self::DataTooLarge),
            6001 => Some(Self::AuthorityMismatch),
            6002 => Some(Self::SizeTooLarge),
            _ => None,
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            Self::DataTooLarge => "New message is too large for the allocated space.",
            Self::AuthorityMismatch => "Signer is not the authority of this PDA.",
            Self::SizeTooLarge => "Requested size exceeds the maximum account size.",
        }
    }
}

// map internal errors to standard program error
pub fn to_program_error(err: ResizablePdaError) -> ProgramError {
    ProgramError::Custom(err.code())
}

impl From<ResizablePdaError> for ProgramError {
    fn from(err: ResizablePdaError) -> Self {
        to_program_error(err)
    }
}
