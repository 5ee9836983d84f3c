use pinocchio::program_error::ProgramError;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(feature = "std")]
use crate::instruction::ResizablePdaInstruction;

// Payload readers. Every instruction payload must be consumed exactly;
// trailing bytes are rejected.

fn take_u64(data: &[u8]) -> Result<(u64, &[u8]), ProgramError> {
    if data.len() < 8 {
        return Err(ProgramError::InvalidInstructionData);
    }
    let (head, rest) = data.split_at(8);
    let mut buf = [0u8; 8];
    buf.copy_from_slice(head);
    Ok((u64::from_le_bytes(buf), rest))
}

fn take_str(data: &[u8]) -> Result<(&str, &[u8]), ProgramError> {
    if data.len() < 4 {
        return Err(ProgramError::InvalidInstructionData);
    }
    let (head, rest) = data.split_at(4);
    let mut buf = [0u8; 4];
    buf.copy_from_slice(head);
    let len = u32::from_le_bytes(buf) as usize;
    if rest.len() < len {
        return Err(ProgramError::InvalidInstructionData);
    }
    let (bytes, rest) = rest.split_at(len);
    let s = core::str::from_utf8(bytes).map_err(|_| ProgramError::InvalidInstructionData)?;
    Ok((s, rest))
}

fn finish(rest: &[u8]) -> Result<(), ProgramError> {
    if rest.is_empty() {
        Ok(())
    } else {
        Err(ProgramError::InvalidInstructionData)
    }
}

#[cfg(feature = "std")]
fn put_str(out: &mut Vec<u8>, s: &str) {
    out.extend_from_slice(&(s.len() as u32).to_le_bytes());
    out.extend_from_slice(s.as_bytes());
}

/// Payload of `CreateAccount`: nonce (u64 LE), then a u32-prefixed UTF-8 message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CreateAccountData<'a> {
    pub nonce: u64,
    pub message: &'a str,
}

impl<'a> CreateAccountData<'a> {
    pub fn parse(payload: &'a [u8]) -> Result<Self, ProgramError> {
        let (nonce, rest) = take_u64(payload)?;
        let (message, rest) = take_str(rest)?;
        finish(rest)?;
        Ok(Self { nonce, message })
    }

    /// Full instruction data, discriminator included.
    #[cfg(feature = "std")]
    pub fn pack(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + 8 + 4 + self.message.len());
        out.push(ResizablePdaInstruction::CreateAccount as u8);
        out.extend_from_slice(&self.nonce.to_le_bytes());
        put_str(&mut out, self.message);
        out
    }
}

/// Payload of `ResizeAccount`: the new data buffer size (u64 LE).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeAccountData {
    pub new_size: u64,
}

impl ResizeAccountData {
    pub fn parse(payload: &[u8]) -> Result<Self, ProgramError> {
        let (new_size, rest) = take_u64(payload)?;
        finish(rest)?;
        Ok(Self { new_size })
    }

    #[cfg(feature = "std")]
    pub fn pack(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + 8);
        out.push(ResizablePdaInstruction::ResizeAccount as u8);
        out.extend_from_slice(&self.new_size.to_le_bytes());
        out
    }
}

/// Payload of `UpdateData`: a u32-prefixed UTF-8 message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpdateDataArgs<'a> {
    pub new_message: &'a str,
}

impl<'a> UpdateDataArgs<'a> {
    pub fn parse(payload: &'a [u8]) -> Result<Self, ProgramError> {
        let (new_message, rest) = take_str(payload)?;
        finish(rest)?;
        Ok(Self { new_message })
    }

    #[cfg(feature = "std")]
    pub fn pack(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + 4 + self.new_message.len());
        out.push(ResizablePdaInstruction::UpdateData as u8);
        put_str(&mut out, self.new_message);
        out
    }
}
