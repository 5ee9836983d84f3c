/// First seed of every PDA: `["my-seed", user, nonce_le]`.
pub const SEED_PREFIX: &[u8] = b"my-seed";

/// `sha256("account:PDAAccount")[..8]`
pub const PDA_ACCOUNT_DISCRIMINATOR: [u8; 8] = [0x2d, 0x90, 0xf6, 0x2a, 0x58, 0xea, 0x5d, 0x02];

// Runtime limits (solana_program::entrypoint / system_instruction)
pub const MAX_PERMITTED_DATA_LENGTH: usize = 10 * 1024 * 1024;
pub const MAX_PERMITTED_DATA_INCREASE: usize = 10 * 1024;
