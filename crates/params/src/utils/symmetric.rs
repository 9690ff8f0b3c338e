//! Constants for symmetric encryption algorithms

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Number of 32-bit words in an AES-256 key (Nk)
pub const AES256_KEY_WORDS: usize = 8;

/// Number of rounds for AES-256 (Nr)
pub const AES256_ROUNDS: usize = 14;

/// Number of 32-bit words in one round key / the state (Nb)
pub const AES_STATE_COLUMNS: usize = 4;

/// Number of words in an expanded AES-256 key schedule: Nb * (Nr + 1)
pub const AES256_SCHEDULE_WORDS: usize = AES_STATE_COLUMNS * (AES256_ROUNDS + 1);

/// CBC initialization vector size in bytes
pub const CBC_IV_SIZE: usize = AES_BLOCK_SIZE;

/// Smallest valid decoded message blob: the IV plus one ciphertext block
pub const CBC_MIN_MESSAGE_SIZE: usize = CBC_IV_SIZE + AES_BLOCK_SIZE;
