//! Block cipher implementations and modes of operation
//!
//! The [`BlockCipher`] trait is the seam between the AES-256 engine and the
//! modes built on top of it: a mode only ever sees `encrypt_block` /
//! `decrypt_block` on one block at a time.

use rand::{CryptoRng, RngCore};

use crate::error::Result;

pub mod aes;
pub mod modes;

// Re-exports
pub use aes::{Aes256, KeySchedule};
pub use modes::Cbc;

/// Type-level constants describing a block cipher
pub trait CipherAlgorithm {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Block size in bytes
    const BLOCK_SIZE: usize;

    /// Human-readable algorithm name
    fn name() -> &'static str;

    /// Key size in bytes
    fn key_size() -> usize {
        Self::KEY_SIZE
    }

    /// Block size in bytes
    fn block_size() -> usize {
        Self::BLOCK_SIZE
    }
}

/// A keyed block cipher operating on one block at a time
pub trait BlockCipher: Sized {
    /// Key type accepted by [`BlockCipher::new`]
    type Key;

    /// Creates a cipher instance, expanding the key once
    fn new(key: &Self::Key) -> Self;

    /// Encrypts exactly one block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts exactly one block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Draws a fresh random key from a cryptographically secure source
    fn generate_key<R: RngCore + CryptoRng>(
        rng: &mut R,
    ) -> core::result::Result<Self::Key, rand::Error>;
}
