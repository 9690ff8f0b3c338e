//! Symmetric cipher traits for msgcrypt-symmetric
//!
//! This module defines the traits shared by the message ciphers in this
//! crate.

use crate::error::Result;

/// Common trait for all symmetric encryption algorithms
pub trait SymmetricCipher {
    /// The key type used by this cipher
    type Key;

    /// Creates a new cipher instance with the given key
    fn new(key: &Self::Key) -> Result<Self>
    where
        Self: Sized;

    /// Returns the name of this cipher
    fn name() -> &'static str;
}

/// Text message encryption producing printable, self-contained blobs
pub trait MessageCipher: SymmetricCipher {
    /// Encrypts a UTF-8 message into an encoded blob
    fn encrypt(&self, message: &str) -> Result<String>;

    /// Decrypts an encoded blob back into the original message
    fn decrypt(&self, blob: &str) -> Result<String>;
}
