//! Symmetric message encryption for the msgcrypt library
//!
//! This crate wraps the AES-256 block engine from `msgcrypt-algorithms` into
//! a string-in, string-out message cipher: PKCS#7 padding, a fresh random IV
//! per message, CBC chaining and standard Base64 framing of `IV ‖ ciphertext`.
//!
//! ```
//! use msgcrypt_symmetric::{Aes256Cbc, MessageCipher};
//!
//! # fn main() -> msgcrypt_symmetric::Result<()> {
//! let cipher = Aes256Cbc::with_fresh_key()?;
//! let blob = cipher.encrypt("Hello, World!")?;
//! assert_eq!(cipher.decrypt(&blob)?, "Hello, World!");
//! # Ok(())
//! # }
//! ```
//!
//! The ciphertext is **not authenticated**. A modified blob usually decrypts
//! to garbage instead of failing; pair it with a MAC or signature where
//! integrity matters.

#![forbid(unsafe_code)]

pub mod aes;
pub mod cbc;
pub mod cipher;
pub mod error;

// Re-export main types for convenience
pub use aes::Aes256Key;
pub use cbc::{Aes256Cbc, CbcPackage};
pub use cipher::{MessageCipher, SymmetricCipher};

// Re-export the API error system instead of custom error types
pub use api::error::{validate, Error, Result};
