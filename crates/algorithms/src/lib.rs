//! Cryptographic primitives for the msgcrypt library
//!
//! This crate holds the from-scratch AES-256 block engine and the pieces a
//! mode of operation needs around it:
//!
//! - [`block::aes`]: key expansion and single-block encryption/decryption
//! - [`block::aes::gf256`]: GF(2⁸) arithmetic and the S-box tables
//! - [`block::modes::cbc`]: raw cipher block chaining over block-aligned data
//! - [`padding::pkcs7`]: PKCS#7 padding and its (lenient) removal
//!
//! Nothing here touches I/O. Randomness only enters through caller-supplied
//! `RngCore + CryptoRng` sources.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher implementations
pub mod block;
pub use block::{Aes256, BlockCipher, Cbc, CipherAlgorithm, KeySchedule};

// Padding schemes
pub mod padding;

// Type system
pub mod types;
pub use types::Nonce;
