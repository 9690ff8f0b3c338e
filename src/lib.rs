//! # msgcrypt
//!
//! AES-256-CBC message encryption for chat applications, built on a
//! from-scratch AES-256 block engine.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! msgcrypt = "0.3"
//! ```
//!
//! ```
//! use msgcrypt::prelude::*;
//!
//! # fn main() -> msgcrypt::prelude::Result<()> {
//! let (alice, key) = Aes256Cbc::generate()?;
//! let bob = Aes256Cbc::from_key_bytes(key.as_bytes())?;
//!
//! let blob = alice.encrypt("See you at noon")?;
//! assert_eq!(bob.decrypt(&blob)?, "See you at noon");
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `algorithms` (default): the AES-256 engine, CBC mode and PKCS#7 padding
//! - `symmetric` (default): the Base64 message wrapper on top of `algorithms`
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`msgcrypt-api`]: Error types, validation helpers and secret containers
//! - [`msgcrypt-params`]: Algorithm constants
//! - [`msgcrypt-internal`]: Constant-time and byte-order helpers
//! - [`msgcrypt-algorithms`]: AES-256, GF(2⁸) arithmetic, CBC, PKCS#7
//! - [`msgcrypt-symmetric`]: AES-256-CBC message encryption
//!
//! ## Security
//!
//! Ciphertexts carry no authentication tag. A modified blob is not detected
//! and usually decrypts to garbage. Authenticate blobs separately where
//! integrity matters.

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use msgcrypt_api as api;
pub use msgcrypt_internal as internal;
pub use msgcrypt_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use msgcrypt_algorithms as algorithms;

#[cfg(feature = "symmetric")]
pub use msgcrypt_symmetric as symmetric;

// Re-export workspace dependencies that users might need
pub use rand;
pub use zeroize;

/// Common imports for msgcrypt users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Serialize, SerializeSecret};

    // Re-export security types
    pub use crate::api::SecretBytes;

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{Aes256, BlockCipher, Cbc, CipherAlgorithm, Nonce};

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{Aes256Cbc, Aes256Key, CbcPackage, MessageCipher, SymmetricCipher};
}
