//! Public API traits and types for the msgcrypt library
//!
//! This crate provides the public API surface for the msgcrypt workspace:
//! the unified error type, validation helpers, serialization traits and the
//! zeroizing secret containers that hold key material.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::SecretBytes;

// Re-export all traits from the traits module
pub use traits::{Serialize, SerializeSecret};
