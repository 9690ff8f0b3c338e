//! Error handling for symmetric cryptographic operations
//!
//! This module re-exports the API error system and adds the conversion from
//! primitive errors raised by the block engine.

// Re-export the primary API error system
pub use api::error::{validate, Error, Result};

// Import for conversions
use algorithms::error::Error as PrimitiveError;

/// Convert a PrimitiveError to an API Error
pub fn from_primitive_error(err: PrimitiveError) -> Error {
    Error::from(err)
}

/// Convert a Base64 decoding failure to an API Error
pub fn from_base64_error(err: base64::DecodeError) -> Error {
    Error::encoding("Base64 ciphertext", err.to_string())
}

/// Extension trait to make conversions more ergonomic
pub trait SymmetricResultExt<T> {
    /// Convert a Result with PrimitiveError to a Result with API Error
    fn map_primitive_err(self) -> Result<T>;
}

impl<T> SymmetricResultExt<T> for core::result::Result<T, PrimitiveError> {
    fn map_primitive_err(self) -> Result<T> {
        self.map_err(from_primitive_error)
    }
}

// Also implement for api::Error results (like SecretBytes operations)
impl<T> SymmetricResultExt<T> for core::result::Result<T, Error> {
    fn map_primitive_err(self) -> Result<T> {
        self
    }
}
