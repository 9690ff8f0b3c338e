//! Error type definitions for cryptographic operations

use thiserror::Error as ThisError;

/// Primary error type for cryptographic operations
///
/// Every fallible operation in the public API reports one of these.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Key material of the wrong size was handed to key expansion
    #[error("{context}: invalid key length (expected {expected}, got {actual})")]
    InvalidKeyLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A block operation received something other than one block
    #[error("{context}: invalid block length (expected {expected}, got {actual})")]
    InvalidBlockLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid length error for any other fixed-size container
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Absent message, or a decoded ciphertext of impossible shape
    #[error("{context}: {message}")]
    InvalidArgument {
        context: &'static str,
        message: String,
    },

    /// Text that could not be decoded (Base64 transport or UTF-8 plaintext)
    #[error("Invalid encoding: {context}: {message}")]
    InvalidEncoding {
        context: &'static str,
        message: String,
    },

    /// The secure random source failed to produce bytes
    #[error("Random generation error: {context}: {message}")]
    RandomGenerationError {
        context: &'static str,
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an `InvalidArgument` error
    pub fn argument(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an `InvalidEncoding` error
    pub fn encoding(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidEncoding {
            context,
            message: message.into(),
        }
    }
}
