//! Error handling for cryptographic primitives

use core::fmt;

use api::Error as CoreError;

/// The error type for cryptographic primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key material of the wrong size
    KeyLength {
        /// Algorithm that rejected the key
        algorithm: &'static str,
        /// Expected key length in bytes
        expected: usize,
        /// Actual key length in bytes
        actual: usize,
    },

    /// Input to a single-block operation was not one block
    BlockLength {
        /// Context where the block error occurred
        context: &'static str,
        /// Expected block length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Length validation error for other buffers
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param(name: &'static str, reason: &'static str) -> Self {
        Error::Parameter { name, reason }
    }
}

/// Result type for cryptographic primitives operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::KeyLength { algorithm, expected, actual } => {
                write!(f, "Invalid {} key length: expected {}, got {}",
                    algorithm, expected, actual)
            },
            Error::BlockLength { context, expected, actual } => {
                write!(f, "Invalid block length for {}: expected {}, got {}",
                    context, expected, actual)
            },
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}",
                    context, expected, actual)
            },
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            },
        }
    }
}

impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::KeyLength { algorithm, expected, actual } => CoreError::InvalidKeyLength {
                context: algorithm,
                expected,
                actual,
            },
            Error::BlockLength { context, expected, actual } => CoreError::InvalidBlockLength {
                context,
                expected,
                actual,
            },
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::Parameter { name, reason } => CoreError::argument(name, reason),
        }
    }
}

// Include the validation submodule
pub mod validate;
