//! Validation utilities for cryptographic primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a key length
#[inline(always)]
pub fn key_length(algorithm: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::KeyLength {
            algorithm,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that exactly one block was supplied
#[inline(always)]
pub fn block_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::BlockLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a length is a whole number of blocks
#[inline(always)]
pub fn block_multiple(context: &'static str, actual: usize, block_size: usize) -> Result<()> {
    if actual % block_size != 0 {
        return Err(Error::Length {
            context,
            expected: (actual / block_size + 1) * block_size,
            actual,
        });
    }
    Ok(())
}
