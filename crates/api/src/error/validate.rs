//! Validation utilities for public API inputs

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::argument(context, message));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a key length
#[inline(always)]
pub fn key_length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidKeyLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a minimum length; a short input is an invalid argument
#[inline(always)]
pub fn min_length(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::argument(
            context,
            format!("expected at least {} bytes, got {}", min, actual),
        ));
    }
    Ok(())
}

/// Validate that a length is a whole number of blocks
#[inline(always)]
pub fn block_aligned(context: &'static str, actual: usize, block_size: usize) -> Result<()> {
    if actual % block_size != 0 {
        return Err(Error::argument(
            context,
            format!("{} bytes is not a multiple of the {}-byte block size", actual, block_size),
        ));
    }
    Ok(())
}
