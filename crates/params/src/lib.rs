//! Constant values for msgcrypt cryptographic operations
//!
//! Every size and round count used by the block engine and the message
//! wrapper lives here.

#![no_std]

pub mod utils;

pub use utils::symmetric::*;
