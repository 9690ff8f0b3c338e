//! Internal utilities shared by the msgcrypt crates
//!
//! Nothing in here is part of the public API surface; the items are public
//! only so sibling crates can reach them.

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
