//! AES key material
//!
//! Only the 256-bit variant exists in this crate.

pub mod keys;

pub use keys::Aes256Key;
