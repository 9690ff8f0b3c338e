//! Padding schemes for block-aligned modes of operation

pub mod pkcs7;

pub use pkcs7::{pad, unpad};
