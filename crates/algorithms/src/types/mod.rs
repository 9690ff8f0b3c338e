//! Type-safe wrappers for cryptographic types
//!
//! This module provides domain-specific types with compile-time and runtime
//! guarantees for cryptographic operations.

// Submodules
pub mod nonce;

// Sealed trait module (not public)
pub(crate) mod sealed;

// Re-export main types
pub use nonce::{CbcCompatible, Nonce};

// Import and re-export core types
pub use api::types::SecretBytes;
