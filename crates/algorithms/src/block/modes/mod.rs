//! Block cipher modes of operation

pub mod cbc;

// Re-exports
pub use cbc::Cbc;
