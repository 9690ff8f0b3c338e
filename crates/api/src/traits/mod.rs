//! Trait definitions shared across the msgcrypt crates

pub mod serialize;

pub use serialize::{Serialize, SerializeSecret};
