//! Testing utilities for the msgcrypt library
//!
//! Holds the known-answer vectors shared by the integration and property
//! tests under `tests/`.


/// Decode a hex vector field, panicking on malformed test data
pub fn unhex(field: &str) -> Vec<u8> {
    hex::decode(field).unwrap_or_else(|e| panic!("bad hex in test vector {field:?}: {e}"))
}
