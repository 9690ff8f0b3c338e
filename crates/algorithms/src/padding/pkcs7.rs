//! PKCS#7 padding
//!
//! Padding always appends between 1 and `block_size` bytes, each equal to
//! the number of bytes appended, so an already aligned input grows by a
//! full block.
//!
//! Removal is lenient: only the final byte is consulted and the padding
//! bytes themselves are not checked. Decryption under a wrong key or of
//! tampered data therefore usually yields garbage rather than an error.

use crate::error::{validate, Result};

/// Pads `data` to a multiple of `block_size`
///
/// # Panics
///
/// Panics if `block_size` is zero or larger than 255, neither of which can
/// be expressed as a PKCS#7 pad byte.
pub fn pad(data: &[u8], block_size: usize) -> Vec<u8> {
    assert!(
        (1..=255).contains(&block_size),
        "PKCS#7 block size must be in 1..=255"
    );

    let pad_len = block_size - data.len() % block_size;
    let mut out = Vec::with_capacity(data.len() + pad_len);
    out.extend_from_slice(data);
    out.resize(data.len() + pad_len, pad_len as u8);
    out
}

/// Strips PKCS#7 padding from `data`
///
/// Reads the last byte `p` and drops the final `p` bytes. Fails only when
/// `p` exceeds the data length; `p == data.len()` yields an empty message.
/// Empty input is returned unchanged.
pub fn unpad(data: &[u8]) -> Result<&[u8]> {
    let Some(&last) = data.last() else {
        return Ok(data);
    };

    let pad_len = last as usize;
    validate::parameter(
        pad_len <= data.len(),
        "PKCS#7 padding",
        "padding length exceeds data length",
    )?;

    Ok(&data[..data.len() - pad_len])
}
