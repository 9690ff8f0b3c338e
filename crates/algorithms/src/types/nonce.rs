//! Type-safe nonce implementation with generic size parameter
//!
//! In this crate a nonce is the CBC initialization vector: one block of
//! random bytes that must never repeat under the same key.

use core::fmt;
use core::ops::Deref;
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::error::{validate, Result};
use crate::types::sealed::Sealed;
use params::AES_BLOCK_SIZE;

/// Generic nonce type with compile-time size guarantee
#[derive(Clone, Zeroize)]
pub struct Nonce<const N: usize> {
    data: [u8; N],
}

// Mark Nonce types as sealed
impl<const N: usize> Sealed for Nonce<N> {}

impl<const N: usize> Nonce<N> {
    /// Create a new nonce from an existing array
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a zeroed nonce
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("Nonce", slice.len(), N)?;

        let mut data = [0u8; N];
        data.copy_from_slice(slice);

        Ok(Self { data })
    }

    /// Generate a random nonce
    ///
    /// Uses `try_fill_bytes` so that a failing entropy source surfaces as an
    /// error instead of a panic.
    pub fn random<R: RngCore + CryptoRng>(rng: &mut R) -> core::result::Result<Self, rand::Error> {
        let mut data = [0u8; N];
        rng.try_fill_bytes(&mut data)?;
        Ok(Self { data })
    }

    /// Borrow the nonce as a fixed-size array
    pub fn as_array(&self) -> &[u8; N] {
        &self.data
    }
}

impl<const N: usize> AsRef<[u8]> for Nonce<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> Deref for Nonce<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<const N: usize> PartialEq for Nonce<N> {
    fn eq(&self, other: &Self) -> bool {
        self.data.ct_eq(&other.data).into()
    }
}

impl<const N: usize> Eq for Nonce<N> {}

impl<const N: usize> fmt::Debug for Nonce<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce<{}>({:?})", N, &self.data[..])
    }
}

/// Marker trait for nonces that are compatible with CBC mode
pub trait CbcCompatible: Sealed {}

impl CbcCompatible for Nonce<AES_BLOCK_SIZE> {}
