//! Key types for AES-based ciphers

use core::fmt;

use api::types::SecretBytes;
use api::SerializeSecret;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use params::AES256_KEY_SIZE;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{validate, Error, Result};

const SECURE_STRING_PREFIX: &str = "MSGCRYPT-AES256-KEY:";

/// AES-256 key type
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Aes256Key(SecretBytes<AES256_KEY_SIZE>);

impl Aes256Key {
    /// Creates a new key from raw bytes
    pub fn new(bytes: [u8; AES256_KEY_SIZE]) -> Self {
        Self(SecretBytes::new(bytes))
    }

    /// Creates a key from a slice that must be exactly 32 bytes long
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        validate::key_length("AES-256 key", bytes.len(), AES256_KEY_SIZE)?;
        SecretBytes::from_slice(bytes).map(Self)
    }

    /// Creates a new random key from the operating system's CSPRNG
    pub fn generate() -> Result<Self> {
        Self::generate_with_rng(&mut OsRng)
    }

    /// Creates a new random key from a caller-supplied CSPRNG
    pub fn generate_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        SecretBytes::random(rng).map(Self)
    }

    /// Returns a reference to the raw key bytes
    pub fn as_bytes(&self) -> &[u8; AES256_KEY_SIZE] {
        &self.0
    }

    pub(crate) fn secret(&self) -> &SecretBytes<AES256_KEY_SIZE> {
        &self.0
    }

    /// Serializes the key for storage or out-of-band exchange
    pub fn to_secure_string(&self) -> Zeroizing<String> {
        let mut encoded = Zeroizing::new(String::with_capacity(SECURE_STRING_PREFIX.len() + 44));
        encoded.push_str(SECURE_STRING_PREFIX);
        STANDARD.encode_string(self.as_bytes(), &mut encoded);
        encoded
    }

    /// Loads a key from the format produced by [`Aes256Key::to_secure_string`]
    pub fn from_secure_string(serialized: &str) -> Result<Self> {
        let b64_part = serialized
            .strip_prefix(SECURE_STRING_PREFIX)
            .ok_or_else(|| Error::encoding("AES-256 key string", "missing key prefix"))?;

        let key_bytes = Zeroizing::new(
            STANDARD
                .decode(b64_part)
                .map_err(|e| Error::encoding("AES-256 key string", e.to_string()))?,
        );

        Self::from_slice(&key_bytes)
    }
}

impl AsRef<[u8]> for Aes256Key {
    fn as_ref(&self) -> &[u8] {
        self.0.as_ref()
    }
}

impl SerializeSecret for Aes256Key {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        self.0.to_bytes_zeroizing()
    }
}

impl fmt::Debug for Aes256Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Aes256Key([REDACTED])")
    }
}
