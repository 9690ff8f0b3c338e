//! AES-256-CBC message encryption
//!
//! [`Aes256Cbc`] owns one AES-256 key and its expanded schedule. Every
//! message gets a fresh random IV, PKCS#7 padding and CBC chaining; the
//! result travels as Base64 of `IV ‖ ciphertext`.
//!
//! Decryption strips padding leniently and there is no authentication tag,
//! so a tampered or wrongly keyed blob usually decrypts to garbage rather
//! than failing.

use algorithms::block::{Aes256, BlockCipher, Cbc};
use algorithms::padding::pkcs7;
use algorithms::types::Nonce;
use api::Serialize;
use params::{AES_BLOCK_SIZE, CBC_IV_SIZE};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::aes::Aes256Key;
use crate::cipher::{MessageCipher, SymmetricCipher};
use crate::error::{Error, Result, SymmetricResultExt};

pub mod types;

pub use types::CbcPackage;

/// AES-256-CBC message cipher with PKCS#7 padding and random IVs
///
/// The key schedule is expanded once at construction and only read
/// afterwards, so one instance can be shared across threads.
#[derive(Clone, Debug)]
pub struct Aes256Cbc {
    key: Aes256Key,
    cipher: Aes256,
}

impl Aes256Cbc {
    /// Creates a cipher around a freshly generated random key
    pub fn with_fresh_key() -> Result<Self> {
        let key = Aes256Key::generate()?;
        debug!("generated AES-256 key");
        Ok(Self::with_key(key))
    }

    /// Generates a new AES-256-CBC instance with a random key
    pub fn generate() -> Result<(Self, Aes256Key)> {
        let cipher = Self::with_fresh_key()?;
        let key = cipher.key.clone();
        Ok((cipher, key))
    }

    /// Creates a cipher for an existing key, expanding its schedule once
    pub fn with_key(key: Aes256Key) -> Self {
        let cipher = Aes256::new(key.secret());
        debug!("AES-256-CBC cipher ready");
        Self { key, cipher }
    }

    /// Creates a cipher from raw key bytes, which must be exactly 32 long
    pub fn from_key_bytes(bytes: &[u8]) -> Result<Self> {
        Aes256Key::from_slice(bytes).map(Self::with_key)
    }

    /// Replaces the current key with a freshly generated one
    ///
    /// Messages encrypted under the old key can no longer be decrypted by
    /// this instance.
    pub fn generate_key(&mut self) -> Result<&Aes256Key> {
        *self = Self::with_fresh_key()?;
        Ok(&self.key)
    }

    /// Returns the key used by this instance
    pub fn current_key(&self) -> &Aes256Key {
        &self.key
    }

    /// Encrypts a text message, rejecting an absent one
    ///
    /// The empty string is a valid message and round-trips.
    pub fn encrypt_message(&self, message: Option<&str>) -> Result<String> {
        let message = message.ok_or_else(|| {
            debug!("rejected absent message");
            Error::argument("message", "message must be present")
        })?;
        Ok(self.encrypt_to_package(message.as_bytes())?.to_base64())
    }

    /// Encrypts raw bytes into a package using the operating system's CSPRNG
    pub fn encrypt_to_package(&self, plaintext: &[u8]) -> Result<CbcPackage> {
        self.encrypt_with_rng(plaintext, &mut OsRng)
    }

    /// Encrypts raw bytes with an IV drawn from a caller-supplied CSPRNG
    pub fn encrypt_with_rng<R: RngCore + CryptoRng>(
        &self,
        plaintext: &[u8],
        rng: &mut R,
    ) -> Result<CbcPackage> {
        let iv = Nonce::<CBC_IV_SIZE>::random(rng)?;
        let padded = Zeroizing::new(pkcs7::pad(plaintext, AES_BLOCK_SIZE));

        let ciphertext = Cbc::new(self.cipher.clone(), &iv)
            .and_then(|cbc| cbc.encrypt(&padded))
            .map_primitive_err()?;

        trace!(blocks = ciphertext.len() / AES_BLOCK_SIZE, "encrypted message");
        Ok(CbcPackage::new(iv, ciphertext))
    }

    /// Encrypts raw bytes into the binary wire form `IV ‖ ciphertext`
    pub fn encrypt_bytes(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        Ok(self.encrypt_to_package(plaintext)?.to_bytes())
    }

    /// Decrypts a package, returning the unpadded plaintext bytes
    pub fn decrypt_package(&self, package: &CbcPackage) -> Result<Vec<u8>> {
        let padded = Zeroizing::new(
            Cbc::new(self.cipher.clone(), package.iv())
                .and_then(|cbc| cbc.decrypt(package.ciphertext()))
                .map_primitive_err()?,
        );

        let plaintext = match pkcs7::unpad(&padded) {
            Ok(unpadded) => unpadded.to_vec(),
            Err(e) => {
                debug!(blocks = package.block_count(), "rejected ciphertext with oversized padding");
                return Err(e.into());
            }
        };

        trace!(blocks = package.block_count(), "decrypted message");
        Ok(plaintext)
    }

    /// Decrypts the binary wire form `IV ‖ ciphertext`
    pub fn decrypt_bytes(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let package = CbcPackage::from_bytes(bytes).inspect_err(|e| {
            debug!(len = bytes.len(), error = %e, "rejected malformed ciphertext");
        })?;
        self.decrypt_package(&package)
    }
}

impl SymmetricCipher for Aes256Cbc {
    type Key = Aes256Key;

    fn new(key: &Self::Key) -> Result<Self> {
        Ok(Self::with_key(key.clone()))
    }

    fn name() -> &'static str {
        "AES-256-CBC"
    }
}

impl MessageCipher for Aes256Cbc {
    fn encrypt(&self, message: &str) -> Result<String> {
        self.encrypt_message(Some(message))
    }

    fn decrypt(&self, blob: &str) -> Result<String> {
        let package = CbcPackage::from_base64(blob).inspect_err(|e| {
            debug!(error = %e, "rejected malformed ciphertext");
        })?;

        // Tampered or foreign ciphertext can decrypt to invalid UTF-8; it is
        // returned with replacement characters rather than rejected.
        let plaintext = Zeroizing::new(self.decrypt_package(&package)?);
        Ok(String::from_utf8_lossy(&plaintext).into_owned())
    }
}
