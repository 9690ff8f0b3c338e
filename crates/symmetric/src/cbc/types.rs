//! Wire representation of a CBC-encrypted message

use algorithms::types::Nonce;
use api::Serialize;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use params::{AES_BLOCK_SIZE, CBC_IV_SIZE, CBC_MIN_MESSAGE_SIZE};

use crate::error::{from_base64_error, validate, Result, SymmetricResultExt};

/// IV and ciphertext of one encrypted message
///
/// Serialized as `IV (16 bytes) ‖ ciphertext (N × 16 bytes, N ≥ 1)`, and in
/// text form as padded standard-alphabet Base64 of those bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CbcPackage {
    iv: Nonce<CBC_IV_SIZE>,
    ciphertext: Vec<u8>,
}

impl CbcPackage {
    /// Creates a new package from an IV and ciphertext
    pub fn new(iv: Nonce<CBC_IV_SIZE>, ciphertext: Vec<u8>) -> Self {
        Self { iv, ciphertext }
    }

    /// The initialization vector
    pub fn iv(&self) -> &Nonce<CBC_IV_SIZE> {
        &self.iv
    }

    /// The chained ciphertext blocks
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Number of ciphertext blocks, excluding the IV
    pub fn block_count(&self) -> usize {
        self.ciphertext.len() / AES_BLOCK_SIZE
    }

    /// Encodes the package as Base64 text
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Decodes a package from Base64 text
    ///
    /// Fails with `InvalidEncoding` if the text is not valid Base64 and with
    /// `InvalidArgument` if the decoded bytes are not a well-formed package.
    pub fn from_base64(encoded: &str) -> Result<Self> {
        let bytes = STANDARD.decode(encoded).map_err(from_base64_error)?;
        Self::from_bytes(&bytes)
    }
}

impl Serialize for CbcPackage {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::min_length("CBC ciphertext", bytes.len(), CBC_MIN_MESSAGE_SIZE)?;
        validate::block_aligned("CBC ciphertext", bytes.len() - CBC_IV_SIZE, AES_BLOCK_SIZE)?;

        let (iv, ciphertext) = bytes.split_at(CBC_IV_SIZE);
        let iv = Nonce::from_slice(iv).map_primitive_err()?;

        Ok(Self::new(iv, ciphertext.to_vec()))
    }

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(CBC_IV_SIZE + self.ciphertext.len());
        out.extend_from_slice(self.iv.as_ref());
        out.extend_from_slice(&self.ciphertext);
        out
    }
}
