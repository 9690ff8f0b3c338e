//! Cipher Block Chaining (CBC) mode implementation
//!
//! CBC mode is a block cipher mode of operation that provides confidentiality
//! by XORing each plaintext block with the previous ciphertext block before
//! encryption. The first block is XORed with an initialization vector (IV).
//!
//! This type works on block-aligned data only; padding is the caller's job
//! (see [`crate::padding::pkcs7`]). No integrity protection is provided.
//!
//! Chaining state is kept in 16-byte arrays, so only 128-bit block ciphers
//! are accepted.

use internal::constant_time::ct_xor;
use params::AES_BLOCK_SIZE;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};
use crate::types::{CbcCompatible, Nonce};

/// CBC mode implementation
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct Cbc<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    cipher: B,
    iv: [u8; AES_BLOCK_SIZE],
}

impl<B: BlockCipher + CipherAlgorithm + Zeroize + ZeroizeOnDrop> Cbc<B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV (nonce) must be the same size as the block size of the cipher.
    pub fn new<const N: usize>(cipher: B, iv: &Nonce<N>) -> Result<Self>
    where
        Nonce<N>: CbcCompatible,
    {
        validate::parameter(
            B::BLOCK_SIZE == AES_BLOCK_SIZE,
            "CBC block cipher",
            "block size must be 16 bytes",
        )?;
        validate::length("CBC initialization vector", N, B::BLOCK_SIZE)?;

        let mut block = [0u8; AES_BLOCK_SIZE];
        block.copy_from_slice(iv.as_ref());

        Ok(Self { cipher, iv: block })
    }

    /// Encrypts a message using CBC mode
    ///
    /// The plaintext must be a multiple of the block size; pad it first.
    /// Chaining is inherently sequential: every block depends on the
    /// ciphertext of the one before it.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        validate::block_multiple("CBC plaintext", plaintext.len(), AES_BLOCK_SIZE)?;

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut prev_block = self.iv;

        for chunk in plaintext.chunks_exact(AES_BLOCK_SIZE) {
            let mut block = [0u8; AES_BLOCK_SIZE];
            block.copy_from_slice(chunk);

            // XOR with previous ciphertext block (or IV for the first block)
            let mut block = ct_xor(&block, &prev_block);
            self.cipher.encrypt_block(&mut block)?;

            ciphertext.extend_from_slice(&block);
            prev_block = block;
        }

        Ok(ciphertext)
    }

    /// Decrypts a message using CBC mode
    ///
    /// The ciphertext must be a multiple of the block size. Each decrypted
    /// block is XORed with the previous *ciphertext* block (the IV for the
    /// first one). Padding is left in place.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        validate::block_multiple("CBC ciphertext", ciphertext.len(), AES_BLOCK_SIZE)?;

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut prev_block = self.iv;

        for chunk in ciphertext.chunks_exact(AES_BLOCK_SIZE) {
            let mut current_block = [0u8; AES_BLOCK_SIZE];
            current_block.copy_from_slice(chunk);

            let mut block = current_block;
            self.cipher.decrypt_block(&mut block)?;

            plaintext.extend_from_slice(&ct_xor(&block, &prev_block));
            prev_block = current_block;
        }

        Ok(plaintext)
    }
}
