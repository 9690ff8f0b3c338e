//! AES-256 block cipher
//!
//! This module implements the Advanced Encryption Standard with a 256-bit
//! key as specified in FIPS 197: key expansion into 15 round keys and the
//! 14-round encryption and decryption of single 16-byte blocks.
//!
//! Two interfaces are provided over the same code:
//!
//! - the free functions [`expand_key`], [`encrypt_block`] and
//!   [`decrypt_block`], which take the schedule explicitly;
//! - the [`Aes256`] cipher object, which owns its schedule and implements
//!   [`BlockCipher`] so it can be driven by a mode of operation.
//!
//! Every block operation works on its own stack-allocated [`State`], so a
//! schedule (and an `Aes256`) can be shared freely between threads.

use core::fmt;

use internal::endian::{u32_from_be_bytes, u32_to_be_bytes};
use params::{
    AES256_KEY_SIZE, AES256_KEY_WORDS, AES256_ROUNDS, AES256_SCHEDULE_WORDS, AES_BLOCK_SIZE,
    AES_STATE_COLUMNS,
};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};
use crate::types::SecretBytes;

pub mod gf256;

use gf256::{gf256_multiply, INV_SBOX, SBOX};

/// Round constants for AES-256 key expansion, indexed by `i / Nk`
const RCON: [u32; 8] = [
    0x00000000, 0x01000000, 0x02000000, 0x04000000,
    0x08000000, 0x10000000, 0x20000000, 0x40000000,
];

/// Rotates a word left by 8 bits (1 byte)
#[inline(always)]
fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

/// Substitutes each byte in a word using the AES S-box
#[inline(always)]
fn sub_word(word: u32) -> u32 {
    let bytes = u32_to_be_bytes(word);
    u32::from_be_bytes([
        SBOX[bytes[0] as usize],
        SBOX[bytes[1] as usize],
        SBOX[bytes[2] as usize],
        SBOX[bytes[3] as usize],
    ])
}

/// Expanded AES-256 key: 60 words, four per round key
///
/// The schedule is a pure function of the key and is never mutated after
/// expansion. It is wiped from memory when dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeySchedule {
    words: [u32; AES256_SCHEDULE_WORDS],
}

impl KeySchedule {
    /// All 60 schedule words, `w[0]` through `w[59]`
    pub fn words(&self) -> &[u32; AES256_SCHEDULE_WORDS] {
        &self.words
    }

    /// Round key `round` (0 through 14) as 16 bytes
    ///
    /// # Panics
    ///
    /// Panics if `round` is greater than 14.
    pub fn round_key(&self, round: usize) -> [u8; AES_BLOCK_SIZE] {
        let mut out = [0u8; AES_BLOCK_SIZE];
        let base = round * AES_STATE_COLUMNS;
        for (col, chunk) in out.chunks_exact_mut(4).enumerate() {
            chunk.copy_from_slice(&u32_to_be_bytes(self.words[base + col]));
        }
        out
    }

    /// Standard AES-256 key expansion; `key` must already be 32 bytes
    fn expand(key: &[u8]) -> Self {
        let mut words = [0u32; AES256_SCHEDULE_WORDS];

        // Initial key schedule
        for (i, chunk) in key.chunks_exact(4).enumerate() {
            words[i] = u32_from_be_bytes(chunk);
        }

        for i in AES256_KEY_WORDS..AES256_SCHEDULE_WORDS {
            let mut temp = words[i - 1];
            if i % AES256_KEY_WORDS == 0 {
                temp = sub_word(rot_word(temp)) ^ RCON[i / AES256_KEY_WORDS];
            } else if i % AES256_KEY_WORDS == 4 {
                // 256-bit keys only: SubWord without rotation or Rcon
                temp = sub_word(temp);
            }
            words[i] = words[i - AES256_KEY_WORDS] ^ temp;
        }

        Self { words }
    }
}

impl fmt::Debug for KeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeySchedule<{}>([REDACTED])", AES256_SCHEDULE_WORDS)
    }
}

/// The 4×4 state matrix, indexed `[row][column]`
///
/// Blocks are loaded and stored column-major: byte `4c + r` of the block is
/// `state[r][c]`.
#[derive(Zeroize, ZeroizeOnDrop)]
struct State([[u8; AES_STATE_COLUMNS]; 4]);

impl State {
    fn load(block: &[u8; AES_BLOCK_SIZE]) -> Self {
        let mut state = [[0u8; AES_STATE_COLUMNS]; 4];
        for (i, &byte) in block.iter().enumerate() {
            state[i % 4][i / 4] = byte;
        }
        State(state)
    }

    fn store(&self) -> [u8; AES_BLOCK_SIZE] {
        let mut block = [0u8; AES_BLOCK_SIZE];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = self.0[i % 4][i / 4];
        }
        block
    }

    fn add_round_key(&mut self, schedule: &KeySchedule, round: usize) {
        for col in 0..AES_STATE_COLUMNS {
            let key = u32_to_be_bytes(schedule.words[round * AES_STATE_COLUMNS + col]);
            for row in 0..4 {
                self.0[row][col] ^= key[row];
            }
        }
    }

    fn sub_bytes(&mut self) {
        for byte in self.0.iter_mut().flatten() {
            *byte = SBOX[*byte as usize];
        }
    }

    fn inv_sub_bytes(&mut self) {
        for byte in self.0.iter_mut().flatten() {
            *byte = INV_SBOX[*byte as usize];
        }
    }

    /// Row `r` rotates left by `r` positions
    fn shift_rows(&mut self) {
        for (r, row) in self.0.iter_mut().enumerate().skip(1) {
            row.rotate_left(r);
        }
    }

    fn inv_shift_rows(&mut self) {
        for (r, row) in self.0.iter_mut().enumerate().skip(1) {
            row.rotate_right(r);
        }
    }

    fn column(&self, col: usize) -> [u8; 4] {
        [self.0[0][col], self.0[1][col], self.0[2][col], self.0[3][col]]
    }

    fn mix_columns(&mut self) {
        for col in 0..AES_STATE_COLUMNS {
            let [a0, a1, a2, a3] = self.column(col);
            self.0[0][col] = gf256_multiply(a0, 2) ^ gf256_multiply(a1, 3) ^ a2 ^ a3;
            self.0[1][col] = a0 ^ gf256_multiply(a1, 2) ^ gf256_multiply(a2, 3) ^ a3;
            self.0[2][col] = a0 ^ a1 ^ gf256_multiply(a2, 2) ^ gf256_multiply(a3, 3);
            self.0[3][col] = gf256_multiply(a0, 3) ^ a1 ^ a2 ^ gf256_multiply(a3, 2);
        }
    }

    fn inv_mix_columns(&mut self) {
        for col in 0..AES_STATE_COLUMNS {
            let [a0, a1, a2, a3] = self.column(col);
            self.0[0][col] = gf256_multiply(a0, 0x0e) ^ gf256_multiply(a1, 0x0b)
                ^ gf256_multiply(a2, 0x0d) ^ gf256_multiply(a3, 0x09);
            self.0[1][col] = gf256_multiply(a0, 0x09) ^ gf256_multiply(a1, 0x0e)
                ^ gf256_multiply(a2, 0x0b) ^ gf256_multiply(a3, 0x0d);
            self.0[2][col] = gf256_multiply(a0, 0x0d) ^ gf256_multiply(a1, 0x09)
                ^ gf256_multiply(a2, 0x0e) ^ gf256_multiply(a3, 0x0b);
            self.0[3][col] = gf256_multiply(a0, 0x0b) ^ gf256_multiply(a1, 0x0d)
                ^ gf256_multiply(a2, 0x09) ^ gf256_multiply(a3, 0x0e);
        }
    }
}

fn encrypt_array(block: &[u8; AES_BLOCK_SIZE], schedule: &KeySchedule) -> [u8; AES_BLOCK_SIZE] {
    let mut state = State::load(block);

    // Initial round - AddRoundKey
    state.add_round_key(schedule, 0);

    // Main rounds
    for round in 1..AES256_ROUNDS {
        state.sub_bytes();
        state.shift_rows();
        state.mix_columns();
        state.add_round_key(schedule, round);
    }

    // Final round, no MixColumns
    state.sub_bytes();
    state.shift_rows();
    state.add_round_key(schedule, AES256_ROUNDS);

    state.store()
}

fn decrypt_array(block: &[u8; AES_BLOCK_SIZE], schedule: &KeySchedule) -> [u8; AES_BLOCK_SIZE] {
    let mut state = State::load(block);

    // Initial round - AddRoundKey (final round key)
    state.add_round_key(schedule, AES256_ROUNDS);

    // Main rounds in reverse
    for round in (1..AES256_ROUNDS).rev() {
        state.inv_shift_rows();
        state.inv_sub_bytes();
        state.add_round_key(schedule, round);
        state.inv_mix_columns();
    }

    // Final round
    state.inv_shift_rows();
    state.inv_sub_bytes();
    state.add_round_key(schedule, 0);

    state.store()
}

fn as_block(input: &[u8]) -> Result<[u8; AES_BLOCK_SIZE]> {
    validate::block_length("AES block", input.len(), AES_BLOCK_SIZE)?;
    let mut block = [0u8; AES_BLOCK_SIZE];
    block.copy_from_slice(input);
    Ok(block)
}

/// Expands a 32-byte key into the AES-256 key schedule
///
/// Fails with a key-length error unless `key` is exactly 32 bytes.
pub fn expand_key(key: &[u8]) -> Result<KeySchedule> {
    validate::key_length("AES-256", key.len(), AES256_KEY_SIZE)?;
    Ok(KeySchedule::expand(key))
}

/// Encrypts one 16-byte block under an expanded key
pub fn encrypt_block(input: &[u8], schedule: &KeySchedule) -> Result<[u8; AES_BLOCK_SIZE]> {
    Ok(encrypt_array(&as_block(input)?, schedule))
}

/// Decrypts one 16-byte block under an expanded key
pub fn decrypt_block(input: &[u8], schedule: &KeySchedule) -> Result<[u8; AES_BLOCK_SIZE]> {
    Ok(decrypt_array(&as_block(input)?, schedule))
}

/// AES-256 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes256 {
    schedule: KeySchedule,
}

impl Aes256 {
    /// Creates a cipher from raw key bytes, rejecting anything but 32 bytes
    pub fn from_key_bytes(key: &[u8]) -> Result<Self> {
        Ok(Self {
            schedule: expand_key(key)?,
        })
    }

    /// The expanded key schedule held by this cipher
    pub fn schedule(&self) -> &KeySchedule {
        &self.schedule
    }
}

impl CipherAlgorithm for Aes256 {
    const KEY_SIZE: usize = AES256_KEY_SIZE;
    const BLOCK_SIZE: usize = AES_BLOCK_SIZE;

    fn name() -> &'static str {
        "AES-256"
    }
}

impl fmt::Debug for Aes256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aes256")
            .field("schedule", &self.schedule)
            .finish()
    }
}

impl BlockCipher for Aes256 {
    type Key = SecretBytes<AES256_KEY_SIZE>;

    fn new(key: &Self::Key) -> Self {
        Aes256 {
            schedule: KeySchedule::expand(key.as_ref()),
        }
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let out = encrypt_block(block, &self.schedule)?;
        block.copy_from_slice(&out);
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        let out = decrypt_block(block, &self.schedule)?;
        block.copy_from_slice(&out);
        Ok(())
    }

    fn generate_key<R: RngCore + CryptoRng>(
        rng: &mut R,
    ) -> core::result::Result<Self::Key, rand::Error> {
        let mut key_data = [0u8; AES256_KEY_SIZE];
        rng.try_fill_bytes(&mut key_data)?;
        let key = SecretBytes::new(key_data);
        key_data.zeroize();
        Ok(key)
    }
}
