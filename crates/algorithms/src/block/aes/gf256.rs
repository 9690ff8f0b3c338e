//! Arithmetic in GF(2⁸) and the AES substitution tables
//!
//! The field is GF(2)[x] / (x⁸ + x⁴ + x³ + x + 1). Both S-boxes are built at
//! compile time from the field inverse and the AES affine map.

/// Low byte of the AES reduction polynomial x⁸ + x⁴ + x³ + x + 1
pub const REDUCTION_POLY: u8 = 0x1B;

/// Multiply two bytes in GF(2⁸) with AES's reduction poly x⁸ + x⁴ + x³ + x + 1
///
/// Russian-peasant multiplication: for each bit of `b`, conditionally add
/// `a`, then double `a`, reducing by 0x1B whenever the doubling overflows.
/// The loop always runs eight times and uses masks instead of branches.
#[inline(always)]
pub const fn gf256_multiply(a: u8, b: u8) -> u8 {
    let mut p = 0u8;
    let mut a = a;
    let mut b = b;
    let mut i = 0;
    while i < 8 {
        // mask = 0xFF if b&1==1 else 0x00
        let mask = (b & 1).wrapping_neg();
        p ^= a & mask;
        let hi = a & 0x80;
        a <<= 1;
        // if hi was set, reduce by 0x1B
        a ^= ((hi != 0) as u8) * REDUCTION_POLY;
        b >>= 1;
        i += 1;
    }
    p
}

/// Raise to the 254th power (x⁻¹ in GF(2⁸)); maps 0 to 0
const fn gf256_inverse(x: u8) -> u8 {
    let x2 = gf256_multiply(x, x);
    let x4 = gf256_multiply(x2, x2);
    let x8 = gf256_multiply(x4, x4);
    let x16 = gf256_multiply(x8, x8);
    let x32 = gf256_multiply(x16, x16);
    let x64 = gf256_multiply(x32, x32);
    let x128 = gf256_multiply(x64, x64);
    // x^254 = x^128 · x^64 · x^32 · x^16 · x^8 · x^4 · x^2
    let mut y = gf256_multiply(x128, x64);
    y = gf256_multiply(y, x32);
    y = gf256_multiply(y, x16);
    y = gf256_multiply(y, x8);
    y = gf256_multiply(y, x4);
    gf256_multiply(y, x2)
}

/// AES forward S-box entry: inv(x) ⊕ ROTL(inv(x),1–4) ⊕ 0x63
const fn affine_sbox(x: u8) -> u8 {
    let i = gf256_inverse(x);
    i ^ i.rotate_left(1) ^ i.rotate_left(2) ^ i.rotate_left(3) ^ i.rotate_left(4) ^ 0x63
}

const fn build_sbox() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[i] = affine_sbox(i as u8);
        i += 1;
    }
    table
}

const fn build_inv_sbox(sbox: &[u8; 256]) -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        table[sbox[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Forward substitution table used by SubBytes and SubWord
pub const SBOX: [u8; 256] = build_sbox();

/// Inverse substitution table used by InvSubBytes
pub const INV_SBOX: [u8; 256] = build_inv_sbox(&SBOX);
