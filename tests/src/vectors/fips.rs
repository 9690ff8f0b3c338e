//! FIPS 197 and NIST SP 800-38A test vectors

/// Known-answer test vector for a single AES-256 block
#[derive(Debug)]
pub struct AesKat {
    /// AES key (hex)
    pub key: &'static str,
    /// Plaintext block (hex)
    pub plaintext: &'static str,
    /// Expected ciphertext block (hex)
    pub ciphertext: &'static str,
}

/// Known-answer test vector for unpadded AES-256-CBC
#[derive(Debug)]
pub struct CbcKat {
    /// AES key (hex)
    pub key: &'static str,
    /// Initialization vector (hex)
    pub iv: &'static str,
    /// Block-aligned plaintext (hex)
    pub plaintext: &'static str,
    /// Expected ciphertext (hex)
    pub ciphertext: &'static str,
}

/// Known-answer test vectors for AES-256
pub const AES256_VECTORS: &[AesKat] = &[
    // FIPS 197, Appendix C.3
    AesKat {
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        plaintext: "00112233445566778899aabbccddeeff",
        ciphertext: "8ea2b7ca516745bfeafc49904b496089",
    },
    // Sequential key and block
    AesKat {
        key: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f",
        plaintext: "000102030405060708090a0b0c0d0e0f",
        ciphertext: "5a6e045708fb7196f02e553d02c3a692",
    },
    // All-zero key and block
    AesKat {
        key: "0000000000000000000000000000000000000000000000000000000000000000",
        plaintext: "00000000000000000000000000000000",
        ciphertext: "dc95c078a2408989ad48a21492842087",
    },
    // NIST SP 800-38A, F.1.5 ECB-AES256, block #1
    AesKat {
        key: "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        plaintext: "6bc1bee22e409f96e93d7e117393172a",
        ciphertext: "f3eed1bdb5d2a03c064b5a7e3db181f8",
    },
];

/// Known-answer test vectors for AES-256-CBC without padding
pub const CBC_AES256_VECTORS: &[CbcKat] = &[
    // NIST SP 800-38A, F.2.5 CBC-AES256.Encrypt
    CbcKat {
        key: "603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4",
        iv: "000102030405060708090a0b0c0d0e0f",
        plaintext: "6bc1bee22e409f96e93d7e117393172a\
                    ae2d8a571e03ac9c9eb76fac45af8e51\
                    30c81c46a35ce411e5fbc1191a0a52ef\
                    f69f2445df4f9b17ad2b417be66c3710",
        ciphertext: "f58c4c04d6e5f1ba779eabfb5f7bfbd6\
                     9cfc4e967edb808d679f777bc6702c7d\
                     39f23369a9d9bacfa530e26304231461\
                     b2eb05e2c39be9fcda6c19078c6a9d1b",
    },
];
