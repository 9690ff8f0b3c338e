//! Message-level vectors: PKCS#7 padded AES-256-CBC framed as Base64

/// A text message and its wire blob under a fixed key and IV
#[derive(Debug)]
pub struct MessageKat {
    /// AES key (hex)
    pub key: &'static str,
    /// Initialization vector (hex)
    pub iv: &'static str,
    /// Plaintext message
    pub message: &'static str,
    /// Base64 of `IV ‖ ciphertext`
    pub blob: &'static str,
}

const SEQUENTIAL_KEY: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";
const SEQUENTIAL_IV: &str = "000102030405060708090a0b0c0d0e0f";

/// Message vectors under key 00..1f and IV 00..0f
pub const MESSAGE_VECTORS: &[MessageKat] = &[
    MessageKat {
        key: SEQUENTIAL_KEY,
        iv: SEQUENTIAL_IV,
        message: "",
        blob: "AAECAwQFBgcICQoLDA0OD+nD74qyNFPm8HSc1jbnqI4=",
    },
    MessageKat {
        key: SEQUENTIAL_KEY,
        iv: SEQUENTIAL_IV,
        message: "Hello, World!",
        blob: "AAECAwQFBgcICQoLDA0OD/llOYyHEFFX2PDCzKllWZ8=",
    },
    // Exactly one block of text gains a full block of padding
    MessageKat {
        key: SEQUENTIAL_KEY,
        iv: SEQUENTIAL_IV,
        message: "0123456789abcdef",
        blob: "AAECAwQFBgcICQoLDA0OD+I/wLkce9ZEJcVZc26bDFhIXsHWpx5hWTIyXWUG7DcA",
    },
    MessageKat {
        key: SEQUENTIAL_KEY,
        iv: SEQUENTIAL_IV,
        message: "Hello, 世界! 🌍",
        blob: "AAECAwQFBgcICQoLDA0OD0olsjcfW8oDcn58ldo+4C4PDd41HUSTew8+XNZldVm5",
    },
];
