//! End-to-end checks of the engine, the CBC layer and the message wrapper
//! against fixed known-answer vectors.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use msgcrypt_algorithms::block::aes::{decrypt_block, encrypt_block, expand_key, Aes256};
use msgcrypt_algorithms::block::Cbc;
use msgcrypt_algorithms::padding::pkcs7;
use msgcrypt_algorithms::types::Nonce;
use msgcrypt_api::{Error, Serialize};
use msgcrypt_symmetric::{Aes256Cbc, CbcPackage, MessageCipher};
use msgcrypt_tests::unhex;
use msgcrypt_tests::vectors::{AES256_VECTORS, CBC_AES256_VECTORS, MESSAGE_VECTORS};

#[test]
fn test_aes256_block_vectors() {
    for kat in AES256_VECTORS {
        let schedule = expand_key(&unhex(kat.key)).unwrap();

        let ciphertext = encrypt_block(&unhex(kat.plaintext), &schedule).unwrap();
        assert_eq!(hex::encode(ciphertext), kat.ciphertext, "{kat:?}");

        let plaintext = decrypt_block(&ciphertext, &schedule).unwrap();
        assert_eq!(hex::encode(plaintext), kat.plaintext, "{kat:?}");
    }
}

#[test]
fn test_cbc_aes256_vectors() {
    for kat in CBC_AES256_VECTORS {
        let iv = Nonce::<16>::from_slice(&unhex(kat.iv)).unwrap();
        let cbc = Cbc::new(Aes256::from_key_bytes(&unhex(kat.key)).unwrap(), &iv).unwrap();

        let ciphertext = cbc.encrypt(&unhex(kat.plaintext)).unwrap();
        assert_eq!(hex::encode(&ciphertext), kat.ciphertext);
        assert_eq!(hex::encode(cbc.decrypt(&ciphertext).unwrap()), kat.plaintext);
    }
}

#[test]
fn test_message_vectors_decrypt() {
    for kat in MESSAGE_VECTORS {
        let cipher = Aes256Cbc::from_key_bytes(&unhex(kat.key)).unwrap();
        assert_eq!(cipher.decrypt(kat.blob).unwrap(), kat.message, "{kat:?}");
    }
}

#[test]
fn test_message_vectors_framing() {
    // Rebuild each blob by hand: pad, chain, prefix the IV, Base64
    for kat in MESSAGE_VECTORS {
        let iv = Nonce::<16>::from_slice(&unhex(kat.iv)).unwrap();
        let cbc = Cbc::new(Aes256::from_key_bytes(&unhex(kat.key)).unwrap(), &iv).unwrap();

        let padded = pkcs7::pad(kat.message.as_bytes(), 16);
        let ciphertext = cbc.encrypt(&padded).unwrap();

        let mut wire = unhex(kat.iv);
        wire.extend_from_slice(&ciphertext);
        assert_eq!(STANDARD.encode(&wire), kat.blob, "{kat:?}");

        let package = CbcPackage::from_base64(kat.blob).unwrap();
        assert_eq!(package.to_bytes(), wire);
        assert_eq!(package.ciphertext(), &ciphertext[..]);
    }
}

#[test]
fn test_chat_session_between_peers() {
    let (alice, key) = Aes256Cbc::generate().unwrap();

    // The key travels out of band as raw bytes
    let bob = Aes256Cbc::from_key_bytes(key.as_bytes()).unwrap();

    let conversation = [
        "Hi Bob!",
        "",
        "Did you get the file? 📎",
        "Line one\nLine two\n",
    ];

    for line in conversation {
        let blob = alice.encrypt(line).unwrap();
        assert!(STANDARD.decode(&blob).is_ok());
        assert_eq!(bob.decrypt(&blob).unwrap(), line);

        let reply = bob.encrypt(line).unwrap();
        assert_ne!(reply, blob);
        assert_eq!(alice.decrypt(&reply).unwrap(), line);
    }
}

#[test]
fn test_malformed_blobs_from_peers() {
    let cipher = Aes256Cbc::with_fresh_key().unwrap();

    assert!(matches!(
        cipher.decrypt("InvalidBase64String"),
        Err(Error::InvalidEncoding { .. })
    ));
    assert!(matches!(cipher.decrypt(""), Err(Error::InvalidArgument { .. })));
    assert!(matches!(
        cipher.decrypt(&STANDARD.encode([0u8; 31])),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        cipher.decrypt(&STANDARD.encode([0u8; 40])),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_key_length_errors_surface_in_public_error_type() {
    assert!(matches!(
        Aes256Cbc::from_key_bytes(&[0u8; 24]),
        Err(Error::InvalidKeyLength { expected: 32, actual: 24, .. })
    ));

    let primitive = expand_key(&[0u8; 16]).unwrap_err();
    let public: Error = primitive.into();
    assert!(matches!(
        public,
        Error::InvalidKeyLength { context: "AES-256", expected: 32, actual: 16 }
    ));
}
