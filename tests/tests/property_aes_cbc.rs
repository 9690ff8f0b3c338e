//! Property-based tests for the AES-256-CBC implementation

use msgcrypt_algorithms::block::aes::Aes256;
use msgcrypt_algorithms::block::modes::cbc::Cbc;
use msgcrypt_algorithms::block::BlockCipher;
use msgcrypt_algorithms::padding::pkcs7;
use msgcrypt_algorithms::types::{Nonce, SecretBytes};
use msgcrypt_symmetric::{Aes256Cbc, Aes256Key, MessageCipher};
use proptest::prelude::*;

/// Generate data that's a multiple of 16 bytes (AES block size)
fn block_aligned_data() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 16..=256).prop_map(|mut v| {
        // Pad to 16-byte multiple
        while v.len() % 16 != 0 {
            v.push(0);
        }
        v
    })
}

proptest! {
    #[test]
    fn aes256_block_roundtrip(key in any::<[u8; 32]>(), block in any::<[u8; 16]>()) {
        let cipher = Aes256::new(&SecretBytes::new(key));

        let mut buf = block;
        cipher.encrypt_block(&mut buf).unwrap();
        prop_assert_ne!(buf, block);
        cipher.decrypt_block(&mut buf).unwrap();

        prop_assert_eq!(buf, block);
    }

    #[test]
    fn aes256_cbc_roundtrip(
        key in any::<[u8; 32]>(),
        iv in any::<[u8; 16]>(),
        data in block_aligned_data()
    ) {
        let secret_key = SecretBytes::<32>::new(key);
        let nonce = Nonce::<16>::new(iv);

        // Encrypt
        let cbc_enc = Cbc::new(Aes256::new(&secret_key), &nonce).unwrap();
        let ciphertext = cbc_enc.encrypt(&data).unwrap();
        prop_assert_eq!(ciphertext.len(), data.len());

        // Decrypt
        let cbc_dec = Cbc::new(Aes256::new(&secret_key), &nonce).unwrap();
        let plaintext = cbc_dec.decrypt(&ciphertext).unwrap();

        prop_assert_eq!(plaintext, data);
    }

    #[test]
    fn different_keys_produce_different_ciphertexts(
        key1 in any::<[u8; 32]>(),
        key2 in any::<[u8; 32]>(),
        iv in any::<[u8; 16]>(),
        data in block_aligned_data()
    ) {
        prop_assume!(key1 != key2);
        let nonce = Nonce::<16>::new(iv);

        let ct1 = Cbc::new(Aes256::new(&SecretBytes::new(key1)), &nonce)
            .unwrap()
            .encrypt(&data)
            .unwrap();
        let ct2 = Cbc::new(Aes256::new(&SecretBytes::new(key2)), &nonce)
            .unwrap()
            .encrypt(&data)
            .unwrap();

        prop_assert_ne!(ct1, ct2);
    }

    #[test]
    fn different_ivs_produce_different_ciphertexts(
        key in any::<[u8; 32]>(),
        iv1 in any::<[u8; 16]>(),
        iv2 in any::<[u8; 16]>(),
        data in block_aligned_data()
    ) {
        prop_assume!(iv1 != iv2);
        let secret_key = SecretBytes::<32>::new(key);

        let ct1 = Cbc::new(Aes256::new(&secret_key), &Nonce::<16>::new(iv1))
            .unwrap()
            .encrypt(&data)
            .unwrap();
        let ct2 = Cbc::new(Aes256::new(&secret_key), &Nonce::<16>::new(iv2))
            .unwrap()
            .encrypt(&data)
            .unwrap();

        prop_assert_ne!(ct1, ct2);
    }

    #[test]
    fn pkcs7_pad_unpad_roundtrip(data in prop::collection::vec(any::<u8>(), 0..=100)) {
        let padded = pkcs7::pad(&data, 16);

        prop_assert_eq!(padded.len() % 16, 0);
        prop_assert!(padded.len() > data.len());
        prop_assert!(padded.len() - data.len() <= 16);
        prop_assert_eq!(pkcs7::unpad(&padded).unwrap(), &data[..]);
    }

    #[test]
    fn message_roundtrip(key in any::<[u8; 32]>(), message in ".*") {
        let cipher = Aes256Cbc::with_key(Aes256Key::new(key));

        let blob = cipher.encrypt(&message).unwrap();
        prop_assert_eq!(cipher.decrypt(&blob).unwrap(), message);
    }

    #[test]
    fn wire_length_matches_padded_plaintext(
        key in any::<[u8; 32]>(),
        data in prop::collection::vec(any::<u8>(), 0..=1000)
    ) {
        let cipher = Aes256Cbc::with_key(Aes256Key::new(key));
        let wire = cipher.encrypt_bytes(&data).unwrap();

        // IV plus at least one byte of padding, rounded up to whole blocks
        let expected_len = 16 + (data.len() / 16 + 1) * 16;
        prop_assert_eq!(wire.len(), expected_len);
        prop_assert_eq!(cipher.decrypt_bytes(&wire).unwrap(), data);
    }

    #[test]
    fn tampered_ciphertext_never_panics(
        key in any::<[u8; 32]>(),
        message in ".{0,64}",
        bit in 0usize..(8 * 32)
    ) {
        let cipher = Aes256Cbc::with_key(Aes256Key::new(key));
        let mut wire = cipher.encrypt_bytes(message.as_bytes()).unwrap();

        let bit = bit % (8 * wire.len());
        wire[bit / 8] ^= 1 << (bit % 8);

        // Either garbage or a padding error, never a panic
        if let Ok(plaintext) = cipher.decrypt_bytes(&wire) {
            prop_assert!(plaintext.len() <= wire.len() - 16);
        }
    }
}
