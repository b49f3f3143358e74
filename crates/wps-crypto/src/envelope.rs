//! Single-recipient Crypt4GH-style envelope encryption.
//!
//! The envelope is `ephemeral_public_key (32 bytes) || nonce (12 bytes) ||
//! ciphertext+tag`, base64 encoded. The symmetric key is derived by hashing
//! the X25519 shared secret between a fresh ephemeral keypair and the
//! recipient's static public key, so only the holder of the matching
//! private key can recover the key and decrypt.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Key, Nonce,
};
use rand::rngs::OsRng;
use rand::RngCore;
use x25519_dalek::{PublicKey, StaticSecret};

use crate::error::CryptoError;

const PUBLIC_KEY_LEN: usize = 32;
const NONCE_LEN: usize = 12;

fn decode_x25519_public_key(encoded: &str) -> Result<PublicKey, CryptoError> {
    let bytes = BASE64.decode(encoded).map_err(|_| CryptoError::InvalidUserKey)?;
    let array: [u8; PUBLIC_KEY_LEN] = bytes.try_into().map_err(|_| CryptoError::InvalidUserKey)?;
    Ok(PublicKey::from(array))
}

fn decode_x25519_secret_key(encoded: &str) -> Result<StaticSecret, CryptoError> {
    let bytes = BASE64
        .decode(encoded)
        .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))?;
    let array: [u8; PUBLIC_KEY_LEN] = bytes
        .try_into()
        .map_err(|_| CryptoError::DecryptionFailed("secret key must be 32 bytes".to_string()))?;
    Ok(StaticSecret::from(array))
}

fn derive_symmetric_key(shared_secret: &x25519_dalek::SharedSecret) -> Key {
    use sha2::{Digest, Sha256};
    let digest = Sha256::digest(shared_secret.as_bytes());
    Key::from_slice(&digest).to_owned()
}

/// Wraps `payload` in a single-recipient envelope addressed to
/// `recipient_public_key_b64`. Returns the base64-encoded envelope.
pub fn encrypt_for_user(payload: &[u8], recipient_public_key_b64: &str) -> Result<String, CryptoError> {
    let recipient_public = decode_x25519_public_key(recipient_public_key_b64)?;

    let ephemeral_secret = StaticSecret::random_from_rng(OsRng);
    let ephemeral_public = PublicKey::from(&ephemeral_secret);
    let shared_secret = ephemeral_secret.diffie_hellman(&recipient_public);
    let key = derive_symmetric_key(&shared_secret);

    let mut nonce_bytes = [0u8; NONCE_LEN];
    OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let cipher = ChaCha20Poly1305::new(&key);
    let ciphertext = cipher
        .encrypt(nonce, payload)
        .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?;

    let mut envelope = Vec::with_capacity(PUBLIC_KEY_LEN + NONCE_LEN + ciphertext.len());
    envelope.extend_from_slice(ephemeral_public.as_bytes());
    envelope.extend_from_slice(&nonce_bytes);
    envelope.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(envelope))
}

/// Recovers the plaintext from an envelope produced by [`encrypt_for_user`],
/// given the recipient's private key. Used by this crate's own tests to
/// exercise the round trip; the service itself never holds a user's private
/// key.
pub fn decrypt(envelope_b64: &str, recipient_secret_key_b64: &str) -> Result<Vec<u8>, CryptoError> {
    let recipient_secret = decode_x25519_secret_key(recipient_secret_key_b64)?;
    let envelope = BASE64
        .decode(envelope_b64)
        .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))?;

    if envelope.len() < PUBLIC_KEY_LEN + NONCE_LEN {
        return Err(CryptoError::DecryptionFailed("envelope too short".to_string()));
    }

    let (ephemeral_public_bytes, rest) = envelope.split_at(PUBLIC_KEY_LEN);
    let (nonce_bytes, ciphertext) = rest.split_at(NONCE_LEN);

    let ephemeral_public_array: [u8; PUBLIC_KEY_LEN] = ephemeral_public_bytes
        .try_into()
        .map_err(|_| CryptoError::DecryptionFailed("malformed ephemeral key".to_string()))?;
    let ephemeral_public = PublicKey::from(ephemeral_public_array);

    let shared_secret = recipient_secret.diffie_hellman(&ephemeral_public);
    let key = derive_symmetric_key(&shared_secret);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher = ChaCha20Poly1305::new(&key);
    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_keypair_b64() -> (String, String) {
        let secret = StaticSecret::random_from_rng(OsRng);
        let public = PublicKey::from(&secret);
        (BASE64.encode(public.as_bytes()), BASE64.encode(secret.to_bytes()))
    }

    #[test]
    fn round_trips_through_encrypt_and_decrypt() {
        let (public_b64, secret_b64) = generate_keypair_b64();
        let payload = b"a signed work-order token";

        let envelope = encrypt_for_user(payload, &public_b64).unwrap();
        let recovered = decrypt(&envelope, &secret_b64).unwrap();

        assert_eq!(recovered, payload);
    }

    #[test]
    fn rejects_malformed_recipient_key() {
        let result = encrypt_for_user(b"data", "not-valid-base64!!!");
        assert!(matches!(result, Err(CryptoError::InvalidUserKey)));
    }

    #[test]
    fn rejects_recipient_key_of_wrong_length() {
        let short_key = BASE64.encode([0u8; 16]);
        let result = encrypt_for_user(b"data", &short_key);
        assert!(matches!(result, Err(CryptoError::InvalidUserKey)));
    }

    #[test]
    fn decryption_with_wrong_key_fails() {
        let (public_b64, _) = generate_keypair_b64();
        let (_, other_secret_b64) = generate_keypair_b64();
        let envelope = encrypt_for_user(b"payload", &public_b64).unwrap();
        assert!(decrypt(&envelope, &other_secret_b64).is_err());
    }

    #[test]
    fn each_encryption_uses_a_fresh_nonce_and_ephemeral_key() {
        let (public_b64, _) = generate_keypair_b64();
        let a = encrypt_for_user(b"same payload", &public_b64).unwrap();
        let b = encrypt_for_user(b"same payload", &public_b64).unwrap();
        assert_ne!(a, b);
    }
}
