//! Crypto-strong randomness for token ids and secrets.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD as BASE64URL, Engine};
use rand::rngs::OsRng;
use rand::RngCore;

/// A fresh 20-byte, base64url-encoded work-package id.
pub fn random_token_id() -> String {
    random_base64url(20)
}

/// A fresh 24-byte, base64url-encoded access-token secret.
pub fn random_secret() -> String {
    random_base64url(24)
}

fn random_base64url(len: usize) -> String {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    BASE64URL.encode(bytes)
}
