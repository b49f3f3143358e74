//! SHA-256 hex-digest hashing for access-token secret fingerprinting.

use sha2::{Digest, Sha256};
use std::fmt::Write;

/// Hash `s` (as UTF-8 bytes) with SHA-256, returning a 64-character
/// lowercase hex digest.
pub fn hash_string(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    let digest = hasher.finalize();

    let mut hex = String::with_capacity(digest.len() * 2);
    for byte in digest {
        write!(hex, "{byte:02x}").unwrap();
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_64_lowercase_hex_characters() {
        let digest = hash_string("a-secret-value");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
    }

    #[test]
    fn same_secret_hashes_identically() {
        assert_eq!(hash_string("same-secret"), hash_string("same-secret"));
    }

    #[test]
    fn distinct_secrets_hash_differently() {
        assert_ne!(hash_string("secret-a"), hash_string("secret-b"));
    }

    #[test]
    fn matches_the_known_sha256_of_an_empty_string() {
        assert_eq!(hash_string(""), "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");
    }
}
