//! Access-token secret fingerprinting.
//!
//! The store never holds an access-token secret at rest, only its SHA-256
//! fingerprint, so that a database read cannot be replayed as a live token.

use wps_canonical::hash_string;

/// Returns the lowercase hex SHA-256 fingerprint of `secret`.
pub fn fingerprint(secret: &str) -> String {
    hash_string(secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_64_lowercase_hex_characters() {
        let fp = fingerprint("a-secret-value");
        assert_eq!(fp.len(), 64);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit() && !c.is_uppercase()));
    }

    #[test]
    fn fingerprint_is_deterministic() {
        assert_eq!(fingerprint("same-secret"), fingerprint("same-secret"));
    }

    #[test]
    fn distinct_secrets_fingerprint_differently() {
        assert_ne!(fingerprint("secret-a"), fingerprint("secret-b"));
    }
}
