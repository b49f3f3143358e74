//! Integration tests covering the token codec's testable properties.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use rand::rngs::OsRng;
use x25519_dalek::{PublicKey, StaticSecret};

use wps_crypto::{decrypt, encrypt_for_user, fingerprint, random_secret, random_token_id};

fn generate_user_keypair() -> (String, String) {
    let secret = StaticSecret::random_from_rng(OsRng);
    let public = PublicKey::from(&secret);
    (BASE64.encode(public.as_bytes()), BASE64.encode(secret.to_bytes()))
}

#[test]
fn decrypt_of_encrypt_recovers_the_original_bytes() {
    let (public_key, secret_key) = generate_user_keypair();
    let signed_token = b"header.payload.signature";

    let envelope = encrypt_for_user(signed_token, &public_key).unwrap();
    let recovered = decrypt(&envelope, &secret_key).unwrap();

    assert_eq!(recovered, signed_token);
}

#[test]
fn access_token_ids_and_secrets_are_distinct_across_issuances() {
    let ids: std::collections::HashSet<_> = (0..50).map(|_| random_token_id()).collect();
    let secrets: std::collections::HashSet<_> = (0..50).map(|_| random_secret()).collect();

    assert_eq!(ids.len(), 50);
    assert_eq!(secrets.len(), 50);
}

#[test]
fn a_stored_fingerprint_never_reveals_the_secret_it_was_derived_from() {
    let secret = random_secret();
    let stored = fingerprint(&secret);

    assert_ne!(stored, secret);
    assert_eq!(stored.len(), 64);
}
