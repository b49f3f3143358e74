//! # Work Package Canonical
//!
//! SHA-256 hex-digest hashing. The only consumer in this workspace is
//! `wps-crypto::fingerprint`, which hashes an access-token secret before it
//! is written to the work package store, so that a leaked store row never
//! reveals a usable secret.

mod hash;

pub use hash::hash_string;
