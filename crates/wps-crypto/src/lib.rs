//! # Work Package Crypto
//!
//! The token codec: ES256 signing of work-order claims, Crypt4GH-style
//! single-recipient envelope encryption, and the crypto-strong randomness
//! and fingerprinting used to mint and protect access tokens.
//!
//! No state beyond the configured signing key — everything else here is a
//! pure function.

mod envelope;
mod error;
mod fingerprint;
mod random;
mod token;

pub use envelope::{decrypt, encrypt_for_user};
pub use error::CryptoError;
pub use fingerprint::fingerprint;
pub use random::{random_secret, random_token_id};
pub use token::TokenCodec;
