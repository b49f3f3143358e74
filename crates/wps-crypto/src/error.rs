//! Error taxonomy for signing and envelope encryption.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("configured signing key is not a valid EC private key: {0}")]
    InvalidSigningKey(String),

    #[error("failed to sign claims: {0}")]
    SigningFailed(String),

    #[error("recipient public key could not be decoded")]
    InvalidUserKey,

    #[error("envelope encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("envelope decryption failed: {0}")]
    DecryptionFailed(String),
}
