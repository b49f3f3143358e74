//! Narrow error type for bearer assertion verification.
//!
//! Every variant collapses to [`wps_core::WpsError::NotAuthenticated`] at
//! the manager boundary — callers never learn *why* an assertion was
//! rejected, only that it was.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("configured public key is not a valid EC key: {0}")]
    InvalidPublicKey(String),

    #[error("bearer assertion signature verification failed: {0}")]
    InvalidSignature(String),

    #[error("required claim '{0}' is missing")]
    MissingClaim(&'static str),
}

impl From<AuthError> for wps_core::WpsError {
    fn from(_: AuthError) -> Self {
        wps_core::WpsError::NotAuthenticated
    }
}
