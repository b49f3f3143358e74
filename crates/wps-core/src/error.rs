//! Error taxonomy for the Work Package Service (spec §7).
//!
//! Every non-mutating and mutating operation in the state machine collapses
//! onto one of these kinds. HTTP status mapping lives in `wps-http`, which
//! depends on this crate, not the other way round.

use thiserror::Error;

/// Errors raised by the work package state machine.
///
/// Variants intentionally carry no internal detail that would let a caller
/// distinguish "dataset not found" from "access denied" from "token
/// expired" — all three surface identically as `AccessDenied` at the HTTP
/// boundary per spec §7. Where detail is useful it is logged, not returned.
#[derive(Debug, Error)]
pub enum WpsError {
    /// Missing or invalid internal bearer assertion.
    #[error("not authenticated")]
    NotAuthenticated,

    /// Authorization refused, mismatched token, expired work package, or
    /// any condition that must not be distinguishable from the others.
    #[error("access denied")]
    AccessDenied,

    /// The caller's requested file selection intersected the dataset to
    /// the empty set.
    #[error("no accessible files in selection")]
    NoFilesAccessible,

    /// The caller's Crypt4GH public key could not be decoded.
    #[error("invalid user public key")]
    InvalidUserKey,

    /// A store or access-oracle failure unrelated to authorization.
    #[error("internal error: {0}")]
    Internal(String),
}

impl WpsError {
    /// A short machine-readable reason for internal logging only. Never
    /// serialized into an HTTP response body.
    pub fn log_reason(&self) -> &'static str {
        match self {
            WpsError::NotAuthenticated => "not_authenticated",
            WpsError::AccessDenied => "access_denied",
            WpsError::NoFilesAccessible => "no_files_accessible",
            WpsError::InvalidUserKey => "invalid_user_key",
            WpsError::Internal(_) => "internal",
        }
    }
}
