//! # Work Package Auth
//!
//! Verifies the internal bearer assertion attached to calls that require a
//! caller's identity — creating a work package, listing a user's datasets —
//! and extracts a [`wps_core::UserContext`]. Any failure collapses to
//! `WpsError::NotAuthenticated`; this crate never distinguishes "bad
//! signature" from "missing claim" past its own error type.

mod error;
mod verifier;

pub use error::AuthError;
pub use verifier::IdentityVerifier;

pub use jsonwebtoken::Algorithm;
