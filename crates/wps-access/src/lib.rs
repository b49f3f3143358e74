//! # Work Package Access
//!
//! The access oracle client (component E): a narrow HTTP client asking an
//! external access-decision service whether a user may download or upload
//! a dataset, listing a user's accessible datasets, and best-effort
//! notifying the oracle when a work-order token is minted.

mod client;
mod error;

pub use client::{AccessOracle, AccessOracleClient};
pub use error::AccessOracleError;
