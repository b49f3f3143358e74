//! # Work Package Manager
//!
//! The core of the Work Package Service: a state machine with four
//! operations orchestrating the Identity Verifier, Dataset Projection
//! Store, Access Oracle Client, Token Codec, and Work Package Store behind
//! a single [`wps_core::WpsError`] taxonomy.

mod manager;

pub use manager::WorkPackageManager;
