//! # Work Package Service Core
//!
//! Domain types, DTOs, and error taxonomy for the work package service: the
//! authorization broker sitting between end users and the data-plane of a
//! federated genomics archive.
//!
//! This crate provides:
//! - The data model (`Dataset`, `WorkPackage`, `UserContext`, ...)
//! - Request/response DTOs for the HTTP surface
//! - Schema-level validation of inbound DTOs
//! - The `WpsError` taxonomy shared across every other crate in the workspace
//!
//! ## Example
//!
//! ```
//! use wps_core::{validate_creation_data, WorkPackageCreationData, WorkType};
//!
//! let data = WorkPackageCreationData {
//!     dataset_id: "DS1".to_string(),
//!     work_type: WorkType::Download,
//!     user_public_crypt4gh_key: "base64-key".to_string(),
//!     file_ids: None,
//! };
//! validate_creation_data(&data).unwrap();
//! ```

pub mod error;
pub mod types;
pub mod validation;

pub use error::*;
pub use types::*;
pub use validation::*;
