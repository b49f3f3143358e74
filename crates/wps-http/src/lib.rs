//! # Work Package HTTP Transport
//!
//! Axum routing and extractors for the five endpoints of the work package
//! service's HTTP surface (§6): health check, work package creation and
//! lookup, work-order token minting, and dataset listing. Errors returned
//! by [`wps_manager::WorkPackageManager`] map to HTTP status codes and a
//! `{error, message}` body per the error taxonomy in `wps-core`.

mod error;
mod extractors;
mod routes;

pub use error::{ErrorResponse, WpsHttpError};
pub use extractors::{AccessToken, InternalAssertion};
pub use routes::router;
