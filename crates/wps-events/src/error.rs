//! Error taxonomy for dataset event handling.

use thiserror::Error;
use wps_store::StoreError;

#[derive(Debug, Error)]
pub enum EventError {
    #[error("malformed event payload: {0}")]
    MalformedPayload(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
