//! Error taxonomy for the projection and work package stores.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not reach the document store: {0}")]
    ConnectionFailed(String),

    #[error("document store operation failed: {0}")]
    OperationFailed(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        StoreError::OperationFailed(err.to_string())
    }
}
