//! Error taxonomy for the access oracle client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessOracleError {
    #[error("could not reach the access oracle: {0}")]
    RequestFailed(String),

    #[error("access oracle returned unexpected status {0}")]
    UnexpectedStatus(u16),
}

impl From<reqwest::Error> for AccessOracleError {
    fn from(err: reqwest::Error) -> Self {
        AccessOracleError::RequestFailed(err.to_string())
    }
}
