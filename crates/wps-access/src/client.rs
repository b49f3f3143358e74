//! HTTP client over the access-decision service (component E).

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::warn;
use wps_core::WorkType;

use crate::error::AccessOracleError;

/// Narrow interface the manager depends on, so tests can substitute a fake
/// without standing up an HTTP server.
#[async_trait]
pub trait AccessOracle: Send + Sync {
    async fn check(&self, user_id: &str, dataset_id: &str, work_type: WorkType) -> Result<bool, AccessOracleError>;

    async fn list_datasets(&self, user_id: &str) -> Result<Vec<String>, AccessOracleError>;

    /// Best-effort notification that a work-order token was minted.
    /// Failures are logged by this method and never propagated: per §4.G.3
    /// this is telemetry, not a correctness dependency.
    async fn register_grant(&self, user_id: &str, file_id: &str, valid_until: DateTime<Utc>);
}

fn default_check_path(work_type: WorkType) -> &'static str {
    match work_type {
        WorkType::Download => "/download-access/users/{user_id}/datasets/{dataset_id}",
        WorkType::Upload => "/upload-access/users/{user_id}/datasets/{dataset_id}",
    }
}

fn render_path(template: &str, user_id: &str, dataset_id: &str) -> String {
    template.replace("{user_id}", user_id).replace("{dataset_id}", dataset_id)
}

/// reqwest-backed [`AccessOracle`]. The path used by `check` is configurable
/// per [`WorkType`] since the production oracle may expose distinct
/// endpoints for download and upload (spec open question, resolved as a
/// per-type path table rather than hard-coding the download shape).
pub struct AccessOracleClient {
    http: reqwest::Client,
    base_url: String,
    check_paths: HashMap<WorkType, String>,
}

impl AccessOracleClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), base_url: base_url.into(), check_paths: HashMap::new() }
    }

    /// Overrides the `check` path template for `work_type`. Templates may
    /// contain `{user_id}` and `{dataset_id}` placeholders.
    pub fn with_check_path(mut self, work_type: WorkType, template: impl Into<String>) -> Self {
        self.check_paths.insert(work_type, template.into());
        self
    }

    fn check_path(&self, work_type: WorkType) -> &str {
        self.check_paths.get(&work_type).map(String::as_str).unwrap_or_else(|| default_check_path(work_type))
    }
}

#[async_trait]
impl AccessOracle for AccessOracleClient {
    async fn check(&self, user_id: &str, dataset_id: &str, work_type: WorkType) -> Result<bool, AccessOracleError> {
        let path = render_path(self.check_path(work_type), user_id, dataset_id);
        let url = format!("{}{path}", self.base_url);
        let response = self.http.get(&url).send().await?;

        match response.status().as_u16() {
            200 => Ok(true),
            404 => Ok(false),
            other => Err(AccessOracleError::UnexpectedStatus(other)),
        }
    }

    async fn list_datasets(&self, user_id: &str) -> Result<Vec<String>, AccessOracleError> {
        let url = format!("{}/download-access/users/{user_id}/datasets", self.base_url);
        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(AccessOracleError::UnexpectedStatus(response.status().as_u16()));
        }
        Ok(response.json::<Vec<String>>().await?)
    }

    async fn register_grant(&self, user_id: &str, file_id: &str, valid_until: DateTime<Utc>) {
        let url = format!("{}/download-access/grants", self.base_url);
        let body = serde_json::json!({
            "user_id": user_id,
            "file_id": file_id,
            "valid_until": valid_until,
        });

        if let Err(e) = self.http.post(&url).json(&body).send().await {
            warn!(user_id, file_id, error = %e, "register_grant failed, continuing");
        }
    }
}
