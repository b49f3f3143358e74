//! Storage abstractions (components C and D): narrow, stateful interfaces
//! with 1-3 methods each, so the manager never depends on a concrete
//! backend.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use wps_core::{Dataset, WorkPackage};

use crate::error::StoreError;

/// Component C: the local read model of datasets maintained from the
/// upstream event stream.
#[async_trait]
pub trait DatasetStore: Send + Sync {
    /// Unconditional replace of the whole document. Ordering of `files` is
    /// preserved as received.
    async fn upsert(&self, dataset: Dataset) -> Result<(), StoreError>;

    /// Idempotent: no error if `dataset_id` is not present.
    async fn delete(&self, dataset_id: &str) -> Result<(), StoreError>;

    async fn get(&self, dataset_id: &str) -> Result<Option<Dataset>, StoreError>;
}

/// Component D: the work package ledger. Read-only from the manager's
/// perspective after `insert`; callers always know `wp_id` from the access
/// token prefix, so no secondary indexes are required.
#[async_trait]
pub trait WorkPackageStore: Send + Sync {
    async fn insert(&self, work_package: WorkPackage) -> Result<(), StoreError>;

    async fn get_by_id(&self, wp_id: &str) -> Result<Option<WorkPackage>, StoreError>;

    /// Deletes work packages whose `expires` is strictly before `cutoff`.
    /// Returns the number of documents removed. Whether this is run as a
    /// background sweep or left for an external TTL index is a deployment
    /// choice; the core only exposes the operation.
    async fn delete_expired_before(&self, cutoff: DateTime<Utc>) -> Result<u64, StoreError>;
}
