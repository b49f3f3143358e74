//! In-memory store implementations, used by this workspace's test suites
//! and local development without a MongoDB instance.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use wps_core::{Dataset, WorkPackage};

use crate::error::StoreError;
use crate::traits::{DatasetStore, WorkPackageStore};

#[derive(Default, Clone)]
pub struct InMemoryDatasetStore {
    datasets: Arc<RwLock<HashMap<String, Dataset>>>,
}

impl InMemoryDatasetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DatasetStore for InMemoryDatasetStore {
    async fn upsert(&self, dataset: Dataset) -> Result<(), StoreError> {
        self.datasets.write().await.insert(dataset.id.clone(), dataset);
        Ok(())
    }

    async fn delete(&self, dataset_id: &str) -> Result<(), StoreError> {
        self.datasets.write().await.remove(dataset_id);
        Ok(())
    }

    async fn get(&self, dataset_id: &str) -> Result<Option<Dataset>, StoreError> {
        Ok(self.datasets.read().await.get(dataset_id).cloned())
    }
}

#[derive(Default, Clone)]
pub struct InMemoryWorkPackageStore {
    work_packages: Arc<RwLock<HashMap<String, WorkPackage>>>,
}

impl InMemoryWorkPackageStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WorkPackageStore for InMemoryWorkPackageStore {
    async fn insert(&self, work_package: WorkPackage) -> Result<(), StoreError> {
        self.work_packages.write().await.insert(work_package.id.clone(), work_package);
        Ok(())
    }

    async fn get_by_id(&self, wp_id: &str) -> Result<Option<WorkPackage>, StoreError> {
        Ok(self.work_packages.read().await.get(wp_id).cloned())
    }

    async fn delete_expired_before(&self, cutoff: DateTime<Utc>) -> Result<u64, StoreError> {
        let mut guard = self.work_packages.write().await;
        let before = guard.len();
        guard.retain(|_, wp| wp.expires >= cutoff);
        Ok((before - guard.len()) as u64)
    }
}
