//! MongoDB-backed implementations, wired from `mongo_dsn` /
//! `mongo_timeout_secs` in configuration.

use std::time::Duration;

use async_trait::async_trait;
use bson::doc;
use chrono::{DateTime, Utc};
use mongodb::options::{ClientOptions, ReplaceOptions};
use mongodb::{Client, Collection};
use wps_core::{Dataset, WorkPackage};

use crate::error::StoreError;
use crate::traits::{DatasetStore, WorkPackageStore};

async fn connect(dsn: &str, timeout: Duration) -> Result<Client, StoreError> {
    let mut options = ClientOptions::parse(dsn)
        .await
        .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;
    options.connect_timeout = Some(timeout);
    options.server_selection_timeout = Some(timeout);
    Client::with_options(options).map_err(|e| StoreError::ConnectionFailed(e.to_string()))
}

pub struct MongoDatasetStore {
    collection: Collection<Dataset>,
}

impl MongoDatasetStore {
    pub async fn connect(
        dsn: &str,
        database: &str,
        collection_name: &str,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = connect(dsn, timeout).await?;
        let collection = client.database(database).collection(collection_name);
        Ok(Self { collection })
    }
}

#[async_trait]
impl DatasetStore for MongoDatasetStore {
    async fn upsert(&self, dataset: Dataset) -> Result<(), StoreError> {
        let filter = doc! { "id": &dataset.id };
        self.collection
            .replace_one(filter, &dataset)
            .with_options(ReplaceOptions::builder().upsert(true).build())
            .await?;
        Ok(())
    }

    async fn delete(&self, dataset_id: &str) -> Result<(), StoreError> {
        self.collection.delete_one(doc! { "id": dataset_id }).await?;
        Ok(())
    }

    async fn get(&self, dataset_id: &str) -> Result<Option<Dataset>, StoreError> {
        Ok(self.collection.find_one(doc! { "id": dataset_id }).await?)
    }
}

pub struct MongoWorkPackageStore {
    collection: Collection<WorkPackage>,
}

impl MongoWorkPackageStore {
    pub async fn connect(
        dsn: &str,
        database: &str,
        collection_name: &str,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let client = connect(dsn, timeout).await?;
        let collection = client.database(database).collection(collection_name);
        Ok(Self { collection })
    }
}

#[async_trait]
impl WorkPackageStore for MongoWorkPackageStore {
    async fn insert(&self, work_package: WorkPackage) -> Result<(), StoreError> {
        self.collection.insert_one(&work_package).await?;
        Ok(())
    }

    async fn get_by_id(&self, wp_id: &str) -> Result<Option<WorkPackage>, StoreError> {
        Ok(self.collection.find_one(doc! { "id": wp_id }).await?)
    }

    async fn delete_expired_before(&self, cutoff: DateTime<Utc>) -> Result<u64, StoreError> {
        let bson_cutoff = bson::DateTime::from_chrono(cutoff);
        let result = self
            .collection
            .delete_many(doc! { "expires": { "$lt": bson_cutoff } })
            .await?;
        Ok(result.deleted_count)
    }
}
