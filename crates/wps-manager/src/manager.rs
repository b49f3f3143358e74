//! The work package state machine (component G). Four operations,
//! orchestrating the Identity Verifier, Dataset Projection Store, Access
//! Oracle Client, Token Codec and Work Package Store behind a single
//! `WpsError` taxonomy.
//!
//! Only `create_work_package` writes. Every other operation is read-only
//! and tolerant of the dataset projection having moved on underneath a
//! still-valid work package.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, warn};

use wps_access::AccessOracle;
use wps_auth::IdentityVerifier;
use wps_core::{
    Dataset, ParsedAccessToken, WorkOrderClaims, WorkOrderTokenResponse, WorkPackage, WorkPackageCreationData,
    WorkPackageCreationResponse, WorkPackageDetails, WorkType, WpsError,
};
use wps_crypto::{encrypt_for_user, fingerprint, random_secret, random_token_id, TokenCodec};
use wps_store::{DatasetStore, WorkPackageStore};

pub struct WorkPackageManager<DS, WS, AO>
where
    DS: DatasetStore,
    WS: WorkPackageStore,
    AO: AccessOracle,
{
    identity_verifier: IdentityVerifier,
    token_codec: TokenCodec,
    dataset_store: Arc<DS>,
    work_package_store: Arc<WS>,
    access_oracle: Arc<AO>,
    valid_days: i64,
}

impl<DS, WS, AO> WorkPackageManager<DS, WS, AO>
where
    DS: DatasetStore,
    WS: WorkPackageStore,
    AO: AccessOracle,
{
    pub fn new(
        identity_verifier: IdentityVerifier,
        token_codec: TokenCodec,
        dataset_store: Arc<DS>,
        work_package_store: Arc<WS>,
        access_oracle: Arc<AO>,
        valid_days: i64,
    ) -> Self {
        Self { identity_verifier, token_codec, dataset_store, work_package_store, access_oracle, valid_days }
    }

    /// G.1
    pub async fn create_work_package(
        &self,
        creation_data: WorkPackageCreationData,
        internal_assertion: &str,
    ) -> Result<WorkPackageCreationResponse, WpsError> {
        let user = self.identity_verifier.verify(internal_assertion).map_err(|_| WpsError::NotAuthenticated)?;

        // A missing dataset collapses into AccessDenied so its existence is
        // never distinguishable from an authorization refusal.
        let dataset = self
            .dataset_store
            .get(&creation_data.dataset_id)
            .await
            .map_err(|e| WpsError::Internal(e.to_string()))?
            .ok_or(WpsError::AccessDenied)?;

        let authorized = self
            .access_oracle
            .check(&user.id, &dataset.id, creation_data.work_type)
            .await
            .map_err(|e| WpsError::Internal(e.to_string()))?;
        if !authorized {
            return Err(WpsError::AccessDenied);
        }

        let chosen = resolve_file_selection(&dataset, creation_data.file_ids.as_deref());
        if chosen.is_empty() {
            return Err(WpsError::NoFilesAccessible);
        }

        let wp_id = random_token_id();
        let secret = random_secret();
        let access_token_plain = format!("{wp_id}:{secret}");
        let token_hash = fingerprint(&secret);

        let created = Utc::now();
        let expires = created + Duration::days(self.valid_days);

        let work_package = WorkPackage {
            id: wp_id.clone(),
            dataset_id: dataset.id.clone(),
            work_type: creation_data.work_type,
            user_id: user.id.clone(),
            user_public_crypt4gh_key: creation_data.user_public_crypt4gh_key.clone(),
            full_user_name: user.name.clone(),
            email: user.email.clone(),
            file_ids: chosen,
            token_hash,
            created,
            expires,
        };

        debug!(wp_id = %work_package.id, user_id = %user.id, "creating work package");
        self.work_package_store.insert(work_package).await.map_err(|e| WpsError::Internal(e.to_string()))?;

        let encrypted = encrypt_for_user(access_token_plain.as_bytes(), &creation_data.user_public_crypt4gh_key)
            .map_err(|_| WpsError::InvalidUserKey)?;

        Ok(WorkPackageCreationResponse { id: wp_id, token: encrypted })
    }

    /// G.2
    pub async fn get_work_package_details(
        &self,
        wp_id: &str,
        presented_access_token: &str,
    ) -> Result<WorkPackageDetails, WpsError> {
        let work_package = self.authenticate_access_token(wp_id, presented_access_token).await?;

        let dataset = self.dataset_store.get(&work_package.dataset_id).await.map_err(|e| WpsError::Internal(e.to_string()))?;

        let files = work_package
            .file_ids
            .iter()
            .map(|file_id| {
                let extension = dataset
                    .as_ref()
                    .and_then(|d| d.file(file_id))
                    .map(|f| f.extension.clone())
                    .unwrap_or_default();
                (file_id.clone(), extension)
            })
            .collect();

        Ok(WorkPackageDetails {
            work_type: work_package.work_type,
            created: work_package.created,
            expires: work_package.expires,
            files,
        })
    }

    /// G.3
    pub async fn create_work_order_token(
        &self,
        wp_id: &str,
        file_id: &str,
        presented_access_token: &str,
    ) -> Result<WorkOrderTokenResponse, WpsError> {
        let work_package = self.authenticate_access_token(wp_id, presented_access_token).await?;

        if !work_package.file_ids.iter().any(|f| f == file_id) {
            return Err(WpsError::AccessDenied);
        }

        let claims = WorkOrderClaims {
            work_type: work_package.work_type,
            file_id: file_id.to_string(),
            user_id: work_package.user_id.clone(),
            user_public_crypt4gh_key: work_package.user_public_crypt4gh_key.clone(),
            full_user_name: work_package.full_user_name.clone(),
            email: work_package.email.clone(),
        };

        let signed = self.token_codec.sign(&claims).map_err(|e| WpsError::Internal(e.to_string()))?;
        let encrypted = encrypt_for_user(signed.as_bytes(), &work_package.user_public_crypt4gh_key)
            .map_err(|_| WpsError::InvalidUserKey)?;

        self.access_oracle.register_grant(&work_package.user_id, file_id, work_package.expires).await;

        Ok(WorkOrderTokenResponse { token: encrypted })
    }

    /// G.4
    pub async fn list_user_datasets(&self, user_id: &str, internal_assertion: &str) -> Result<Vec<Dataset>, WpsError> {
        let user = self.identity_verifier.verify(internal_assertion).map_err(|_| WpsError::NotAuthenticated)?;
        if user.id != user_id {
            return Err(WpsError::AccessDenied);
        }

        let dataset_ids =
            self.access_oracle.list_datasets(user_id).await.map_err(|e| WpsError::Internal(e.to_string()))?;

        let mut datasets = Vec::with_capacity(dataset_ids.len());
        for dataset_id in dataset_ids {
            match self.dataset_store.get(&dataset_id).await.map_err(|e| WpsError::Internal(e.to_string()))? {
                Some(dataset) => datasets.push(dataset),
                None => warn!(dataset_id, "access oracle listed a dataset with no projection, dropping"),
            }
        }
        Ok(datasets)
    }

    async fn authenticate_access_token(&self, wp_id: &str, presented: &str) -> Result<WorkPackage, WpsError> {
        let parsed = ParsedAccessToken::parse(presented).ok_or(WpsError::AccessDenied)?;
        if parsed.work_package_id != wp_id {
            return Err(WpsError::AccessDenied);
        }

        let work_package =
            self.work_package_store.get_by_id(wp_id).await.map_err(|e| WpsError::Internal(e.to_string()))?.ok_or(WpsError::AccessDenied)?;

        if fingerprint(&parsed.secret) != work_package.token_hash {
            return Err(WpsError::AccessDenied);
        }
        if work_package.is_expired_at(Utc::now()) {
            return Err(WpsError::AccessDenied);
        }

        Ok(work_package)
    }
}

fn resolve_file_selection(dataset: &Dataset, requested: Option<&[String]>) -> Vec<String> {
    let available: HashSet<&str> = dataset.files.iter().map(|f| f.id.as_str()).collect();

    match requested {
        None => dataset.file_ids(),
        Some(ids) => {
            let mut seen = HashSet::new();
            ids.iter()
                .filter(|id| available.contains(id.as_str()) && seen.insert(id.as_str()))
                .cloned()
                .collect()
        }
    }
}
