//! Work Package Service domain types.
//!
//! This module contains the data model from the work package service
//! specification: datasets and their files, work packages, and the DTOs
//! exchanged across the HTTP surface.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of work a work package authorizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WorkType {
    Download,
    Upload,
}

impl WorkType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkType::Download => "download",
            WorkType::Upload => "upload",
        }
    }
}

/// A single file belonging to a dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatasetFile {
    pub id: String,

    /// Always begins with `.` (e.g. `.txt`, `.json`).
    pub extension: String,
}

/// A dataset as projected locally from upstream events (component C).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dataset {
    pub id: String,
    pub title: String,
    pub description: String,
    pub stage: WorkType,

    /// Order as received from the upstream event is preserved.
    pub files: Vec<DatasetFile>,
}

impl Dataset {
    /// File ids present in this dataset, in dataset order.
    pub fn file_ids(&self) -> Vec<String> {
        self.files.iter().map(|f| f.id.clone()).collect()
    }

    pub fn file(&self, file_id: &str) -> Option<&DatasetFile> {
        self.files.iter().find(|f| f.id == file_id)
    }
}

/// A persisted work package (§3 WorkPackage).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkPackage {
    pub id: String,
    pub dataset_id: String,
    #[serde(rename = "type")]
    pub work_type: WorkType,

    pub user_id: String,
    pub user_public_crypt4gh_key: String,
    pub full_user_name: String,
    pub email: String,

    /// Ordered, deduplicated subset of the dataset's file ids at creation time.
    pub file_ids: Vec<String>,

    /// Hex SHA-256 of the access token's secret. The token itself is never stored.
    pub token_hash: String,

    pub created: DateTime<Utc>,
    pub expires: DateTime<Utc>,
}

impl WorkPackage {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires
    }
}

/// Identity extracted from a verified internal assertion (component B).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserContext {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Request body for `POST /work-packages`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkPackageCreationData {
    pub dataset_id: String,
    #[serde(rename = "type")]
    pub work_type: WorkType,
    pub user_public_crypt4gh_key: String,

    /// `None` requests the full current file set of the dataset.
    #[serde(default)]
    pub file_ids: Option<Vec<String>>,
}

/// Response body for `POST /work-packages`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkPackageCreationResponse {
    pub id: String,
    pub token: String,
}

/// Response body for `GET /work-packages/{wp_id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkPackageDetails {
    #[serde(rename = "type")]
    pub work_type: WorkType,
    pub created: DateTime<Utc>,
    pub expires: DateTime<Utc>,

    /// file_id -> extension. Extensions degrade to `""` if the originating
    /// dataset has since been deleted. A `BTreeMap` keeps serialization
    /// order stable across runs even though the wire shape is a JSON
    /// object, not an array.
    pub files: BTreeMap<String, String>,
}

/// Response body for the work-order-token minting endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkOrderTokenResponse {
    pub token: String,
}

/// Claims signed into a work-order token (§3 Work-Order Token).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkOrderClaims {
    #[serde(rename = "type")]
    pub work_type: WorkType,
    pub file_id: String,
    pub user_id: String,
    pub user_public_crypt4gh_key: String,
    pub full_user_name: String,
    pub email: String,
}

/// An access token as parsed from its wire form `"{wp_id}:{base64url(secret)}"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedAccessToken {
    pub work_package_id: String,
    pub secret: String,
}

impl ParsedAccessToken {
    /// Parse `"{wp_id}:{secret}"`. Returns `None` on malformed input (missing
    /// separator, empty wp_id, or empty secret).
    pub fn parse(presented: &str) -> Option<Self> {
        let (wp_id, secret) = presented.split_once(':')?;
        if wp_id.is_empty() || secret.is_empty() {
            return None;
        }
        Some(Self {
            work_package_id: wp_id.to_string(),
            secret: secret.to_string(),
        })
    }
}
