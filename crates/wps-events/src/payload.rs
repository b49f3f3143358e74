//! Adapter between the upstream event wire shape and the internal
//! [`Dataset`] type. The exact JSON field names vary between deployments;
//! this module is the one place that knows the upstream vocabulary so the
//! rest of the service only ever sees `Dataset`.

use serde::Deserialize;
use wps_core::{Dataset, DatasetFile, WorkType};

#[derive(Debug, Deserialize)]
pub struct DatasetFileEventPayload {
    pub accession: String,
    pub file_extension: String,
}

#[derive(Debug, Deserialize)]
pub struct DatasetUpsertionPayload {
    pub accession: String,
    pub title: String,
    pub description: String,
    pub stage: WorkType,
    pub files: Vec<DatasetFileEventPayload>,
}

#[derive(Debug, Deserialize)]
pub struct DatasetDeletionPayload {
    pub accession: String,
}

impl From<DatasetUpsertionPayload> for Dataset {
    fn from(payload: DatasetUpsertionPayload) -> Self {
        Dataset {
            id: payload.accession,
            title: payload.title,
            description: payload.description,
            stage: payload.stage,
            files: payload
                .files
                .into_iter()
                .map(|f| DatasetFile { id: f.accession, extension: f.file_extension })
                .collect(),
        }
    }
}
