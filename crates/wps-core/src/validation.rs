//! Schema-level validation for inbound DTOs.
//!
//! This catches malformed requests before they reach the state machine in
//! `wps-manager`, mapping to HTTP 422 per spec §6/§7 rather than the 403
//! collapse used for authn/authz failures.

use crate::types::{Dataset, DatasetFile, WorkPackageCreationData};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("empty dataset_id")]
    EmptyDatasetId,

    #[error("empty user_public_crypt4gh_key")]
    EmptyUserKey,

    #[error("file_ids entry at index {0} is empty")]
    EmptyFileId(usize),

    #[error("duplicate file id in dataset: {0}")]
    DuplicateFileId(String),

    #[error("file extension '{0}' must start with '.'")]
    InvalidExtension(String),

    #[error("dataset file id is empty")]
    EmptyDatasetFileId,
}

/// Validate a `POST /work-packages` request body before it reaches the manager.
pub fn validate_creation_data(data: &WorkPackageCreationData) -> Result<(), ValidationError> {
    if data.dataset_id.trim().is_empty() {
        return Err(ValidationError::EmptyDatasetId);
    }
    if data.user_public_crypt4gh_key.trim().is_empty() {
        return Err(ValidationError::EmptyUserKey);
    }
    if let Some(ids) = &data.file_ids {
        for (index, id) in ids.iter().enumerate() {
            if id.trim().is_empty() {
                return Err(ValidationError::EmptyFileId(index));
            }
        }
    }
    Ok(())
}

/// Validate a dataset projected from an upstream event before it is stored
/// (component C upsert path): unique, non-empty file ids and well-formed
/// extensions.
pub fn validate_dataset(dataset: &Dataset) -> Result<(), ValidationError> {
    let mut seen = std::collections::HashSet::new();
    for file in &dataset.files {
        validate_dataset_file(file)?;
        if !seen.insert(file.id.as_str()) {
            return Err(ValidationError::DuplicateFileId(file.id.clone()));
        }
    }
    Ok(())
}

fn validate_dataset_file(file: &DatasetFile) -> Result<(), ValidationError> {
    if file.id.trim().is_empty() {
        return Err(ValidationError::EmptyDatasetFileId);
    }
    if !file.extension.starts_with('.') {
        return Err(ValidationError::InvalidExtension(file.extension.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::WorkType;

    fn minimal_creation_data() -> WorkPackageCreationData {
        WorkPackageCreationData {
            dataset_id: "ds1".to_string(),
            work_type: WorkType::Download,
            user_public_crypt4gh_key: "a-base64-key".to_string(),
            file_ids: None,
        }
    }

    #[test]
    fn accepts_minimal_request() {
        assert!(validate_creation_data(&minimal_creation_data()).is_ok());
    }

    #[test]
    fn rejects_empty_dataset_id() {
        let mut data = minimal_creation_data();
        data.dataset_id = "  ".to_string();
        assert_eq!(validate_creation_data(&data), Err(ValidationError::EmptyDatasetId));
    }

    #[test]
    fn rejects_empty_user_key() {
        let mut data = minimal_creation_data();
        data.user_public_crypt4gh_key = "".to_string();
        assert_eq!(validate_creation_data(&data), Err(ValidationError::EmptyUserKey));
    }

    #[test]
    fn rejects_empty_file_id_entry() {
        let mut data = minimal_creation_data();
        data.file_ids = Some(vec!["f1".to_string(), "".to_string()]);
        assert_eq!(validate_creation_data(&data), Err(ValidationError::EmptyFileId(1)));
    }

    fn dataset_with(files: Vec<DatasetFile>) -> Dataset {
        Dataset {
            id: "ds1".to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            stage: WorkType::Download,
            files,
        }
    }

    #[test]
    fn rejects_duplicate_file_ids() {
        let dataset = dataset_with(vec![
            DatasetFile { id: "f1".into(), extension: ".txt".into() },
            DatasetFile { id: "f1".into(), extension: ".csv".into() },
        ]);
        assert_eq!(
            validate_dataset(&dataset),
            Err(ValidationError::DuplicateFileId("f1".to_string()))
        );
    }

    #[test]
    fn rejects_extension_missing_dot() {
        let dataset = dataset_with(vec![DatasetFile { id: "f1".into(), extension: "txt".into() }]);
        assert_eq!(
            validate_dataset(&dataset),
            Err(ValidationError::InvalidExtension("txt".to_string()))
        );
    }

    #[test]
    fn accepts_well_formed_dataset() {
        let dataset = dataset_with(vec![
            DatasetFile { id: "f1".into(), extension: ".txt".into() },
            DatasetFile { id: "f2".into(), extension: ".csv".into() },
        ]);
        assert!(validate_dataset(&dataset).is_ok());
    }
}
