//! Validation edge case tests for wps-core

use wps_core::*;

fn creation_data(file_ids: Option<Vec<&str>>) -> WorkPackageCreationData {
    WorkPackageCreationData {
        dataset_id: "GHGAD_STUDY_1".to_string(),
        work_type: WorkType::Download,
        user_public_crypt4gh_key: "base64-key".to_string(),
        file_ids: file_ids.map(|ids| ids.into_iter().map(String::from).collect()),
    }
}

#[test]
fn accepts_request_with_no_file_selection() {
    assert!(validate_creation_data(&creation_data(None)).is_ok());
}

#[test]
fn accepts_request_with_explicit_selection() {
    assert!(validate_creation_data(&creation_data(Some(vec!["f1", "f2"]))).is_ok());
}

#[test]
fn accepts_upload_work_type() {
    let mut data = creation_data(None);
    data.work_type = WorkType::Upload;
    assert!(validate_creation_data(&data).is_ok());
}

#[test]
fn rejects_whitespace_only_dataset_id() {
    let mut data = creation_data(None);
    data.dataset_id = "   ".to_string();
    assert_eq!(validate_creation_data(&data), Err(ValidationError::EmptyDatasetId));
}

#[test]
fn rejects_empty_entry_in_selection() {
    let mut data = creation_data(Some(vec!["f1"]));
    data.file_ids = Some(vec!["f1".to_string(), "   ".to_string()]);
    assert_eq!(validate_creation_data(&data), Err(ValidationError::EmptyFileId(1)));
}

fn dataset(files: Vec<(&str, &str)>) -> Dataset {
    Dataset {
        id: "GHGAD_STUDY_1".to_string(),
        title: "Study".to_string(),
        description: "desc".to_string(),
        stage: WorkType::Download,
        files: files
            .into_iter()
            .map(|(id, ext)| DatasetFile { id: id.to_string(), extension: ext.to_string() })
            .collect(),
    }
}

#[test]
fn accepts_empty_dataset() {
    assert!(validate_dataset(&dataset(vec![])).is_ok());
}

#[test]
fn accepts_dataset_with_unique_well_formed_files() {
    assert!(validate_dataset(&dataset(vec![("f1", ".txt"), ("f2", ".bam")])).is_ok());
}

#[test]
fn rejects_dataset_with_duplicate_file_ids() {
    let result = validate_dataset(&dataset(vec![("f1", ".txt"), ("f1", ".bam")]));
    assert_eq!(result, Err(ValidationError::DuplicateFileId("f1".to_string())));
}

#[test]
fn rejects_extension_without_leading_dot() {
    let result = validate_dataset(&dataset(vec![("f1", "txt")]));
    assert_eq!(result, Err(ValidationError::InvalidExtension("txt".to_string())));
}

#[test]
fn rejects_blank_file_id() {
    let result = validate_dataset(&dataset(vec![("  ", ".txt")]));
    assert_eq!(result, Err(ValidationError::EmptyDatasetFileId));
}
