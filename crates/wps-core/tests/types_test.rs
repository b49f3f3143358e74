//! Type serialization tests for wps-core

use chrono::Utc;
use wps_core::*;

fn sample_dataset() -> Dataset {
    Dataset {
        id: "GHGAD_STUDY_1".to_string(),
        title: "Example study".to_string(),
        description: "An example dataset".to_string(),
        stage: WorkType::Download,
        files: vec![
            DatasetFile { id: "f1".to_string(), extension: ".txt".to_string() },
            DatasetFile { id: "f2".to_string(), extension: ".csv".to_string() },
            DatasetFile { id: "f3".to_string(), extension: ".json".to_string() },
        ],
    }
}

#[test]
fn dataset_round_trips_through_json() {
    let dataset = sample_dataset();
    let json = serde_json::to_string(&dataset).unwrap();
    let parsed: Dataset = serde_json::from_str(&json).unwrap();
    assert_eq!(dataset, parsed);
}

#[test]
fn dataset_file_order_is_preserved_through_json() {
    let dataset = sample_dataset();
    let json = serde_json::to_value(&dataset).unwrap();
    let files = json["files"].as_array().unwrap();
    assert_eq!(files[0]["id"], "f1");
    assert_eq!(files[1]["id"], "f2");
    assert_eq!(files[2]["id"], "f3");
}

#[test]
fn work_package_round_trips_through_json() {
    let now = Utc::now();
    let wp = WorkPackage {
        id: "wp-abc".to_string(),
        dataset_id: "GHGAD_STUDY_1".to_string(),
        work_type: WorkType::Download,
        user_id: "u1".to_string(),
        user_public_crypt4gh_key: "base64-key".to_string(),
        full_user_name: "Alice Example".to_string(),
        email: "alice@example.org".to_string(),
        file_ids: vec!["f1".to_string(), "f2".to_string()],
        token_hash: "a".repeat(64),
        created: now,
        expires: now + chrono::Duration::days(30),
    };
    let json = serde_json::to_string(&wp).unwrap();
    let parsed: WorkPackage = serde_json::from_str(&json).unwrap();
    assert_eq!(wp, parsed);
}

#[test]
fn work_package_uses_type_field_name() {
    let now = Utc::now();
    let wp = WorkPackage {
        id: "wp-abc".to_string(),
        dataset_id: "ds1".to_string(),
        work_type: WorkType::Upload,
        user_id: "u1".to_string(),
        user_public_crypt4gh_key: "key".to_string(),
        full_user_name: "Alice".to_string(),
        email: "alice@example.org".to_string(),
        file_ids: vec![],
        token_hash: "hash".to_string(),
        created: now,
        expires: now,
    };
    let json = serde_json::to_value(&wp).unwrap();
    assert_eq!(json["type"], "upload");
    assert!(json.get("work_type").is_none());
}

#[test]
fn work_package_details_serializes_files_as_an_id_to_extension_object() {
    let now = Utc::now();
    let details = WorkPackageDetails {
        work_type: WorkType::Download,
        created: now,
        expires: now + chrono::Duration::days(30),
        files: [("f2".to_string(), ".csv".to_string()), ("f1".to_string(), ".txt".to_string())].into_iter().collect(),
    };
    let json = serde_json::to_value(&details).unwrap();
    let files = json["files"].as_object().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files["f1"], ".txt");
    assert_eq!(files["f2"], ".csv");
}

#[test]
fn work_order_claims_round_trip() {
    let claims = WorkOrderClaims {
        work_type: WorkType::Download,
        file_id: "f1".to_string(),
        user_id: "u1".to_string(),
        user_public_crypt4gh_key: "key".to_string(),
        full_user_name: "Alice".to_string(),
        email: "alice@example.org".to_string(),
    };
    let json = serde_json::to_string(&claims).unwrap();
    let parsed: WorkOrderClaims = serde_json::from_str(&json).unwrap();
    assert_eq!(claims, parsed);
}

#[test]
fn creation_data_round_trips_without_file_ids() {
    let data = WorkPackageCreationData {
        dataset_id: "ds1".to_string(),
        work_type: WorkType::Download,
        user_public_crypt4gh_key: "key".to_string(),
        file_ids: None,
    };
    let json = serde_json::to_value(&data).unwrap();
    let parsed: WorkPackageCreationData = serde_json::from_value(json).unwrap();
    assert_eq!(parsed.file_ids, None);
}

#[test]
fn creation_data_defaults_file_ids_when_field_missing() {
    let json = serde_json::json!({
        "dataset_id": "ds1",
        "type": "download",
        "user_public_crypt4gh_key": "key"
    });
    let parsed: WorkPackageCreationData = serde_json::from_value(json).unwrap();
    assert_eq!(parsed.file_ids, None);
}
