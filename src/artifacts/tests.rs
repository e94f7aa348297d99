// Artifact loading tests.

use super::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

#[test]
fn test_load_expected_schema_keeps_order() {
    let file = write_temp(r#"["URLLength", "TLD_Frequency", "IsHTTPS"]"#);
    let schema = load_expected_schema(file.path()).expect("load schema");
    assert_eq!(
        schema.columns(),
        &["URLLength", "TLD_Frequency", "IsHTTPS"]
    );
}

#[test]
fn test_load_expected_schema_rejects_empty() {
    let file = write_temp("[]");
    assert!(matches!(
        load_expected_schema(file.path()),
        Err(ArtifactError::EmptySchema(_))
    ));
}

#[test]
fn test_load_expected_schema_rejects_duplicates() {
    let file = write_temp(r#"["URLLength", "IsHTTPS", "URLLength"]"#);
    match load_expected_schema(file.path()) {
        Err(ArtifactError::DuplicateColumn { column, .. }) => assert_eq!(column, "URLLength"),
        other => panic!("expected duplicate column error, got {other:?}"),
    }
}

#[test]
fn test_load_expected_schema_missing_file() {
    let err = load_expected_schema(&PathBuf::from("/nonexistent/feature_columns.json"))
        .unwrap_err();
    assert!(matches!(err, ArtifactError::Io { .. }));
    assert!(err.to_string().contains("feature_columns.json"));
}

#[test]
fn test_load_tld_table() {
    let file = write_temp(r#"{"com": 0.55, "xyz": 0.002}"#);
    let table = load_tld_frequency_table(Some(file.path()));
    assert_eq!(table.len(), 2);
    assert_eq!(table.frequency("com"), 0.55);
    assert_eq!(table.frequency("net"), 0.0);
}

#[test]
fn test_load_tld_table_degrades_to_empty() {
    assert!(load_tld_frequency_table(None).is_empty());
    assert!(load_tld_frequency_table(Some(Path::new("/nonexistent/tld.json"))).is_empty());

    let malformed = write_temp("not json");
    assert!(load_tld_frequency_table(Some(malformed.path())).is_empty());
}

#[test]
fn test_load_model() {
    let file = write_temp(r#"{"intercept": 0.25, "weights": {"IsHTTPS": 1.5}}"#);
    let model = load_model(file.path()).expect("load model");
    assert_eq!(model.intercept, 0.25);
    assert_eq!(model.weights.get("IsHTTPS"), Some(&1.5));
    assert_eq!(model.threshold, 0.5);
}

#[test]
fn test_load_model_rejects_wrong_shape() {
    let file = write_temp(r#"{"weights": []}"#);
    assert!(matches!(
        load_model(file.path()),
        Err(ArtifactError::Json { .. })
    ));
}

#[test]
fn test_model_artifacts_load() {
    let model = write_temp(r#"{"intercept": 0.0, "weights": {}}"#);
    let columns = write_temp(r#"["URLLength"]"#);
    let config = Config {
        model_path: model.path().to_path_buf(),
        feature_columns_path: columns.path().to_path_buf(),
        tld_mapping_path: Some(PathBuf::from("/nonexistent/tld_mapping.json")),
        ..Default::default()
    };
    let artifacts = ModelArtifacts::load(&config).expect("load artifacts");
    assert_eq!(artifacts.schema.len(), 1);
    assert!(artifacts.tld_table.is_empty());
}
