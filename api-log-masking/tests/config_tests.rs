//! Loading masking configuration from files and the environment

use std::io::Write;

use api_log_masking::*;
use error_common::ComplianceError;
use serde_json::json;

fn write_config(extension: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(extension)
        .tempfile()
        .unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_yaml_overrides() {
    let file = write_config(
        ".yaml",
        "overrides:\n  headers:\n    - custom-header\n    - x-api-key\n",
    );

    let config =
        MaskingConfig::load_with_env_prefix(Some(file.path()), "COMPLY_TEST_YAML").unwrap();

    let mapping = ConfiguredApi::new(config).sensitive_field_mapping();
    assert_eq!(mapping.patterns(Location::Headers), ["custom-header", "x-api-key"]);
    assert_eq!(mapping.patterns(Location::Body), DEFAULT_MASK_MAP.patterns(Location::Body));
}

#[test]
fn test_load_json_keeps_pattern_case() {
    let file = write_config(".json", r#"{"overrides": {"body": ["AppKey", "Pin"]}}"#);

    let config =
        MaskingConfig::load_with_env_prefix(Some(file.path()), "COMPLY_TEST_JSON").unwrap();

    assert_eq!(
        config.overrides.get(Location::Body),
        Some(&["AppKey".to_string(), "Pin".to_string()][..])
    );
}

#[test]
fn test_load_without_file_uses_defaults() {
    let config = MaskingConfig::load_with_env_prefix(None, "COMPLY_TEST_EMPTY").unwrap();
    assert_eq!(config, MaskingConfig::default());
}

#[test]
fn test_env_list_overrides() {
    std::env::set_var("COMPLY_TEST_LIST__OVERRIDES__HEADERS", "x-client-secret,x-api-key");
    std::env::set_var("COMPLY_TEST_LIST__OVERRIDES__OUTPUT", "irn");

    let config = MaskingConfig::load_with_env_prefix(None, "COMPLY_TEST_LIST");
    std::env::remove_var("COMPLY_TEST_LIST__OVERRIDES__HEADERS");
    std::env::remove_var("COMPLY_TEST_LIST__OVERRIDES__OUTPUT");

    let mapping = ConfiguredApi::new(config.unwrap()).sensitive_field_mapping();
    assert_eq!(mapping.patterns(Location::Headers), ["x-client-secret", "x-api-key"]);
    assert_eq!(mapping.patterns(Location::Output), ["irn"]);
    assert_eq!(mapping.patterns(Location::Data), DEFAULT_MASK_MAP.patterns(Location::Data));
}

#[test]
fn test_env_overrides_file() {
    let file = write_config(".yaml", "overrides:\n  body:\n    - pin\n");
    std::env::set_var("COMPLY_TEST_LAYERED__OVERRIDES__BODY", "Password");

    let config = MaskingConfig::load_with_env_prefix(Some(file.path()), "COMPLY_TEST_LAYERED");
    std::env::remove_var("COMPLY_TEST_LAYERED__OVERRIDES__BODY");

    let mut log = ApiLogRecord::from_json(json!({"body": {"pin": "1234", "Password": "p"}})).unwrap();
    ConfiguredApi::new(config.unwrap()).mask_sensitive_info(&mut log);
    let body = log.body.unwrap();
    assert_eq!(body["Password"], json!(PLACEHOLDER));
    assert_eq!(body["pin"], json!("1234"));
}

#[test]
fn test_masking_cannot_be_switched_off() {
    let file = write_config(".yaml", "enabled: false\n");

    let err = MaskingConfig::load_with_env_prefix(Some(file.path()), "COMPLY_TEST_OFF")
        .unwrap_err();

    assert!(matches!(err, ComplianceError::Config(_)));
}

#[test]
fn test_unknown_location_is_rejected() {
    let file = write_config(".yaml", "overrides:\n  cookies:\n    - sessionid\n");

    let err = MaskingConfig::load_with_env_prefix(Some(file.path()), "COMPLY_TEST_BAD")
        .unwrap_err();

    assert!(matches!(err, ComplianceError::Config(_)));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.yaml");

    let err = MaskingConfig::load_with_env_prefix(Some(path.as_path()), "COMPLY_TEST_MISSING").unwrap_err();

    assert!(matches!(err, ComplianceError::Config(_)));
}
