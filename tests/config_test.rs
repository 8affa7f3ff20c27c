// tests/config_test.rs
use git_semv::config::{load_config, Config};
use git_semv::error::SemvError;
use serial_test::serial;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_default_config_values() {
    let config = Config::default();
    assert_eq!(config.prefix, "v");
    assert_eq!(config.remote, "origin");
    assert_eq!(config.pre_name, None);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
prefix = "rel-"
remote = "upstream"
pre_name = "rc"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.prefix, "rel-");
    assert_eq!(config.remote, "upstream");
    assert_eq!(config.pre_name, Some("rc".to_string()));
}

#[test]
fn test_load_partial_file_fills_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"pre_name = \"beta\"").unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.prefix, "v");
    assert_eq!(config.pre_name, Some("beta".to_string()));
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"prefix = [not toml").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(matches!(err, SemvError::Config(_)));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let err = load_config(Some("/nonexistent/gitsemv.toml")).unwrap_err();
    assert!(matches!(err, SemvError::Io(_)));
}

#[test]
#[serial]
fn test_load_from_current_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("gitsemv.toml"), "prefix = \"ver\"").unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let result = load_config(None);

    std::env::set_current_dir(original).unwrap();

    assert_eq!(result.unwrap().prefix, "ver");
}
