use cmdargs::args::ReportFormat;
use cmdargs::config::{Config, ConfigError, ReportConfig};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, content).expect("Failed to write config");
    (temp_dir, path)
}

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.report.title, "Arguments:");
    assert_eq!(config.report.format, ReportFormat::Text);
}

/// Test that Config::config_path() returns a path ending with the expected filename.
#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("cmdargs/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_from(&temp_dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_full_config() {
    let (_dir, path) = write_config(
        r#"
[report]
title = "Parsed:"
format = "json"
"#,
    );

    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.report,
        ReportConfig {
            title: "Parsed:".to_string(),
            format: ReportFormat::Json,
        }
    );
}

#[test]
fn test_partial_config_uses_defaults() {
    let (_dir, path) = write_config("[report]\nformat = \"json\"\n");

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.report.title, "Arguments:");
    assert_eq!(config.report.format, ReportFormat::Json);
}

#[test]
fn test_empty_file_uses_defaults() {
    let (_dir, path) = write_config("");
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn test_invalid_format_is_parse_error() {
    let (_dir, path) = write_config("[report]\nformat = \"yaml\"\n");

    match Config::load_from(&path).unwrap_err() {
        ConfigError::ParseError { path: err_path, .. } => assert_eq!(err_path, path),
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_directory_is_read_error() {
    let temp_dir = TempDir::new().unwrap();

    let err = Config::load_from(temp_dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }));
    assert!(err.to_string().contains("Failed to read config file"));
}
