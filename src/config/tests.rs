//! Tests for config functionality.

use crate::config::{Config, ReadmeMapping};
use crate::error::AuttajaError;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(
        config.templates,
        vec![".env.template".to_string(), ".env.test.template".to_string()]
    );
    assert_eq!(config.shell, "sh -c");
    assert!(config.allow_calc);
    assert!(config.readme.is_empty());
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config.shell, "sh -c");
    assert_eq!(config.templates.len(), 2);
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
shell: "bash -lc"
allow_calc: false
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.shell, "bash -lc");
    assert!(!config.allow_calc);
    // Unspecified values should use defaults
    assert_eq!(config.templates.len(), 2);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
templates:
  - config/.env.template
shell: "bash -c"
allow_calc: true
readme:
  docs/README.md.template: README.md.template
unknown_field: ignored
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.templates, vec!["config/.env.template".to_string()]);
    assert_eq!(config.shell_command().unwrap(), vec!["bash", "-c"]);
    assert_eq!(
        config.readme_mappings(),
        vec![ReadmeMapping {
            source: PathBuf::from("docs/README.md.template"),
            destination: PathBuf::from("README.md.template"),
        }]
    );
}

#[test]
fn test_template_without_suffix_is_format_error() {
    let yaml = "templates: [\".env\"]";
    let err = Config::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, AuttajaError::FormatError(_)));
    assert!(err.to_string().contains(".env"));
}

#[test]
fn test_empty_shell_is_rejected() {
    let err = Config::from_yaml("shell: \"\"").unwrap_err();
    assert!(matches!(err, AuttajaError::ConfigError(_)));
}

#[test]
fn test_unbalanced_shell_quotes_are_rejected() {
    let err = Config::from_yaml("shell: \"sh '-c\"").unwrap_err();
    assert!(err.to_string().contains("cannot parse shell"));
}

#[test]
fn test_invalid_yaml_is_config_error() {
    let err = Config::from_yaml("templates: [unclosed").unwrap_err();
    assert!(matches!(err, AuttajaError::ConfigError(_)));
}

#[test]
fn test_yaml_roundtrip_keeps_values() {
    let mut config = Config::default();
    config.shell = "zsh -c".to_string();

    let yaml = config.to_yaml().unwrap();
    let parsed = Config::from_yaml(&yaml).unwrap();
    assert_eq!(parsed.shell, "zsh -c");
}

#[test]
fn test_load_or_default_missing_file() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_or_default(dir.path().join(".auttaja.yaml")).unwrap();
    assert_eq!(config.shell, "sh -c");
}

#[test]
fn test_load_reads_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(".auttaja.yaml");
    std::fs::write(&path, "allow_calc: false\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert!(!config.allow_calc);
}

#[test]
fn test_readme_mapping_parse() {
    let mapping = ReadmeMapping::parse("docs=out").unwrap();
    assert_eq!(mapping.source, PathBuf::from("docs"));
    assert_eq!(mapping.destination, PathBuf::from("out"));

    assert!(ReadmeMapping::parse("docs").is_err());
    assert!(ReadmeMapping::parse("=out").is_err());
}
