//! Specs validation through the full pipeline, exercising YAML specs files
//! rather than pre-built schema values.

use confspec::{ConfigError, Reader};
use serde_json::json;
use std::path::PathBuf;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn nested_specs_validate_sub_documents() {
    let temp = TempDir::new().unwrap();
    let specs = write(
        &temp,
        "specs.yml",
        r#"
type: object
properties:
  server:
    type: object
    properties:
      port:
        type: integer
      host:
        type: string
    required:
      - port
required:
  - server
"#,
    );

    let good = write(&temp, "good.yml", "server:\n  port: 8080\n  host: localhost\n");
    let doc = Reader::new()
        .config_file(good)
        .specs_file(specs.clone())
        .parse()
        .unwrap();
    assert_eq!(
        doc.get("server"),
        Some(&json!({"port": 8080, "host": "localhost"}))
    );

    let bad = write(&temp, "bad.yml", "server:\n  port: eighty\n");
    let err = Reader::new()
        .config_file(bad)
        .specs_file(specs.clone())
        .parse()
        .unwrap_err();
    assert_eq!(err.to_string(), "'eighty' is not of type 'integer'");

    let missing = write(&temp, "missing.yml", "server:\n  host: localhost\n");
    let err = Reader::new()
        .config_file(missing)
        .specs_file(specs)
        .parse()
        .unwrap_err();
    assert_eq!(err.to_string(), "'port' is a required property");
}

#[test]
fn first_violation_wins() {
    let temp = TempDir::new().unwrap();
    let specs = write(
        &temp,
        "specs.yml",
        r#"
type: object
properties:
  debug:
    type: boolean
  port:
    type: integer
"#,
    );

    // Two mismatched fields; exactly one error comes back.
    let config = write(&temp, "config.yml", "debug: abc\nport: eighty\n");
    let err = Reader::new()
        .config_file(config)
        .specs_file(specs)
        .parse()
        .unwrap_err();
    assert!(matches!(err, ConfigError::TypeMismatch { .. }));
}

#[test]
fn validation_runs_on_the_merged_document() {
    let temp = TempDir::new().unwrap();
    let specs = write(
        &temp,
        "specs.yml",
        r#"
type: object
properties:
  logger:
    type: string
required:
  - logger
"#,
    );

    // The required key comes from the default file, not the config.
    let config = write(&temp, "config.yml", "debug: true\n");
    let default = write(&temp, "default.yml", "logger: monolog\n");

    let doc = Reader::new()
        .config_file(config.clone())
        .specs_file(specs.clone())
        .default_file(default)
        .parse()
        .unwrap();
    assert_eq!(doc.get("logger"), Some(&json!("monolog")));

    // Without the default, the same specs reject the config.
    let err = Reader::new()
        .config_file(config)
        .specs_file(specs)
        .parse()
        .unwrap_err();
    assert!(matches!(err, ConfigError::MissingKey { .. }));
}

#[test]
fn specs_that_are_not_a_schema_are_rejected() {
    let temp = TempDir::new().unwrap();
    let config = write(&temp, "config.yml", "debug: true\n");
    let specs = write(&temp, "specs.yml", "type: banana\n");

    let err = Reader::new()
        .config_file(config)
        .specs_file(specs)
        .parse()
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSchema { .. }));
}

#[test]
fn non_string_mismatches_use_json_notation() {
    let temp = TempDir::new().unwrap();
    let specs = write(
        &temp,
        "specs.yml",
        r#"
type: object
properties:
  logger:
    type: string
"#,
    );

    let config = write(&temp, "config.yml", "logger: 42\n");
    let err = Reader::new()
        .config_file(config)
        .specs_file(specs)
        .parse()
        .unwrap_err();
    assert_eq!(err.to_string(), "'42' is not of type 'string'");
}
