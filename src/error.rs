//! Error taxonomy for configuration loading.
//!
//! Every failure aborts the `parse` call and surfaces here with a literal,
//! user-displayable message. Callers pattern-match on message content for
//! diagnostics, so the wording of each variant is part of the API.

use crate::document::FileRole;
use crate::schema::SchemaType;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors surfaced by the configuration reader.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required file path does not exist or is unreadable. The config file
    /// is always required; default and specs files become required once
    /// their paths are reached by the loader.
    #[error("Missing {role} file: \"{}\" does not exist", path.display())]
    NotFound { role: FileRole, path: PathBuf },

    /// An explicitly supplied default path does not point at a file.
    /// Checked before any load attempt: a missing optional default file is a
    /// caller misconfiguration, not a normal not-found case.
    #[error("Your default configuration file does not exist")]
    MissingDefaultFile,

    /// An explicitly supplied specs path does not point at a file.
    #[error("Your specs (schema) file does not exist")]
    MissingSpecsFile,

    /// The file exists but its contents are not valid YAML.
    #[error("Failed to parse \"{}\": {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The file parsed but its top level is not a mapping.
    #[error("\"{}\" does not contain a top-level mapping", path.display())]
    NotAMapping { path: PathBuf },

    /// The specs document parsed but does not describe a schema.
    #[error("Invalid specs document: {source}")]
    InvalidSchema {
        #[source]
        source: serde_json::Error,
    },

    /// A key the schema lists as required is absent from the document.
    #[error("'{key}' is a required property")]
    MissingKey { key: String },

    /// A value does not match its declared schema type.
    #[error("'{value}' is not of type '{expected}'")]
    TypeMismatch { value: String, expected: SchemaType },
}
