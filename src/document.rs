//! Loading YAML files into in-memory documents.
//!
//! One loader serves all three input files; [`FileRole`] records which file
//! was being read so not-found errors name the right one.

use crate::error::{ConfigError, Result};
use crate::value::{Document, into_document};
use serde_json::Value;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// Which of the three input files a load call is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileRole {
    Config,
    Default,
    Specs,
}

impl fmt::Display for FileRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileRole::Config => write!(f, "config"),
            FileRole::Default => write!(f, "default"),
            FileRole::Specs => write!(f, "specs"),
        }
    }
}

/// Read and parse a YAML file into a [`Document`].
///
/// The path must refer to an existing, readable file. An empty file counts
/// as an empty mapping; any other non-mapping top level is rejected. No
/// caching: every call is a fresh read.
pub fn load(path: &Path, role: FileRole) -> Result<Document> {
    if !path.is_file() {
        return Err(ConfigError::NotFound {
            role,
            path: path.to_path_buf(),
        });
    }

    // An unreadable file is treated the same as a missing one.
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::NotFound {
        role,
        path: path.to_path_buf(),
    })?;

    let value: Value = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let document = into_document(value).ok_or_else(|| ConfigError::NotAMapping {
        path: path.to_path_buf(),
    })?;

    debug!(%role, path = %path.display(), keys = document.len(), "loaded document");
    Ok(document)
}
