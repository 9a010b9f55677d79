//! Orchestration of the load, fill-defaults, validate pipeline.

use crate::document::{self, FileRole};
use crate::error::{ConfigError, Result};
use crate::merge::fill_defaults;
use crate::paths::ConfigPaths;
use crate::schema::Schema;
use crate::value::Document;
use std::path::PathBuf;
use tracing::debug;

/// Configuration reader.
///
/// Builder over the three candidate files. [`Reader::parse`] runs the
/// pipeline: resolve paths, load the config file, fill absent keys from the
/// default file, validate the merged result against the specs file, and
/// return the merged document. The default and specs files are opt-in;
/// leaving them unset skips the corresponding stage.
///
/// Each call is self-contained: nothing survives between calls and
/// concurrent calls are independent.
#[derive(Debug, Clone, Default)]
pub struct Reader {
    config_file: Option<PathBuf>,
    specs_file: Option<PathBuf>,
    default_file: Option<PathBuf>,
}

impl Reader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the configuration file. When unset, parsing falls back to
    /// `<base-dir>/config/app.yml`.
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Path of the specs (schema) file to validate against. The path must
    /// exist once set.
    pub fn specs_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.specs_file = Some(path.into());
        self
    }

    /// Path of the default configuration file whose values fill absent
    /// top-level keys. The path must exist once set.
    pub fn default_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_file = Some(path.into());
        self
    }

    /// Run the pipeline and return the merged document.
    ///
    /// Every failure is terminal: there is no retry and no partial result.
    pub fn parse(&self) -> Result<Document> {
        let paths = ConfigPaths::resolve(
            self.config_file.as_deref(),
            self.specs_file.as_deref(),
            self.default_file.as_deref(),
        );

        let config = document::load(&paths.config, FileRole::Config)?;

        let merged = match &paths.default {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::MissingDefaultFile);
                }
                let defaults = document::load(path, FileRole::Default)?;
                debug!(path = %path.display(), "filling absent keys from defaults");
                fill_defaults(config, defaults)
            }
            None => config,
        };

        match &paths.specs {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::MissingSpecsFile);
                }
                let specs = document::load(path, FileRole::Specs)?;
                Schema::from_document(specs)?.validate(&merged)?;
            }
            None => debug!("no specs supplied, skipping validation"),
        }

        Ok(merged)
    }
}
