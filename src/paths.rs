//! Candidate path resolution for the three input files.
//!
//! Pure path-string composition: no existence or readability checks happen
//! here, that is the loader's job.

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the base directory used when no config
/// path is supplied.
pub const BASE_DIR_ENV: &str = "CONFSPEC_BASE_DIR";

/// Fallback config location relative to the base directory.
const FALLBACK_CONFIG: &str = "config/app.yml";

/// Discover the base directory: `CONFSPEC_BASE_DIR` when set, otherwise the
/// process working directory.
pub fn base_dir() -> PathBuf {
    env::var(BASE_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// The three candidate paths for one parse run.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Configuration file (always resolved, possibly to the fallback).
    pub config: PathBuf,
    /// Specs (schema) file, when supplied.
    pub specs: Option<PathBuf>,
    /// Default configuration file, when supplied.
    pub default: Option<PathBuf>,
}

impl ConfigPaths {
    /// Resolve candidate paths from caller-supplied arguments.
    ///
    /// Supplied paths are taken verbatim; an omitted config path resolves to
    /// `<base-dir>/config/app.yml`.
    pub fn resolve(
        config: Option<&Path>,
        specs: Option<&Path>,
        default: Option<&Path>,
    ) -> Self {
        let config = config
            .map(Path::to_path_buf)
            .unwrap_or_else(|| base_dir().join(FALLBACK_CONFIG));

        Self {
            config,
            specs: specs.map(Path::to_path_buf),
            default: default.map(Path::to_path_buf),
        }
    }
}
