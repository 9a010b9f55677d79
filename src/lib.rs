//! YAML configuration reader with default filling and specs-based
//! validation.
//!
//! Reads a YAML configuration file, fills absent top-level keys from an
//! optional default file, validates the merged result against an optional
//! specs (schema) file, and returns the merged document. Every failure
//! carries a literal, matchable message.
//!
//! ```no_run
//! use confspec::Reader;
//!
//! # fn main() -> confspec::Result<()> {
//! let config = Reader::new()
//!     .config_file("config/app.yml")
//!     .specs_file("config/specs.yml")
//!     .default_file("config/default.yml")
//!     .parse()?;
//!
//! assert!(config.contains_key("logger"));
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod error;
pub mod merge;
pub mod paths;
pub mod reader;
pub mod schema;
pub mod value;

pub use document::{FileRole, load};
pub use error::{ConfigError, Result};
pub use merge::fill_defaults;
pub use paths::{BASE_DIR_ENV, ConfigPaths, base_dir};
pub use reader::Reader;
pub use schema::{Schema, SchemaType};
pub use value::Document;
