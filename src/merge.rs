//! Default filling for loaded documents.
//!
//! Top-level keys only: a key present in the primary document keeps its
//! value wholesale, nested objects included. There is no recursive per-field
//! merge.

use crate::value::Document;

/// Fill keys absent from `primary` with values from `defaults`.
///
/// Keys present in `primary` are never overwritten, whatever `defaults`
/// says. Consumes both documents and returns the merged one.
///
/// # Example
/// ```
/// use serde_json::json;
/// use confspec::fill_defaults;
///
/// let primary = json!({"debug": true}).as_object().unwrap().clone();
/// let defaults = json!({"debug": false, "logger": "monolog"})
///     .as_object()
///     .unwrap()
///     .clone();
/// let merged = fill_defaults(primary, defaults);
/// assert_eq!(merged.get("debug"), Some(&json!(true)));
/// assert_eq!(merged.get("logger"), Some(&json!("monolog")));
/// ```
pub fn fill_defaults(primary: Document, defaults: Document) -> Document {
    let mut merged = primary;
    for (key, value) in defaults {
        merged.entry(key).or_insert(value);
    }
    merged
}
