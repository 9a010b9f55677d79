//! Dynamic document representation.
//!
//! Configuration content is arbitrarily nested YAML, so documents are kept as
//! untyped `serde_json` values: a [`Document`] is the top-level mapping and
//! every nested value is a [`serde_json::Value`].

use serde_json::Value;

/// An in-memory configuration document: a top-level mapping from string keys
/// to arbitrarily nested values.
pub type Document = serde_json::Map<String, Value>;

/// Convert a freshly parsed YAML value into a [`Document`].
///
/// An empty YAML file parses as null and counts as an empty mapping. Any
/// other non-mapping top level is rejected with `None`.
pub(crate) fn into_document(value: Value) -> Option<Document> {
    match value {
        Value::Null => Some(Document::new()),
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Render a value for an error message.
///
/// Strings are shown bare ('abc', not '"abc"'); everything else uses JSON
/// notation.
pub(crate) fn value_repr(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
