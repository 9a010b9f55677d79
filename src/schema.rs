//! Specs (schema) model and fail-fast validation.
//!
//! A specs document is a mapping with a `type` declaration, a `properties`
//! mapping from key name to sub-schema, and an optional `required` list.
//! Object-typed properties may carry their own `properties`/`required` for
//! recursive validation. Validation stops at the first violation.

use crate::error::{ConfigError, Result};
use crate::value::{Document, value_repr};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Expected value type for one schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
    Null,
}

impl SchemaType {
    /// Whether `value` conforms to this type. `integer` accepts only
    /// integral numbers; `number` accepts any numeric value.
    fn matches(self, value: &Value) -> bool {
        match self {
            SchemaType::Boolean => value.is_boolean(),
            SchemaType::Integer => value.is_i64() || value.is_u64(),
            SchemaType::Number => value.is_number(),
            SchemaType::String => value.is_string(),
            SchemaType::Array => value.is_array(),
            SchemaType::Object => value.is_object(),
            SchemaType::Null => value.is_null(),
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaType::Boolean => write!(f, "boolean"),
            SchemaType::Integer => write!(f, "integer"),
            SchemaType::Number => write!(f, "number"),
            SchemaType::String => write!(f, "string"),
            SchemaType::Array => write!(f, "array"),
            SchemaType::Object => write!(f, "object"),
            SchemaType::Null => write!(f, "null"),
        }
    }
}

/// One schema node: a declared type, plus sub-schemas and required keys for
/// object nodes.
#[derive(Debug, Clone, Deserialize)]
pub struct Schema {
    #[serde(rename = "type")]
    pub ty: SchemaType,
    #[serde(default)]
    pub properties: BTreeMap<String, Schema>,
    #[serde(default)]
    pub required: Vec<String>,
}

impl Schema {
    /// Build a schema from a loaded specs document.
    pub fn from_document(document: Document) -> Result<Self> {
        serde_json::from_value(Value::Object(document))
            .map_err(|source| ConfigError::InvalidSchema { source })
    }

    /// Validate a document against this schema, stopping at the first
    /// violation.
    pub fn validate(&self, document: &Document) -> Result<()> {
        self.validate_object(document)?;
        debug!(properties = self.properties.len(), "document conforms to specs");
        Ok(())
    }

    /// Required keys are checked before property types.
    fn validate_object(&self, map: &Document) -> Result<()> {
        for key in &self.required {
            if !map.contains_key(key) {
                return Err(ConfigError::MissingKey { key: key.clone() });
            }
        }

        for (name, sub_schema) in &self.properties {
            if let Some(value) = map.get(name) {
                sub_schema.check(value)?;
            }
        }

        Ok(())
    }

    fn check(&self, value: &Value) -> Result<()> {
        if !self.ty.matches(value) {
            return Err(ConfigError::TypeMismatch {
                value: value_repr(value),
                expected: self.ty,
            });
        }

        if let Value::Object(map) = value {
            self.validate_object(map)?;
        }

        Ok(())
    }
}
