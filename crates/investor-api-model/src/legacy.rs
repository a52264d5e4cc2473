// crates/investor-api-model/src/legacy.rs
// ============================================================================
// Module: Legacy Model Import
// Description: Parser for the flag-dictionary model format of older suites.
// Purpose: Convert `key_only` / `is_collection` dictionaries into schema nodes.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! Older response models were written as nested dictionaries:
//!
//! ```json
//! {
//!   "key_only": false,
//!   "is_collection": true,
//!   "accept_empty": false,
//!   "model": {
//!     "symbol": {"key_only": false, "is_collection": false, "value": ["ANZ", "BBB"]},
//!     "ask": {"key_only": true, "is_collection": false}
//!   }
//! }
//! ```
//!
//! A list under `value` is a whitelist. A non-collection, non-key-only node
//! with a `model` map and no `value` is an object node.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

use crate::model::ExpectedValue;
use crate::model::FieldModel;
use crate::model::SchemaNode;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while importing a legacy model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A node or field map was not a JSON object.
    #[error("legacy model at `{pointer}` must be an object")]
    NotAnObject {
        /// Location of the offending node.
        pointer: String,
    },
    /// A flag was present but not a boolean.
    #[error("legacy model at `{pointer}` has non-boolean flag `{flag}`")]
    InvalidFlag {
        /// Location of the offending node.
        pointer: String,
        /// Flag name.
        flag: &'static str,
    },
    /// A collection node had no `model` map.
    #[error("legacy collection at `{pointer}` has no `model`")]
    MissingModel {
        /// Location of the offending node.
        pointer: String,
    },
    /// A checked node had neither `value` nor `model`.
    #[error("legacy node at `{pointer}` has neither `value` nor `model`")]
    MissingValue {
        /// Location of the offending node.
        pointer: String,
    },
}

// ============================================================================
// SECTION: Import
// ============================================================================

impl SchemaNode {
    /// Parses one legacy node.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] when the dictionary is structurally invalid.
    pub fn from_legacy(raw: &Value) -> Result<Self, ModelError> {
        parse_node(raw, "")
    }
}

impl FieldModel {
    /// Parses a legacy field map (`name -> legacy node`).
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] when the map or any node is invalid.
    pub fn from_legacy(raw: &Value) -> Result<Self, ModelError> {
        parse_fields(raw, "")
    }
}

/// Parses one legacy node found at `pointer`.
fn parse_node(raw: &Value, pointer: &str) -> Result<SchemaNode, ModelError> {
    let node = raw.as_object().ok_or_else(|| ModelError::NotAnObject {
        pointer: pointer.to_string(),
    })?;
    if read_flag(node, "key_only", pointer)? {
        return Ok(SchemaNode::KeyOnly);
    }
    if read_flag(node, "is_collection", pointer)? {
        let model = node.get("model").ok_or_else(|| ModelError::MissingModel {
            pointer: pointer.to_string(),
        })?;
        let fields = parse_fields(model, &format!("{pointer}/model"))?;
        let accept_empty = read_flag(node, "accept_empty", pointer)?;
        return Ok(SchemaNode::Collection {
            fields,
            accept_empty,
        });
    }
    if let Some(value) = node.get("value") {
        let expected = match value {
            Value::Array(accepted) => ExpectedValue::AnyOf(accepted.clone()),
            other => ExpectedValue::One(other.clone()),
        };
        return Ok(SchemaNode::Checked {
            expected,
        });
    }
    match node.get("model") {
        Some(model) => Ok(SchemaNode::Object {
            fields: parse_fields(model, &format!("{pointer}/model"))?,
        }),
        None => Err(ModelError::MissingValue {
            pointer: pointer.to_string(),
        }),
    }
}

/// Parses a legacy field dictionary found at `pointer`.
fn parse_fields(raw: &Value, pointer: &str) -> Result<FieldModel, ModelError> {
    let map = raw.as_object().ok_or_else(|| ModelError::NotAnObject {
        pointer: pointer.to_string(),
    })?;
    map.iter()
        .map(|(name, child)| {
            let child_pointer = format!("{pointer}/{}", escape_token(name));
            parse_node(child, &child_pointer).map(|node| (name.clone(), node))
        })
        .collect()
}

/// Reads an optional boolean flag; absent means false.
fn read_flag(
    node: &Map<String, Value>,
    flag: &'static str,
    pointer: &str,
) -> Result<bool, ModelError> {
    match node.get(flag) {
        None => Ok(false),
        Some(Value::Bool(value)) => Ok(*value),
        Some(_) => Err(ModelError::InvalidFlag {
            pointer: pointer.to_string(),
            flag,
        }),
    }
}

/// Escapes a JSON pointer reference token.
pub(crate) fn escape_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}
