// crates/investor-api-model/src/model.rs
// ============================================================================
// Module: Response Schema Model
// Description: Declarative description of expected JSON response shapes.
// Purpose: Give tests immutable, exhaustively matched schema literals.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A [`SchemaNode`] describes what a JSON value at one position should look
//! like: a checked scalar, a key-only scalar, an object with declared fields,
//! or a collection whose items all conform to a field model. "No body
//! expected" is expressed by the caller as `Option::<SchemaNode>::None`.
//!
//! Models are plain data. They are built once per test case, never mutated
//! afterwards, and are not validated themselves.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Expected Values
// ============================================================================

/// Value accepted by a checked scalar node.
///
/// # Invariants
/// - `One` matches by equality; numbers compare by numeric value, also
///   inside arrays and objects.
/// - `AnyOf` matches when the actual value equals at least one member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedValue {
    /// Exactly one acceptable literal.
    One(Value),
    /// Whitelist of acceptable literals (match-any).
    AnyOf(Vec<Value>),
}

impl ExpectedValue {
    /// Returns true when `actual` satisfies this expectation.
    #[must_use]
    pub fn matches(&self, actual: &Value) -> bool {
        match self {
            Self::One(expected) => json_eq(expected, actual),
            Self::AnyOf(accepted) => accepted.iter().any(|expected| json_eq(expected, actual)),
        }
    }
}

impl fmt::Display for ExpectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(value) => RenderedValue(value).fmt(f),
            Self::AnyOf(values) => {
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        f.write_str(" | ")?;
                    }
                    RenderedValue(value).fmt(f)?;
                }
                Ok(())
            }
        }
    }
}

/// Display adapter used in diagnostics: strings print bare, everything else
/// prints as compact JSON.
#[derive(Debug, Clone, Copy)]
pub struct RenderedValue<'a>(pub &'a Value);

impl fmt::Display for RenderedValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(text) => f.write_str(text),
            other => write!(f, "{other}"),
        }
    }
}

/// Compares JSON values, treating `5` and `5.0` as equal at any depth.
fn json_eq(expected: &Value, actual: &Value) -> bool {
    match (expected, actual) {
        (Value::Number(left), Value::Number(right)) => {
            if let (Some(a), Some(b)) = (left.as_i64(), right.as_i64()) {
                return a == b;
            }
            if let (Some(a), Some(b)) = (left.as_u64(), right.as_u64()) {
                return a == b;
            }
            match (left.as_f64(), right.as_f64()) {
                #[allow(clippy::float_cmp, reason = "Exact literal comparison is intended.")]
                (Some(a), Some(b)) => a == b,
                _ => false,
            }
        }
        (Value::Array(left), Value::Array(right)) => {
            left.len() == right.len() && left.iter().zip(right).all(|(a, b)| json_eq(a, b))
        }
        (Value::Object(left), Value::Object(right)) => {
            left.len() == right.len()
                && left.iter().all(|(key, a)| right.get(key).is_some_and(|b| json_eq(a, b)))
        }
        _ => expected == actual,
    }
}

// ============================================================================
// SECTION: Schema Nodes
// ============================================================================

/// Expected shape of one JSON position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaNode {
    /// Scalar whose value is compared against `expected`.
    Checked {
        /// Accepted value or whitelist.
        expected: ExpectedValue,
    },
    /// Key must be present; its value is never compared.
    KeyOnly,
    /// Array whose every element is an object matching `fields`.
    Collection {
        /// Field model applied to each element.
        fields: FieldModel,
        /// Whether an empty array is acceptable.
        #[serde(default)]
        accept_empty: bool,
    },
    /// Object matching `fields`.
    Object {
        /// Declared fields of the object.
        fields: FieldModel,
    },
}

impl SchemaNode {
    /// Checked scalar with a single accepted value.
    pub fn value(expected: impl Into<Value>) -> Self {
        Self::Checked {
            expected: ExpectedValue::One(expected.into()),
        }
    }

    /// Checked scalar accepting any of the provided values.
    pub fn any_of<I, V>(accepted: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::Checked {
            expected: ExpectedValue::AnyOf(accepted.into_iter().map(Into::into).collect()),
        }
    }

    /// Key-only scalar.
    #[must_use]
    pub const fn key_only() -> Self {
        Self::KeyOnly
    }

    /// Collection that must contain at least one item.
    pub fn collection(fields: impl Into<FieldModel>) -> Self {
        Self::Collection {
            fields: fields.into(),
            accept_empty: false,
        }
    }

    /// Object with the provided fields.
    pub fn object(fields: impl Into<FieldModel>) -> Self {
        Self::Object {
            fields: fields.into(),
        }
    }

    /// Marks a collection node as accepting empty arrays. Other nodes are
    /// returned unchanged.
    #[must_use]
    pub fn accepting_empty(self) -> Self {
        match self {
            Self::Collection {
                fields, ..
            } => Self::Collection {
                fields,
                accept_empty: true,
            },
            other => other,
        }
    }

    /// Returns the nested field model for collection and object nodes.
    #[must_use]
    pub const fn fields(&self) -> Option<&FieldModel> {
        match self {
            Self::Collection {
                fields, ..
            }
            | Self::Object {
                fields,
            } => Some(fields),
            Self::Checked {
                ..
            }
            | Self::KeyOnly => None,
        }
    }
}

// ============================================================================
// SECTION: Field Models
// ============================================================================

/// Mapping of field name to schema node.
///
/// # Invariants
/// - Iteration order is lexicographic by field name, which fixes diagnostic
///   order for a given model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldModel {
    /// Declared fields.
    fields: BTreeMap<String, SchemaNode>,
}

impl FieldModel {
    /// Creates an empty field model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a field declaration.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, node: SchemaNode) -> Self {
        self.fields.insert(name.into(), node);
        self
    }

    /// Returns the node declared for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.fields.get(name)
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true when no fields are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates declared fields in name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, SchemaNode> {
        self.fields.iter()
    }
}

impl<K: Into<String>> FromIterator<(K, SchemaNode)> for FieldModel {
    fn from_iter<T: IntoIterator<Item = (K, SchemaNode)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().map(|(name, node)| (name.into(), node)).collect(),
        }
    }
}

impl<K: Into<String>, const N: usize> From<[(K, SchemaNode); N]> for FieldModel {
    fn from(entries: [(K, SchemaNode); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a FieldModel {
    type Item = (&'a String, &'a SchemaNode);
    type IntoIter = btree_map::Iter<'a, String, SchemaNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
