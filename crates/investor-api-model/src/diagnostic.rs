// crates/investor-api-model/src/diagnostic.rs
// ============================================================================
// Module: Validation Diagnostics
// Description: Typed mismatch taxonomy with human-readable rendering.
// Purpose: Explain every difference between a response and its model.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! A [`Diagnostic`] pairs a [`Mismatch`] with the JSON pointer where it was
//! found. Mismatches are data, not errors: the validator always completes and
//! the calling test decides whether a mismatch fails it. The `Display` text of
//! a diagnostic is the mismatch message alone, so it can be used verbatim as
//! an assertion message.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::model::ExpectedValue;
use crate::model::RenderedValue;

// ============================================================================
// SECTION: Mismatch Taxonomy
// ============================================================================

/// JSON container kind expected by a collection or object node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    /// JSON array.
    Collection,
    /// JSON object.
    Object,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collection => f.write_str("collection"),
            Self::Object => f.write_str("object"),
        }
    }
}

/// One difference between an HTTP outcome and its expectation.
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Mismatch {
    /// Status code differs from the expected one.
    #[error("Expected HTTP {expected}; got HTTP {actual}")]
    Status {
        /// Expected status code.
        expected: u16,
        /// Actual status code.
        actual: u16,
    },
    /// A body was returned where none was expected.
    #[error("Expected no response body; got: {}", RenderedValue(.actual))]
    UnexpectedBody {
        /// Body that was returned.
        actual: Value,
    },
    /// A body was expected but none (or undecodable JSON) was returned.
    #[error("No body in response")]
    MissingBody,
    /// A declared field is absent.
    #[error("Missing key: [{key}]")]
    MissingKey {
        /// Field name.
        key: String,
    },
    /// A checked field holds a value outside its expectation.
    #[error("Expected value: [{expected}]; Received value: [{}] instead", RenderedValue(.actual))]
    Value {
        /// Accepted value or whitelist.
        expected: ExpectedValue,
        /// Value that was received.
        actual: Value,
    },
    /// A non-empty collection was required but the array was empty.
    #[error("Expected item in collection but got none")]
    EmptyCollection,
    /// The value is not the JSON container kind the node describes.
    #[error("Expected {expected}; got: {}", RenderedValue(.actual))]
    Shape {
        /// Container kind the node describes.
        expected: Shape,
        /// Value that was received.
        actual: Value,
    },
    /// A collection element is not an object and cannot carry fields.
    #[error("Expected object in collection; got: {}", RenderedValue(.actual))]
    NonObjectItem {
        /// Element that was received.
        actual: Value,
    },
}

// ============================================================================
// SECTION: Diagnostics
// ============================================================================

/// A located mismatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    /// JSON pointer of the mismatch (empty for the whole response).
    pub pointer: String,
    /// What differed.
    pub mismatch: Mismatch,
}

impl Diagnostic {
    /// Creates a diagnostic at the given pointer.
    #[must_use]
    pub const fn new(pointer: String, mismatch: Mismatch) -> Self {
        Self {
            pointer,
            mismatch,
        }
    }

    /// Returns the message, including the location when it is not the root.
    #[must_use]
    pub fn located_message(&self) -> String {
        if self.pointer.is_empty() {
            self.mismatch.to_string()
        } else {
            format!("{} (at {})", self.mismatch, self.pointer)
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.mismatch.fmt(f)
    }
}
