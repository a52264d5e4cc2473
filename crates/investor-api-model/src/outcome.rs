// crates/investor-api-model/src/outcome.rs
// ============================================================================
// Module: HTTP Outcome
// Description: Status code plus optional decoded JSON body of one call.
// Purpose: Normalize raw responses before validation.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! [`HttpOutcome`] is what the validator consumes. A body that is empty, is
//! not valid JSON, or decodes to a bare `null` is stored as `None` ("no
//! body"), so the validator never sees a decode failure.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Result of one HTTP call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpOutcome {
    /// Numeric HTTP status.
    pub status: u16,
    /// Decoded JSON body, or `None` when absent or undecodable.
    pub body: Option<Value>,
}

impl HttpOutcome {
    /// Builds an outcome from an already decoded body.
    #[must_use]
    pub fn new(status: u16, body: Option<Value>) -> Self {
        Self {
            status,
            body: body.filter(|value| !value.is_null()),
        }
    }

    /// Builds an outcome from raw response bytes.
    #[must_use]
    pub fn from_bytes(status: u16, bytes: &[u8]) -> Self {
        let body = if bytes.iter().all(u8::is_ascii_whitespace) {
            None
        } else {
            serde_json::from_slice::<Value>(bytes).ok()
        };
        Self::new(status, body)
    }

    /// Returns the body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Looks up a value by JSON pointer.
    #[must_use]
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        self.body.as_ref().and_then(|body| body.pointer(pointer))
    }

    /// Looks up a string by JSON pointer.
    #[must_use]
    pub fn str_at(&self, pointer: &str) -> Option<&str> {
        self.pointer(pointer).and_then(Value::as_str)
    }

    /// Looks up an integer by JSON pointer.
    #[must_use]
    pub fn i64_at(&self, pointer: &str) -> Option<i64> {
        self.pointer(pointer).and_then(Value::as_i64)
    }

    /// Returns the top-level `message` field of an error body.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.str_at("/message")
    }

    /// Returns the entries of a top-level `validationErrors` array. Entries
    /// are either plain strings or objects carrying a `message`.
    #[must_use]
    pub fn validation_errors(&self) -> Vec<&str> {
        self.pointer("/validationErrors")
            .and_then(Value::as_array)
            .map(|errors| {
                errors
                    .iter()
                    .filter_map(|error| {
                        error.as_str().or_else(|| error.get("message").and_then(Value::as_str))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the error `message` followed by every validation error.
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.message()
            .into_iter()
            .chain(self.validation_errors())
            .map(str::to_string)
            .collect()
    }
}
