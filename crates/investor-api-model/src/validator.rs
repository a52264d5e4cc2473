// crates/investor-api-model/src/validator.rs
// ============================================================================
// Module: Response Validator
// Description: Recursive comparison of HTTP outcomes against schema models.
// Purpose: Produce status/body verdicts plus ordered mismatch diagnostics.
// Dependencies: serde_json, tracing
// ============================================================================

//! ## Overview
//! [`ResponseValidator`] walks a [`SchemaNode`] alongside an actual JSON body
//! and appends a [`Diagnostic`] for every difference it finds. It never fails:
//! each call returns a definite boolean and the diagnostics explain why.
//!
//! Invariants:
//! - Diagnostics are append-only and owned by one validator instance.
//! - The boolean returned by [`ResponseValidator::validate_status`] and
//!   [`ResponseValidator::validate_body`] reflects only diagnostics appended
//!   during that call.
//! - Identical inputs always produce identical verdicts and diagnostics.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Map;
use serde_json::Value;
use tracing::debug;

use crate::diagnostic::Diagnostic;
use crate::diagnostic::Mismatch;
use crate::diagnostic::Shape;
use crate::legacy::escape_token;
use crate::model::FieldModel;
use crate::model::SchemaNode;
use crate::outcome::HttpOutcome;

// ============================================================================
// SECTION: Validator
// ============================================================================

/// Accumulating validator for one HTTP outcome.
#[derive(Debug, Clone, Default)]
pub struct ResponseValidator {
    /// Mismatches found so far, in discovery order.
    diagnostics: Vec<Diagnostic>,
    /// Reference tokens of the position currently being checked.
    path: Vec<String>,
}

impl ResponseValidator {
    /// Creates a validator with an empty diagnostics list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compares status codes; returns the verdict and the actual status.
    pub fn validate_status(&mut self, actual: u16, expected: u16) -> (bool, u16) {
        if actual == expected {
            return (true, actual);
        }
        self.diagnostics.push(Diagnostic::new(
            String::new(),
            Mismatch::Status {
                expected,
                actual,
            },
        ));
        (false, actual)
    }

    /// Compares a body against a model. `None` on either side means "no
    /// body" / "no body expected".
    pub fn validate_body(&mut self, actual: Option<&Value>, model: Option<&SchemaNode>) -> bool {
        let before = self.diagnostics.len();
        self.path.clear();
        match (model, actual) {
            (None, None) => {}
            (None, Some(body)) => self.push(Mismatch::UnexpectedBody {
                actual: body.clone(),
            }),
            (Some(_), None) => self.push(Mismatch::MissingBody),
            (Some(node), Some(body)) => self.check_node(node, body),
        }
        let appended = self.diagnostics.len() - before;
        debug!(appended, "validated response body");
        appended == 0
    }

    /// Returns every diagnostic recorded by this validator.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Consumes the validator and returns its diagnostics.
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Dispatches on the node kind.
    fn check_node(&mut self, node: &SchemaNode, actual: &Value) {
        match node {
            SchemaNode::KeyOnly => {}
            SchemaNode::Checked {
                expected,
            } => {
                if !expected.matches(actual) {
                    self.push(Mismatch::Value {
                        expected: expected.clone(),
                        actual: actual.clone(),
                    });
                }
            }
            SchemaNode::Collection {
                fields,
                accept_empty,
            } => self.check_collection(fields, *accept_empty, actual),
            SchemaNode::Object {
                fields,
            } => match actual.as_object() {
                Some(object) => self.check_fields(fields, object),
                None => self.push(Mismatch::Shape {
                    expected: Shape::Object,
                    actual: actual.clone(),
                }),
            },
        }
    }

    /// Applies a field model to every element of an array.
    fn check_collection(&mut self, fields: &FieldModel, accept_empty: bool, actual: &Value) {
        let Some(items) = actual.as_array() else {
            self.push(Mismatch::Shape {
                expected: Shape::Collection,
                actual: actual.clone(),
            });
            return;
        };
        if items.is_empty() {
            if !accept_empty {
                self.push(Mismatch::EmptyCollection);
            }
            return;
        }
        for (index, item) in items.iter().enumerate() {
            self.path.push(index.to_string());
            match item.as_object() {
                Some(object) => self.check_fields(fields, object),
                None => self.push(Mismatch::NonObjectItem {
                    actual: item.clone(),
                }),
            }
            self.path.pop();
        }
    }

    /// Checks presence of every declared field, then recurses into it.
    fn check_fields(&mut self, fields: &FieldModel, object: &Map<String, Value>) {
        for (name, node) in fields {
            self.path.push(escape_token(name));
            match object.get(name) {
                Some(value) => self.check_node(node, value),
                None => self.push(Mismatch::MissingKey {
                    key: name.clone(),
                }),
            }
            self.path.pop();
        }
    }

    /// Records a mismatch at the current position.
    fn push(&mut self, mismatch: Mismatch) {
        let pointer = self.path.iter().fold(String::new(), |mut pointer, token| {
            pointer.push('/');
            pointer.push_str(token);
            pointer
        });
        self.diagnostics.push(Diagnostic::new(pointer, mismatch));
    }
}

// ============================================================================
// SECTION: One-Shot Validation
// ============================================================================

/// Expected status and body model for one call.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseExpectation {
    /// Expected HTTP status.
    pub status: u16,
    /// Expected body model; `None` expects no body.
    pub model: Option<SchemaNode>,
}

impl ResponseExpectation {
    /// Expects `status` and no body.
    #[must_use]
    pub const fn no_body(status: u16) -> Self {
        Self {
            status,
            model: None,
        }
    }

    /// Expects `status` and a body matching `model`.
    #[must_use]
    pub const fn with_model(status: u16, model: SchemaNode) -> Self {
        Self {
            status,
            model: Some(model),
        }
    }
}

/// Verdicts and diagnostics for one validated outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOutcome {
    /// Whether the status code matched.
    pub status_matches: bool,
    /// Whether the body matched its model.
    pub body_matches: bool,
    /// Status code that was received.
    pub actual_status: u16,
    /// Every mismatch, status first.
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationOutcome {
    /// Returns true when both status and body matched.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status_matches && self.body_matches
    }

    /// Returns the diagnostic messages in order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.iter().map(ToString::to_string).collect()
    }

    /// Newline-joined located messages, suitable as an assertion message.
    #[must_use]
    pub fn failure_message(&self) -> String {
        self.diagnostics.iter().map(Diagnostic::located_message).collect::<Vec<_>>().join("\n")
    }
}

/// Validates status and body of `outcome` on a fresh validator.
#[must_use]
pub fn validate_response(
    outcome: &HttpOutcome,
    expectation: &ResponseExpectation,
) -> ValidationOutcome {
    let mut validator = ResponseValidator::new();
    let (status_matches, actual_status) =
        validator.validate_status(outcome.status, expectation.status);
    let body_matches = validator.validate_body(outcome.body(), expectation.model.as_ref());
    ValidationOutcome {
        status_matches,
        body_matches,
        actual_status,
        diagnostics: validator.into_diagnostics(),
    }
}
