// crates/investor-api-model/src/lib.rs
// ============================================================================
// Module: Investor API Model Library
// Description: Public API surface for response models and validation.
// Purpose: Expose schema models, HTTP outcomes, and the response validator.
// Dependencies: crate::{model, legacy, diagnostic, outcome, validator}
// ============================================================================

//! ## Overview
//! Investor API model describes expected JSON response shapes as data and
//! diffs them against actual HTTP outcomes. It performs no I/O: callers fetch
//! a response, normalize it into an [`HttpOutcome`], and pass it with a
//! [`ResponseExpectation`] to [`validate_response`].
//!
//! ```
//! use investor_api_model::HttpOutcome;
//! use investor_api_model::ResponseExpectation;
//! use investor_api_model::SchemaNode;
//! use investor_api_model::validate_response;
//! use serde_json::json;
//!
//! let model = SchemaNode::collection([
//!     ("symbol", SchemaNode::any_of(["ANZ", "BBB"])),
//!     ("ask", SchemaNode::key_only()),
//! ]);
//! let outcome = HttpOutcome::new(200, Some(json!([{"symbol": "ANZ", "ask": 29.62}])));
//! let result = validate_response(&outcome, &ResponseExpectation::with_model(200, model));
//! assert!(result.is_success(), "{}", result.failure_message());
//! ```

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod diagnostic;
pub mod legacy;
pub mod model;
pub mod outcome;
pub mod validator;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use diagnostic::Diagnostic;
pub use diagnostic::Mismatch;
pub use diagnostic::Shape;
pub use legacy::ModelError;
pub use model::ExpectedValue;
pub use model::FieldModel;
pub use model::RenderedValue;
pub use model::SchemaNode;
pub use outcome::HttpOutcome;
pub use validator::ResponseExpectation;
pub use validator::ResponseValidator;
pub use validator::ValidationOutcome;
pub use validator::validate_response;
