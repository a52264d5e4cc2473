// crates/investor-api-client/src/response.rs
// ============================================================================
// Module: API Responses
// Description: Accessors over the HTTP outcome of one API call.
// Purpose: Extract tokens, identifiers, items, and errors for test flows.
// Dependencies: investor-api-model, serde_json
// ============================================================================

//! ## Overview
//! [`ApiResponse`] wraps an [`HttpOutcome`]. Accessors return `None` (or an
//! empty slice) when the body lacks the requested field, so test flows can
//! chain calls and let the validator report what was missing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use investor_api_model::HttpOutcome;
use investor_api_model::ResponseExpectation;
use investor_api_model::ValidationOutcome;
use investor_api_model::validate_response;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::token::Token;

// ============================================================================
// SECTION: Paging
// ============================================================================

/// Paging envelope of list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Current page number.
    pub page_number: i64,
    /// Rows per page.
    pub page_size: i64,
    /// Number of pages.
    pub total_page_count: i64,
    /// Number of rows.
    pub total_row_count: i64,
}

// ============================================================================
// SECTION: Response
// ============================================================================

/// Outcome of one Investor API call.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// Status and decoded body.
    outcome: HttpOutcome,
}

impl ApiResponse {
    /// Wraps an outcome.
    #[must_use]
    pub const fn new(outcome: HttpOutcome) -> Self {
        Self {
            outcome,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.outcome.status
    }

    /// Decoded body, if any.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.outcome.body()
    }

    /// Borrowed outcome.
    #[must_use]
    pub const fn outcome(&self) -> &HttpOutcome {
        &self.outcome
    }

    /// Owned outcome.
    #[must_use]
    pub fn into_outcome(self) -> HttpOutcome {
        self.outcome
    }

    /// Validates this response against an expectation.
    #[must_use]
    pub fn validate(&self, expectation: &ResponseExpectation) -> ValidationOutcome {
        validate_response(&self.outcome, expectation)
    }

    /// `accessToken` of an authentication response.
    #[must_use]
    pub fn access_token(&self) -> Option<Token> {
        self.outcome.str_at("/accessToken").map(Token::new)
    }

    /// `id` of a user details body.
    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.outcome.str_at("/id")
    }

    /// Identifier of the user's first account.
    #[must_use]
    pub fn main_account_id(&self) -> Option<&str> {
        self.outcome.str_at("/accounts/0/id")
    }

    /// Identifier of the user's first watchlist.
    #[must_use]
    pub fn default_watchlist_id(&self) -> Option<&str> {
        self.outcome.str_at("/watchlists/0/id")
    }

    /// Array at `pointer`, or an empty slice.
    #[must_use]
    pub fn array_at(&self, pointer: &str) -> &[Value] {
        self.outcome.pointer(pointer).and_then(Value::as_array).map_or(&[], Vec::as_slice)
    }

    /// List items: the `items` array of a paged body, or a bare array body.
    #[must_use]
    pub fn items(&self) -> &[Value] {
        match self.body() {
            Some(Value::Array(items)) => items,
            _ => self.array_at("/items"),
        }
    }

    /// First item whose `field` equals `value` (e.g. a quote by symbol).
    #[must_use]
    pub fn find_item(&self, field: &str, value: &str) -> Option<&Value> {
        self.items()
            .iter()
            .find(|item| item.get(field).and_then(Value::as_str) == Some(value))
    }

    /// Paging envelope of a list body.
    #[must_use]
    pub fn page(&self) -> Option<PageInfo> {
        self.body().and_then(|body| PageInfo::deserialize(body).ok())
    }

    /// Error `message` and `validationErrors` entries.
    #[must_use]
    pub fn error_messages(&self) -> Vec<String> {
        self.outcome.error_messages()
    }
}

impl From<HttpOutcome> for ApiResponse {
    fn from(outcome: HttpOutcome) -> Self {
        Self::new(outcome)
    }
}
