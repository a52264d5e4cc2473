// crates/investor-api-client/src/token.rs
// ============================================================================
// Module: Bearer Token
// Description: Access token returned by `POST /token`.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Tokens are passed to every authenticated call explicitly. A call made
//! without a token still sends an empty bearer header so negative tests hit
//! the server's authorization check rather than a missing-header path.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Opaque bearer token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Wraps a raw token string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw token string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value for an optional token.
    #[must_use]
    pub fn header_value(token: Option<&Self>) -> String {
        format!("Bearer {}", token.map_or("", Self::as_str))
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Token").field(&"<redacted>").finish()
    }
}

impl From<String> for Token {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl From<&str> for Token {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}
