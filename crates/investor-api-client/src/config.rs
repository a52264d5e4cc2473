// crates/investor-api-client/src/config.rs
// ============================================================================
// Module: Client Configuration
// Description: Base URL, timeout, and TLS policy for the API client.
// Purpose: Validate connection settings before any request is sent.
// Dependencies: serde, url
// ============================================================================

//! ## Overview
//! [`ClientConfig`] is validated once when an [`crate::ApiClient`] is built.
//! Invalid settings fail closed with [`ClientError::InvalidConfig`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;
use url::Url;

use crate::error::ClientError;

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Public Investor API base URL.
pub const DEFAULT_BASE_URL: &str = "https://investor-api.herokuapp.com/api/1.0";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default user agent for outbound requests.
pub const DEFAULT_USER_AGENT: &str = "investor-api-tests/0.1";

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Connection settings for [`crate::ApiClient`].
///
/// # Invariants
/// - `base_url` is an absolute `http` or `https` URL without credentials.
/// - `timeout` is non-zero and applies to the full request lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root, e.g. `https://host/api/1.0`.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Skip TLS certificate verification (test environments only).
    pub accept_invalid_certs: bool,
    /// User agent header value.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Default settings pointed at `base_url`.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Validates the settings and returns the parsed base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfig`] when the URL does not parse, uses
    /// another scheme, embeds credentials, or the timeout is zero.
    pub fn validate(&self) -> Result<Url, ClientError> {
        let url = Url::parse(&self.base_url).map_err(|err| {
            ClientError::InvalidConfig(format!("base_url `{}` is invalid: {err}", self.base_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidConfig(format!(
                "base_url scheme `{}` is not http or https",
                url.scheme()
            )));
        }
        if url.cannot_be_a_base() {
            return Err(ClientError::InvalidConfig("base_url cannot be a base".to_string()));
        }
        if !url.username().is_empty() || url.password().is_some() {
            return Err(ClientError::InvalidConfig(
                "base_url must not embed credentials".to_string(),
            ));
        }
        if self.timeout.is_zero() {
            return Err(ClientError::InvalidConfig("timeout must be greater than zero".to_string()));
        }
        Ok(url)
    }
}
