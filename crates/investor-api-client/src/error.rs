// crates/investor-api-client/src/error.rs
// ============================================================================
// Module: Client Errors
// Description: Failures that prevent an HTTP outcome from being produced.
// Dependencies: reqwest, thiserror
// ============================================================================

//! ## Overview
//! Error statuses returned by the API are outcomes, not errors. Only problems
//! that stop a request from completing surface as [`ClientError`].

use thiserror::Error;

/// Client construction and transport failures.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Settings failed validation.
    #[error("invalid client config: {0}")]
    InvalidConfig(String),
    /// The endpoint URL could not be built.
    #[error("invalid endpoint url for {endpoint}: {message}")]
    InvalidUrl {
        /// Endpoint name.
        endpoint: &'static str,
        /// Reason the URL was rejected.
        message: String,
    },
    /// The HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    Build(#[source] reqwest::Error),
    /// The request could not be sent or its body could not be read.
    #[error("{endpoint} request failed: {source}")]
    Transport {
        /// Endpoint name.
        endpoint: &'static str,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
}
