// crates/investor-api-client/src/lib.rs
// ============================================================================
// Module: Investor API Client Library
// Description: Typed blocking client for the Investor REST API.
// Purpose: Expose endpoints, payloads, tokens, and response accessors.
// Dependencies: crate::{client, config, endpoint, error, payload, response, token}
// ============================================================================

//! ## Overview
//! The client turns each Investor API operation into one blocking HTTP call
//! and returns an [`ApiResponse`] that can be validated with
//! [`investor_api_model::validate_response`].
//!
//! ```no_run
//! use investor_api_client::ApiClient;
//! use investor_api_client::ClientConfig;
//! use investor_api_client::Credentials;
//!
//! # fn main() -> Result<(), investor_api_client::ClientError> {
//! let client = ApiClient::new(ClientConfig::default())?;
//! let response = client.authenticate(&Credentials::new("user@example.com", "secret"))?;
//! let token = response.access_token();
//! let details = client.view_details(token.as_ref())?;
//! assert_eq!(details.status(), 200);
//! # Ok(())
//! # }
//! ```

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod payload;
pub mod response;
pub mod token;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use client::ApiClient;
pub use config::ClientConfig;
pub use config::DEFAULT_BASE_URL;
pub use endpoint::Endpoint;
pub use error::ClientError;
pub use payload::Credentials;
pub use payload::DividendsQuery;
pub use payload::OrderRequest;
pub use payload::OrderSide;
pub use payload::PageQuery;
pub use payload::PricesQuery;
pub use payload::QuotesQuery;
pub use payload::Registration;
pub use payload::TransactionsQuery;
pub use payload::UserEdit;
pub use payload::WatchlistShare;
pub use response::ApiResponse;
pub use response::PageInfo;
pub use token::Token;
