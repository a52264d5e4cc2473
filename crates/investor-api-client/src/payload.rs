// crates/investor-api-client/src/payload.rs
// ============================================================================
// Module: Request Payloads
// Description: JSON bodies and query parameters sent to the Investor API.
// Purpose: Shape request data with the API's camelCase field names.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Bodies serialize with camelCase names. Optional query parameters are
//! omitted when unset so the server applies its own defaults.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: User Payloads
// ============================================================================

/// Body of `POST /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// Display name.
    pub display_name: String,
    /// Login email.
    pub email: String,
    /// Login password.
    pub password: String,
}

impl Registration {
    /// Builds a registration body.
    pub fn new(
        display_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Login credentials for the registered user.
    #[must_use]
    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

/// Body of `POST /token`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Login email.
    pub email: String,
    /// Login password.
    pub password: String,
}

impl Credentials {
    /// Builds a credentials body.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Body of `PUT /users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEdit {
    /// New display name.
    pub display_name: String,
    /// New email.
    pub email: String,
}

// ============================================================================
// SECTION: Trading Payloads
// ============================================================================

/// Order direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSide {
    /// Buy at market price.
    Buy,
    /// Sell at market price.
    Sell,
}

/// Body of `POST /accounts/{id}/orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Order direction.
    pub side: OrderSide,
    /// Share symbol.
    pub symbol: String,
    /// Number of shares.
    pub quantity: u64,
    /// Replay guard; defaults to the current unix time in seconds.
    pub nonce: u64,
}

impl OrderRequest {
    /// Builds an order stamped with the current unix time as nonce.
    pub fn new(side: OrderSide, symbol: impl Into<String>, quantity: u64) -> Self {
        let nonce = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_secs();
        Self {
            side,
            symbol: symbol.into(),
            quantity,
            nonce,
        }
    }

    /// Overrides the nonce.
    #[must_use]
    pub const fn with_nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }
}

/// Body of `POST /watchlists/{id}/shares`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistShare {
    /// Share symbol.
    pub symbol: String,
}

// ============================================================================
// SECTION: Query Parameters
// ============================================================================

/// Query of `GET /shares/quotes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuotesQuery {
    /// Comma separated symbols.
    pub symbols: String,
}

impl QuotesQuery {
    /// Joins symbols with commas.
    #[must_use]
    pub fn new<S: AsRef<str>>(symbols: &[S]) -> Self {
        Self {
            symbols: symbols.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(","),
        }
    }
}

/// Query of `GET /shares/{symbol}/prices`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricesQuery {
    /// Date range: `1d`, `5d`, `1mo`, `3mo`, `6mo`, `1y`, `2y`, `5y`, `10y`,
    /// `ytd`, or `max`. The server rejects requests without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// Sampling interval: `2m`, `15m`, `1h`, `1d`, `1wk`, or `1mo`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    /// End of the period; the server defaults to now.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl PricesQuery {
    /// Query for a preset range with the server's default interval.
    pub fn range(range: impl Into<String>) -> Self {
        Self {
            range: Some(range.into()),
            ..Self::default()
        }
    }
}

/// Query of `GET /shares/{symbol}/dividends`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DividendsQuery {
    /// Date range: `1y`, `2y`, `5y`, `10y`, or `max` (the server default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
}

/// Paging query of `GET /leaderBoard`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// One-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    /// Rows per page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Query of `GET /accounts/{id}/transactions`; the server pages it like
/// the leaderboard.
pub type TransactionsQuery = PageQuery;
