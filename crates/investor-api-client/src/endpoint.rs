// crates/investor-api-client/src/endpoint.rs
// ============================================================================
// Module: Investor API Endpoints
// Description: Method and path template for every REST operation.
// Purpose: Build percent-encoded endpoint URLs from the configured base URL.
// Dependencies: reqwest, url
// ============================================================================

//! ## Overview
//! Each [`Endpoint`] variant carries its path parameters. URLs are built by
//! appending path segments to the base URL, so identifiers and symbols are
//! always percent-encoded and can never escape their segment.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::Method;
use url::Url;

use crate::error::ClientError;

// ============================================================================
// SECTION: Endpoints
// ============================================================================

/// One Investor API operation and its path parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST /users`
    RegisterUser,
    /// `POST /token`
    Authenticate,
    /// `GET /users`
    ViewDetails,
    /// `PUT /users`
    EditUser,
    /// `DELETE /users`
    DeleteUser,
    /// `GET /shares/quotes`
    CurrentQuotes,
    /// `GET /shares/{symbol}/prices`
    HistoricalPrices {
        /// Share symbol.
        symbol: String,
    },
    /// `GET /shares/{symbol}/dividends`
    Dividends {
        /// Share symbol.
        symbol: String,
    },
    /// `GET /shares/{symbol}/fundamentals`
    Fundamentals {
        /// Share symbol.
        symbol: String,
    },
    /// `GET /leaderBoard`
    Leaderboard,
    /// `GET /accounts/{account_id}`
    ViewPortfolio {
        /// Account identifier.
        account_id: String,
    },
    /// `PUT /accounts/{account_id}`
    ResetAccount {
        /// Account identifier.
        account_id: String,
    },
    /// `POST /accounts/{account_id}/orders`
    PlaceOrder {
        /// Account identifier.
        account_id: String,
    },
    /// `GET /accounts/{account_id}/transactions`
    ViewTransactions {
        /// Account identifier.
        account_id: String,
    },
    /// `GET /watchlists/{watchlist_id}`
    ViewWatchlist {
        /// Watchlist identifier.
        watchlist_id: String,
    },
    /// `POST /watchlists/{watchlist_id}/shares`
    AddToWatchlist {
        /// Watchlist identifier.
        watchlist_id: String,
    },
    /// `DELETE /watchlists/{watchlist_id}/shares/{symbol}`
    RemoveFromWatchlist {
        /// Watchlist identifier.
        watchlist_id: String,
        /// Share symbol.
        symbol: String,
    },
}

impl Endpoint {
    /// Stable name used in logs and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RegisterUser => "register_user",
            Self::Authenticate => "authenticate",
            Self::ViewDetails => "view_details",
            Self::EditUser => "edit_user",
            Self::DeleteUser => "delete_user",
            Self::CurrentQuotes => "current_quotes",
            Self::HistoricalPrices {
                ..
            } => "historical_prices",
            Self::Dividends {
                ..
            } => "dividends",
            Self::Fundamentals {
                ..
            } => "fundamentals",
            Self::Leaderboard => "leaderboard",
            Self::ViewPortfolio {
                ..
            } => "view_portfolio",
            Self::ResetAccount {
                ..
            } => "reset_account",
            Self::PlaceOrder {
                ..
            } => "place_order",
            Self::ViewTransactions {
                ..
            } => "view_transactions",
            Self::ViewWatchlist {
                ..
            } => "view_watchlist",
            Self::AddToWatchlist {
                ..
            } => "add_to_watchlist",
            Self::RemoveFromWatchlist {
                ..
            } => "remove_from_watchlist",
        }
    }

    /// HTTP method of the operation.
    #[must_use]
    pub const fn method(&self) -> Method {
        match self {
            Self::RegisterUser
            | Self::Authenticate
            | Self::PlaceOrder {
                ..
            }
            | Self::AddToWatchlist {
                ..
            } => Method::POST,
            Self::EditUser
            | Self::ResetAccount {
                ..
            } => Method::PUT,
            Self::DeleteUser
            | Self::RemoveFromWatchlist {
                ..
            } => Method::DELETE,
            Self::ViewDetails
            | Self::CurrentQuotes
            | Self::HistoricalPrices {
                ..
            }
            | Self::Dividends {
                ..
            }
            | Self::Fundamentals {
                ..
            }
            | Self::Leaderboard
            | Self::ViewPortfolio {
                ..
            }
            | Self::ViewTransactions {
                ..
            }
            | Self::ViewWatchlist {
                ..
            } => Method::GET,
        }
    }

    /// Whether the operation sends a bearer token.
    #[must_use]
    pub const fn requires_token(&self) -> bool {
        !matches!(self, Self::RegisterUser | Self::Authenticate)
    }

    /// Path segments relative to the API root.
    #[must_use]
    pub fn segments(&self) -> Vec<&str> {
        match self {
            Self::RegisterUser | Self::ViewDetails | Self::EditUser | Self::DeleteUser => {
                vec!["users"]
            }
            Self::Authenticate => vec!["token"],
            Self::CurrentQuotes => vec!["shares", "quotes"],
            Self::HistoricalPrices {
                symbol,
            } => vec!["shares", symbol.as_str(), "prices"],
            Self::Dividends {
                symbol,
            } => vec!["shares", symbol.as_str(), "dividends"],
            Self::Fundamentals {
                symbol,
            } => vec!["shares", symbol.as_str(), "fundamentals"],
            Self::Leaderboard => vec!["leaderBoard"],
            Self::ViewPortfolio {
                account_id,
            }
            | Self::ResetAccount {
                account_id,
            } => vec!["accounts", account_id.as_str()],
            Self::PlaceOrder {
                account_id,
            } => vec!["accounts", account_id.as_str(), "orders"],
            Self::ViewTransactions {
                account_id,
            } => vec!["accounts", account_id.as_str(), "transactions"],
            Self::ViewWatchlist {
                watchlist_id,
            } => vec!["watchlists", watchlist_id.as_str()],
            Self::AddToWatchlist {
                watchlist_id,
            } => vec!["watchlists", watchlist_id.as_str(), "shares"],
            Self::RemoveFromWatchlist {
                watchlist_id,
                symbol,
            } => vec!["watchlists", watchlist_id.as_str(), "shares", symbol.as_str()],
        }
    }

    /// Builds the absolute URL of the operation under `base`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] when `base` cannot take path
    /// segments.
    pub fn url(&self, base: &Url) -> Result<Url, ClientError> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl {
                endpoint: self.name(),
                message: "base url cannot be a base".to_string(),
            })?
            .pop_if_empty()
            .extend(self.segments());
        Ok(url)
    }
}
