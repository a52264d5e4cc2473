// crates/investor-api-client/src/client.rs
// ============================================================================
// Module: Investor API Client
// Description: Blocking HTTP client with one method per API operation.
// Purpose: Send requests and normalize responses into validator inputs.
// Dependencies: investor-api-model, reqwest, serde, tracing
// ============================================================================

//! ## Overview
//! [`ApiClient`] performs exactly one HTTP call per method. There are no
//! retries and no token lifecycle: callers pass the token they obtained from
//! [`ApiClient::authenticate`]. Any HTTP status, including 4xx and 5xx, is
//! returned as an [`ApiResponse`]; only transport failures are errors.

// ============================================================================
// SECTION: Imports
// ============================================================================

use investor_api_model::HttpOutcome;
use reqwest::blocking::Client;
use reqwest::blocking::RequestBuilder;
use reqwest::header::AUTHORIZATION;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use tracing::warn;
use url::Url;

use crate::config::ClientConfig;
use crate::endpoint::Endpoint;
use crate::error::ClientError;
use crate::payload::Credentials;
use crate::payload::DividendsQuery;
use crate::payload::OrderRequest;
use crate::payload::OrderSide;
use crate::payload::PageQuery;
use crate::payload::PricesQuery;
use crate::payload::QuotesQuery;
use crate::payload::Registration;
use crate::payload::TransactionsQuery;
use crate::payload::UserEdit;
use crate::payload::WatchlistShare;
use crate::response::ApiResponse;
use crate::token::Token;

// ============================================================================
// SECTION: Client
// ============================================================================

/// Blocking Investor API client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Validated settings.
    config: ClientConfig,
    /// Parsed API root.
    base: Url,
    /// Underlying HTTP client.
    http: Client,
}

impl ApiClient {
    /// Builds a client from validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfig`] for invalid settings and
    /// [`ClientError::Build`] when the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let base = config.validate()?;
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(ClientError::Build)?;
        Ok(Self {
            config,
            base,
            http,
        })
    }

    /// Settings the client was built with.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Parsed API root.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    // ------------------------------------------------------------------------
    // Users
    // ------------------------------------------------------------------------

    /// `POST /users`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request cannot be completed.
    pub fn register_user(&self, registration: &Registration) -> Result<ApiResponse, ClientError> {
        let endpoint = Endpoint::RegisterUser;
        let request = self.request(&endpoint, None)?.json(registration);
        self.send(&endpoint, request)
    }

    /// `POST /token`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request cannot be completed.
    pub fn authenticate(&self, credentials: &Credentials) -> Result<ApiResponse, ClientError> {
        let endpoint = Endpoint::Authenticate;
        let request = self.request(&endpoint, None)?.json(credentials);
        self.send(&endpoint, request)
    }

    /// `GET /users`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request cannot be completed.
    pub fn view_details(&self, token: Option<&Token>) -> Result<ApiResponse, ClientError> {
        let endpoint = Endpoint::ViewDetails;
        let request = self.request(&endpoint, token)?;
        self.send(&endpoint, request)
    }

    /// `PUT /users`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request cannot be completed.
    pub fn edit_user(
        &self,
        token: Option<&Token>,
        edit: &UserEdit,
    ) -> Result<ApiResponse, ClientError> {
        let endpoint = Endpoint::EditUser;
        let request = self.request(&endpoint, token)?.json(edit);
        self.send(&endpoint, request)
    }

    /// `DELETE /users`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request cannot be completed.
    pub fn delete_user(&self, token: Option<&Token>) -> Result<ApiResponse, ClientError> {
        let endpoint = Endpoint::DeleteUser;
        let request = self.request(&endpoint, token)?;
        self.send(&endpoint, request)
    }

    // ------------------------------------------------------------------------
    // Shares
    // ------------------------------------------------------------------------

    /// `GET /shares/quotes?symbols=A,B`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request cannot be completed.
    pub fn current_quotes<S: AsRef<str>>(
        &self,
        token: Option<&Token>,
        symbols: &[S],
    ) -> Result<ApiResponse, ClientError> {
        let endpoint = Endpoint::CurrentQuotes;
        let request = self.request(&endpoint, token)?.query(&QuotesQuery::new(symbols));
        self.send(&endpoint, request)
    }

    /// `GET /shares/{symbol}/prices`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request cannot be completed.
    pub fn historical_prices(
        &self,
        token: Option<&Token>,
        symbol: &str,
        query: &PricesQuery,
    ) -> Result<ApiResponse, ClientError> {
        let endpoint = Endpoint::HistoricalPrices {
            symbol: symbol.to_string(),
        };
        let request = self.request(&endpoint, token)?.query(query);
        self.send(&endpoint, request)
    }

    /// `GET /shares/{symbol}/dividends`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request cannot be completed.
    pub fn dividends(
        &self,
        token: Option<&Token>,
        symbol: &str,
        query: &DividendsQuery,
    ) -> Result<ApiResponse, ClientError> {
        let endpoint = Endpoint::Dividends {
            symbol: symbol.to_string(),
        };
        let request = self.request(&endpoint, token)?.query(query);
        self.send(&endpoint, request)
    }

    /// `GET /shares/{symbol}/fundamentals`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request cannot be completed.
    pub fn fundamentals(
        &self,
        token: Option<&Token>,
        symbol: &str,
    ) -> Result<ApiResponse, ClientError> {
        let endpoint = Endpoint::Fundamentals {
            symbol: symbol.to_string(),
        };
        let request = self.request(&endpoint, token)?;
        self.send(&endpoint, request)
    }

    /// `GET /leaderBoard`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request cannot be completed.
    pub fn leaderboard(
        &self,
        token: Option<&Token>,
        page: &PageQuery,
    ) -> Result<ApiResponse, ClientError> {
        let endpoint = Endpoint::Leaderboard;
        let request = self.request(&endpoint, token)?.query(page);
        self.send(&endpoint, request)
    }

    // ------------------------------------------------------------------------
    // Accounts
    // ------------------------------------------------------------------------

    /// `GET /accounts/{account_id}`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request cannot be completed.
    pub fn view_portfolio(
        &self,
        token: Option<&Token>,
        account_id: &str,
    ) -> Result<ApiResponse, ClientError> {
        let endpoint = Endpoint::ViewPortfolio {
            account_id: account_id.to_string(),
        };
        let request = self.request(&endpoint, token)?;
        self.send(&endpoint, request)
    }

    /// `PUT /accounts/{account_id}`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request cannot be completed.
    pub fn reset_account(
        &self,
        token: Option<&Token>,
        account_id: &str,
    ) -> Result<ApiResponse, ClientError> {
        let endpoint = Endpoint::ResetAccount {
            account_id: account_id.to_string(),
        };
        let request = self.request(&endpoint, token)?;
        self.send(&endpoint, request)
    }

    /// `POST /accounts/{account_id}/orders`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request cannot be completed.
    pub fn place_order(
        &self,
        token: Option<&Token>,
        account_id: &str,
        order: &OrderRequest,
    ) -> Result<ApiResponse, ClientError> {
        let endpoint = Endpoint::PlaceOrder {
            account_id: account_id.to_string(),
        };
        let request = self.request(&endpoint, token)?.json(order);
        self.send(&endpoint, request)
    }

    /// Market buy of `quantity` shares of `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request cannot be completed.
    pub fn buy_share(
        &self,
        token: Option<&Token>,
        account_id: &str,
        symbol: &str,
        quantity: u64,
    ) -> Result<ApiResponse, ClientError> {
        self.place_order(token, account_id, &OrderRequest::new(OrderSide::Buy, symbol, quantity))
    }

    /// Market sell of `quantity` shares of `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request cannot be completed.
    pub fn sell_share(
        &self,
        token: Option<&Token>,
        account_id: &str,
        symbol: &str,
        quantity: u64,
    ) -> Result<ApiResponse, ClientError> {
        self.place_order(token, account_id, &OrderRequest::new(OrderSide::Sell, symbol, quantity))
    }

    /// `GET /accounts/{account_id}/transactions`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request cannot be completed.
    pub fn view_transactions(
        &self,
        token: Option<&Token>,
        account_id: &str,
        query: &TransactionsQuery,
    ) -> Result<ApiResponse, ClientError> {
        let endpoint = Endpoint::ViewTransactions {
            account_id: account_id.to_string(),
        };
        let request = self.request(&endpoint, token)?.query(query);
        self.send(&endpoint, request)
    }

    // ------------------------------------------------------------------------
    // Watchlists
    // ------------------------------------------------------------------------

    /// `GET /watchlists/{watchlist_id}`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request cannot be completed.
    pub fn view_watchlist(
        &self,
        token: Option<&Token>,
        watchlist_id: &str,
    ) -> Result<ApiResponse, ClientError> {
        let endpoint = Endpoint::ViewWatchlist {
            watchlist_id: watchlist_id.to_string(),
        };
        let request = self.request(&endpoint, token)?;
        self.send(&endpoint, request)
    }

    /// `POST /watchlists/{watchlist_id}/shares`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request cannot be completed.
    pub fn add_to_watchlist(
        &self,
        token: Option<&Token>,
        watchlist_id: &str,
        symbol: &str,
    ) -> Result<ApiResponse, ClientError> {
        let endpoint = Endpoint::AddToWatchlist {
            watchlist_id: watchlist_id.to_string(),
        };
        let body = WatchlistShare {
            symbol: symbol.to_string(),
        };
        let request = self.request(&endpoint, token)?.json(&body);
        self.send(&endpoint, request)
    }

    /// `DELETE /watchlists/{watchlist_id}/shares/{symbol}`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request cannot be completed.
    pub fn remove_from_watchlist(
        &self,
        token: Option<&Token>,
        watchlist_id: &str,
        symbol: &str,
    ) -> Result<ApiResponse, ClientError> {
        let endpoint = Endpoint::RemoveFromWatchlist {
            watchlist_id: watchlist_id.to_string(),
            symbol: symbol.to_string(),
        };
        let request = self.request(&endpoint, token)?;
        self.send(&endpoint, request)
    }

    // ------------------------------------------------------------------------
    // Transport
    // ------------------------------------------------------------------------

    /// Starts a request with JSON content type and, when the endpoint is
    /// authenticated, a bearer header (empty when `token` is `None`).
    fn request(
        &self,
        endpoint: &Endpoint,
        token: Option<&Token>,
    ) -> Result<RequestBuilder, ClientError> {
        let url = endpoint.url(&self.base)?;
        let mut request =
            self.http.request(endpoint.method(), url).header(CONTENT_TYPE, "application/json");
        if endpoint.requires_token() {
            request = request.header(AUTHORIZATION, Token::header_value(token));
        }
        Ok(request)
    }

    /// Sends one request and normalizes the response.
    fn send(
        &self,
        endpoint: &Endpoint,
        request: RequestBuilder,
    ) -> Result<ApiResponse, ClientError> {
        let name = endpoint.name();
        let response = request.send().map_err(|source| {
            warn!(endpoint = name, error = %source, "investor api request failed");
            ClientError::Transport {
                endpoint: name,
                source,
            }
        })?;
        let status = response.status().as_u16();
        let bytes = response.bytes().map_err(|source| {
            warn!(endpoint = name, status, error = %source, "investor api body read failed");
            ClientError::Transport {
                endpoint: name,
                source,
            }
        })?;
        let outcome = HttpOutcome::from_bytes(status, &bytes);
        debug!(
            endpoint = name,
            method = %endpoint.method(),
            base = %self.base,
            status,
            has_body = outcome.body.is_some(),
            "investor api call"
        );
        Ok(ApiResponse::new(outcome))
    }
}
