// system-tests/tests/helpers/context.rs
// ============================================================================
// Module: Test Context
// Description: Per-test client, reporter, and throwaway user fixture.
// Purpose: Register a unique user per test and delete it afterwards.
// Dependencies: system-tests, investor-api-client, tracing
// ============================================================================

//! ## Overview
//! Each test owns a [`TestContext`]. Signing up registers a user with a unique
//! email, logs in, and reads the user's default account and watchlist. The
//! user is tracked from the moment registration returns `201` and deleted
//! when the context is dropped, even if the rest of the sign-up failed. When
//! no token was obtained, cleanup logs in with the stored credentials first.
//! The token is carried by the context; nothing is global.

use std::io;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use investor_api_client::ApiClient;
use investor_api_client::ApiResponse;
use investor_api_client::Registration;
use investor_api_client::Token;
use investor_api_model::ResponseExpectation;
use system_tests::config::SystemTestConfig;
use system_tests::logging::init_tracing;
use tracing::debug;
use tracing::warn;

use crate::helpers::TestResult;
use crate::helpers::artifacts::TestReporter;
use crate::helpers::artifacts::Verdict;
use crate::helpers::models;

/// Display name used for throwaway users.
pub const DEFAULT_DISPLAY_NAME: &str = "John Doe";

/// Password used for throwaway users.
pub const DEFAULT_PASSWORD: &str = "12345678";

/// A registered and authenticated user.
#[derive(Debug, Clone)]
pub struct SignedUpUser {
    /// Details the user registered with.
    pub registration: Registration,
    /// Bearer token from `POST /token`.
    pub token: Token,
    /// Identifier of the default trading account.
    pub account_id: String,
    /// Identifier of the first watchlist; registration does not always create one.
    pub watchlist_id: Option<String>,
}

/// Client, reporter, and optional user for one test.
pub struct TestContext {
    /// Configured API client.
    pub client: ApiClient,
    /// Summary writer.
    pub reporter: TestReporter,
    /// Registered user deleted on drop.
    registered: Option<Registration>,
    /// Token of the registered user, once login succeeded.
    token: Option<Token>,
}

impl TestContext {
    /// Builds a client from the environment and a reporter for `test_name`.
    pub fn new(test_name: &str) -> TestResult<Self> {
        init_tracing();
        let config = SystemTestConfig::load()?;
        let client = ApiClient::new(config.client_config())?;
        Ok(Self::with_client(client, TestReporter::new(test_name)?))
    }

    /// Context over an existing client and reporter.
    pub fn with_client(client: ApiClient, reporter: TestReporter) -> Self {
        Self {
            client,
            reporter,
            registered: None,
            token: None,
        }
    }

    /// Registration details with an email no other test uses.
    pub fn unique_registration(prefix: &str) -> Registration {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let stamp = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis();
        let sequence = COUNTER.fetch_add(1, Ordering::Relaxed);
        Registration::new(
            DEFAULT_DISPLAY_NAME,
            format!("{prefix}.{stamp}.{sequence}@test.com"),
            DEFAULT_PASSWORD,
        )
    }

    /// Validates `response` and records it as `step`.
    pub fn expect(
        &mut self,
        step: &str,
        response: &ApiResponse,
        expectation: &ResponseExpectation,
    ) -> io::Result<()> {
        self.reporter.check(step, &response.validate(expectation))
    }

    /// Registers, authenticates, and loads the ids of a fresh user.
    pub fn sign_up(&mut self, prefix: &str) -> TestResult<SignedUpUser> {
        let registration = Self::unique_registration(prefix);
        let response = self.client.register_user(&registration)?;
        if response.status() == 201 {
            self.registered = Some(registration.clone());
            self.token = None;
        }
        self.expect("register_user", &response, &ResponseExpectation::no_body(201))?;

        let login = self.client.authenticate(&registration.credentials())?;
        self.expect(
            "authenticate",
            &login,
            &ResponseExpectation::with_model(200, models::token_response()),
        )?;
        let token = login.access_token().ok_or("authenticate returned no access token")?;
        self.token = Some(token.clone());

        let details = self.client.view_details(Some(&token))?;
        self.expect(
            "view_details",
            &details,
            &ResponseExpectation::with_model(
                200,
                models::user_details(&registration.display_name, &registration.email),
            ),
        )?;
        let account_id =
            details.main_account_id().ok_or("view_details returned no account")?.to_string();
        let watchlist_id = details.default_watchlist_id().map(str::to_string);

        Ok(SignedUpUser {
            registration,
            token,
            account_id,
            watchlist_id,
        })
    }

    /// Stops tracking the user, e.g. after a test deleted it itself.
    pub fn forget_user(&mut self) {
        self.registered = None;
        self.token = None;
    }

    /// Writes a passing summary.
    pub fn pass(&mut self, note: &str) -> io::Result<()> {
        self.reporter.finish(Verdict::Pass, &[note.to_string()])
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let Some(registration) = self.registered.take() else {
            return;
        };
        remove_user(&self.client, &registration, self.token.take());
    }
}

/// Deletes a registered user, logging in with its credentials when no token
/// is given. Failures are logged; returns whether the user was deleted.
pub fn remove_user(client: &ApiClient, registration: &Registration, token: Option<Token>) -> bool {
    let token = match token {
        Some(token) => token,
        None => match client.authenticate(&registration.credentials()) {
            Ok(response) => {
                let Some(token) = response.access_token() else {
                    warn!(
                        email = %registration.email,
                        status = response.status(),
                        "could not log in to delete test user"
                    );
                    return false;
                };
                token
            }
            Err(err) => {
                warn!(email = %registration.email, error = %err, "could not log in to delete test user");
                return false;
            }
        },
    };
    match client.delete_user(Some(&token)) {
        Ok(response) if response.status() == 204 => {
            debug!(email = %registration.email, "deleted test user");
            true
        }
        Ok(response) => {
            warn!(
                email = %registration.email,
                status = response.status(),
                "could not delete test user"
            );
            false
        }
        Err(err) => {
            warn!(email = %registration.email, error = %err, "could not delete test user");
            false
        }
    }
}
