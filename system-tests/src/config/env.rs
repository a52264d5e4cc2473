// system-tests/src/config/env.rs
// ============================================================================
// Module: System Test Environment
// Description: Environment-backed configuration for system tests.
// Purpose: Centralize env parsing with strict UTF-8 validation.
// Dependencies: investor-api-client, thiserror
// ============================================================================

//! ## Overview
//! Environment values are parsed with strict UTF-8 enforcement to avoid silent
//! misconfiguration. Invalid UTF-8, empty values, and malformed numbers or
//! booleans fail closed with a [`ConfigError`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;
use std::time::Duration;

use investor_api_client::ClientConfig;
use thiserror::Error;

// ============================================================================
// SECTION: Environment Constants
// ============================================================================

/// Environment keys for system test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemTestEnv {
    /// Optional API root override.
    BaseUrl,
    /// Optional timeout override in seconds (positive integer).
    TimeoutSeconds,
    /// Optional run root override for artifacts.
    RunRoot,
    /// Skip TLS verification (`true`/`false` or `1`/`0`).
    AcceptInvalidCerts,
    /// Allow reusing an existing run root (`true`/`false` or `1`/`0`).
    AllowOverwrite,
}

impl SystemTestEnv {
    /// Every key, in documentation order.
    pub const ALL: [Self; 5] = [
        Self::BaseUrl,
        Self::TimeoutSeconds,
        Self::RunRoot,
        Self::AcceptInvalidCerts,
        Self::AllowOverwrite,
    ];

    /// Returns the canonical environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "INVESTOR_API_SYSTEM_TEST_BASE_URL",
            Self::TimeoutSeconds => "INVESTOR_API_SYSTEM_TEST_TIMEOUT_SEC",
            Self::RunRoot => "INVESTOR_API_SYSTEM_TEST_RUN_ROOT",
            Self::AcceptInvalidCerts => "INVESTOR_API_SYSTEM_TEST_ACCEPT_INVALID_CERTS",
            Self::AllowOverwrite => "INVESTOR_API_SYSTEM_TEST_ALLOW_OVERWRITE",
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Environment parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The value is not valid UTF-8.
    #[error("{name} must be valid UTF-8")]
    InvalidUtf8 {
        /// Variable name.
        name: &'static str,
    },
    /// The value is set but blank.
    #[error("{name} must not be empty")]
    Empty {
        /// Variable name.
        name: &'static str,
    },
    /// The timeout is not a positive integer.
    #[error("{name} must be a positive integer number of seconds")]
    InvalidTimeout {
        /// Variable name.
        name: &'static str,
    },
    /// The value is not a recognized boolean literal.
    #[error("{name} must be 1, 0, true, or false")]
    InvalidBool {
        /// Variable name.
        name: &'static str,
    },
}

// ============================================================================
// SECTION: Config Types
// ============================================================================

/// Typed system test configuration derived from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SystemTestConfig {
    /// Optional API root override.
    pub base_url: Option<String>,
    /// Optional timeout override.
    pub timeout: Option<Duration>,
    /// Optional run root override.
    pub run_root: Option<PathBuf>,
    /// Skip TLS certificate verification.
    pub accept_invalid_certs: bool,
    /// Allow reusing an existing run root.
    pub allow_overwrite: bool,
}

impl SystemTestConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when an environment value is not valid UTF-8,
    /// is empty, or fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        let base_url = read_env_nonempty(SystemTestEnv::BaseUrl)?;
        let timeout = read_env_nonempty(SystemTestEnv::TimeoutSeconds)?
            .map(|value| parse_timeout_seconds(SystemTestEnv::TimeoutSeconds, &value))
            .transpose()?;
        let run_root = read_env_nonempty(SystemTestEnv::RunRoot)?.map(PathBuf::from);
        let accept_invalid_certs = parse_bool_env(
            SystemTestEnv::AcceptInvalidCerts,
            read_env_nonempty(SystemTestEnv::AcceptInvalidCerts)?,
        )?;
        let allow_overwrite = parse_bool_env(
            SystemTestEnv::AllowOverwrite,
            read_env_nonempty(SystemTestEnv::AllowOverwrite)?,
        )?;
        Ok(Self {
            base_url,
            timeout,
            run_root,
            accept_invalid_certs,
            allow_overwrite,
        })
    }

    /// Client settings with the overrides applied over the defaults.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        let defaults = ClientConfig::default();
        ClientConfig {
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            timeout: self.timeout.unwrap_or(defaults.timeout),
            accept_invalid_certs: self.accept_invalid_certs,
            user_agent: defaults.user_agent,
        }
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Reads an environment variable and enforces UTF-8 validity.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidUtf8`] when the value is not valid UTF-8.
pub fn read_env_strict(key: SystemTestEnv) -> Result<Option<String>, ConfigError> {
    let name = key.as_str();
    std::env::var_os(name).map_or(Ok(None), |raw| {
        raw.into_string().map(Some).map_err(|_| ConfigError::InvalidUtf8 {
            name,
        })
    })
}

/// Reads an environment variable and rejects empty values.
fn read_env_nonempty(key: SystemTestEnv) -> Result<Option<String>, ConfigError> {
    match read_env_strict(key)? {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Empty {
            name: key.as_str(),
        }),
        other => Ok(other),
    }
}

/// Parses a positive timeout value in seconds.
fn parse_timeout_seconds(key: SystemTestEnv, raw: &str) -> Result<Duration, ConfigError> {
    let invalid = || ConfigError::InvalidTimeout {
        name: key.as_str(),
    };
    let secs: u64 = raw.trim().parse().map_err(|_| invalid())?;
    if secs == 0 {
        return Err(invalid());
    }
    Ok(Duration::from_secs(secs))
}

/// Parses a boolean literal; unset means `false`.
fn parse_bool_env(key: SystemTestEnv, raw: Option<String>) -> Result<bool, ConfigError> {
    let Some(value) = raw else {
        return Ok(false);
    };
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("true") || trimmed == "1" {
        return Ok(true);
    }
    if trimmed.eq_ignore_ascii_case("false") || trimmed == "0" {
        return Ok(false);
    }
    Err(ConfigError::InvalidBool {
        name: key.as_str(),
    })
}
