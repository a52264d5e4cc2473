// system-tests/src/logging.rs
// ============================================================================
// Module: System Test Logging
// Description: One-time tracing subscriber installation for test binaries.
// Dependencies: tracing-subscriber
// ============================================================================

//! ## Overview
//! Client and validator events go through `tracing`. Test binaries call
//! [`init_tracing`] from their fixtures; the filter comes from `RUST_LOG` and
//! defaults to `warn` so passing runs stay quiet.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the fmt subscriber once per process.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_test_writer().try_init();
    });
}
