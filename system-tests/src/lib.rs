// system-tests/src/lib.rs
// ============================================================================
// Module: Investor API System Tests Library
// Description: Shared configuration and logging for system test scenarios.
// Purpose: Provide common utilities for Investor API system-test binaries.
// Dependencies: investor-api-client, thiserror, tracing-subscriber
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration and logging setup used by the
//! Investor API system-test binaries in `system-tests/tests`. The suites call
//! a live API and only build with the `system-tests` feature.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod logging;
