// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Demo**: Automatic one-pass rotation after loading
//! - **Loader**: Frame fetch/decode retry policy and HTTP client settings

// ==========================================================================
// Demo Defaults
// ==========================================================================

/// Default delay between two demo rotation steps (in milliseconds).
pub const DEFAULT_DEMO_INTERVAL_MS: u64 = 25;

/// Minimum demo step delay (in milliseconds).
pub const MIN_DEMO_INTERVAL_MS: u64 = 5;

/// Maximum demo step delay (in milliseconds).
pub const MAX_DEMO_INTERVAL_MS: u64 = 1_000;

// ==========================================================================
// Loader Defaults
// ==========================================================================

/// Default pause between two decode attempts of the same frame (in milliseconds).
/// Zero keeps the historical "retry immediately" behaviour.
pub const DEFAULT_RETRY_DELAY_MS: u64 = 0;

/// Maximum pause between two decode attempts (in milliseconds).
pub const MAX_RETRY_DELAY_MS: u64 = 10_000;

/// Minimum number of attempts when a bounded retry policy is configured.
pub const MIN_MAX_ATTEMPTS: u32 = 1;

/// Maximum number of attempts when a bounded retry policy is configured.
pub const MAX_MAX_ATTEMPTS: u32 = 1_000;

/// Maximum number of HTTP redirects followed per frame request.
pub const MAX_REDIRECTS: usize = 10;

/// User agent sent with every frame request.
pub const DEFAULT_USER_AGENT: &str = "IcedSpin/0.1.0";
