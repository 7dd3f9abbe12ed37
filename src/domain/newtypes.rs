// SPDX-License-Identifier: MPL-2.0
//! Viewer and loader newtypes.
//!
//! This module provides type-safe wrappers for configurable values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Bounds
// =============================================================================

/// Demo step delay bounds (in milliseconds).
pub mod demo_interval_bounds {
    /// Minimum delay between two demo steps.
    pub const MIN_MS: u64 = 5;
    /// Maximum delay between two demo steps.
    pub const MAX_MS: u64 = 1_000;
    /// Default delay between two demo steps.
    pub const DEFAULT_MS: u64 = 25;
}

/// Retry delay bounds (in milliseconds).
pub mod retry_delay_bounds {
    /// Maximum pause between two decode attempts.
    pub const MAX_MS: u64 = 10_000;
    /// Default pause between two decode attempts (no backoff).
    pub const DEFAULT_MS: u64 = 0;
}

/// Bounded retry attempt bounds.
pub mod max_attempts_bounds {
    /// Minimum number of attempts.
    pub const MIN: u32 = 1;
    /// Maximum number of attempts.
    pub const MAX: u32 = 1_000;
}

// =============================================================================
// DemoInterval
// =============================================================================

/// Delay between two steps of the demo rotation, guaranteed to be within
/// the valid range (5 ms–1 s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoInterval(u64);

impl DemoInterval {
    /// Creates a new interval, clamping the value to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(demo_interval_bounds::MIN_MS, demo_interval_bounds::MAX_MS))
    }

    /// Returns the raw value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for DemoInterval {
    fn default() -> Self {
        Self(demo_interval_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// RetryDelay
// =============================================================================

/// Pause between two fetch-and-decode attempts of the same frame,
/// guaranteed to be at most 10 s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryDelay(u64);

impl RetryDelay {
    /// Creates a new delay, clamping the value to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.min(retry_delay_bounds::MAX_MS))
    }

    /// Returns the raw value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a [`Duration`].
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns whether attempts follow each other without any pause.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for RetryDelay {
    fn default() -> Self {
        Self(retry_delay_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// MaxAttempts
// =============================================================================

/// Upper bound on fetch-and-decode attempts per frame, guaranteed to be
/// within the valid range (1–1000).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxAttempts(u32);

impl MaxAttempts {
    /// Creates a new bound, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(max_attempts_bounds::MIN, max_attempts_bounds::MAX))
    }

    /// Returns the value as u32.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}
