// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core viewer rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`frame`]: Frame navigation ([`Direction`](frame::Direction), circular indexing)
//! - [`newtypes`]: Validated settings ([`DemoInterval`](newtypes::DemoInterval),
//!   [`RetryDelay`](newtypes::RetryDelay), [`MaxAttempts`](newtypes::MaxAttempts))

pub mod frame;
pub mod newtypes;

pub use frame::Direction;
pub use newtypes::{DemoInterval, MaxAttempts, RetryDelay};
