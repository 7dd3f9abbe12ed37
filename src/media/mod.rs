// SPDX-License-Identifier: MPL-2.0
//! Frame store and loader.
//!
//! This module turns an ordered list of image locators into an ordered,
//! immutable [`FrameSet`] of decoded [`Bitmap`]s.

pub mod bitmap;
pub mod frame_set;
pub mod loader;

// Re-export commonly used types
pub use bitmap::Bitmap;
pub use frame_set::FrameSet;
pub use loader::{load_frame, load_frames, Fetch, HttpFetcher, RetryPolicy};
