// SPDX-License-Identifier: MPL-2.0
//! `iced_spin` is a drag-to-spin image sequence viewer built with the Iced GUI
//! framework.
//!
//! An object photographed from N angles is shown one frame at a time;
//! dragging horizontally steps through the frames so the object appears to
//! rotate. The [`Spinner`] controller is independent of iced and draws on any
//! [`Surface`]; the [`app`] module hosts it in an iced window.

#![doc(html_root_url = "https://docs.rs/iced_spin/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod media;
pub mod spinner;
pub mod surface;
pub mod ui;

#[cfg(test)]
mod test_utils;

pub use domain::Direction;
pub use error::{Error, Result};
pub use media::{load_frame, load_frames, Bitmap, Fetch, FrameSet, HttpFetcher, RetryPolicy};
pub use spinner::{DragInput, Spinner, SpinnerOptions};
pub use surface::Surface;
