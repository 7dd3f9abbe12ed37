// SPDX-License-Identifier: MPL-2.0
//! iced widgets hosting the spinner.

pub mod canvas_surface;
pub mod input_layer;
pub mod widgets;

pub use canvas_surface::CanvasSurface;
pub use input_layer::{InputLayer, PointerTracker};
