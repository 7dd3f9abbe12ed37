// SPDX-License-Identifier: MPL-2.0
//! Drawing target controlled by the spinner.

use crate::media::Bitmap;

/// A 2D target the spinner exclusively controls: it sizes it to the frames
/// and blits the current frame onto it.
///
/// All calls happen on the UI thread.
pub trait Surface {
    /// Resizes the drawable area to exactly `width` x `height` pixels.
    fn resize(&mut self, width: u32, height: u32);

    /// Blits `bitmap` at the origin, unscaled, alpha-composited over whatever
    /// was drawn before. Nothing is cleared first.
    fn draw(&mut self, bitmap: &Bitmap);

    /// Current drawable size in pixels.
    fn size(&self) -> (u32, u32);
}
