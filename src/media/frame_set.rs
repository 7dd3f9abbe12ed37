// SPDX-License-Identifier: MPL-2.0
//! Ordered, immutable collection of decoded frames.

use crate::error::{Error, Result};
use crate::media::Bitmap;

/// The frames backing one spin animation.
///
/// Frame `i` always corresponds to source `i`. The set is never empty and
/// never changes once built; the first frame's dimensions define the
/// surface size.
#[derive(Debug, Clone)]
pub struct FrameSet {
    frames: Vec<Bitmap>,
}

impl FrameSet {
    /// Builds a frame set from bitmaps already in source order.
    ///
    /// Frames whose size differs from the first one are kept but logged:
    /// they are blitted at the origin without scaling.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSources`] if `frames` is empty.
    pub fn new(frames: Vec<Bitmap>) -> Result<Self> {
        let Some(first) = frames.first() else {
            return Err(Error::NoSources);
        };

        let expected = first.dimensions();
        for (index, frame) in frames.iter().enumerate().skip(1) {
            if frame.dimensions() != expected {
                log::warn!(
                    "Frame {index} is {}x{}, expected {}x{} like frame 0",
                    frame.width,
                    frame.height,
                    expected.0,
                    expected.1
                );
            }
        }

        Ok(Self { frames })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Bitmap> {
        self.frames.get(index)
    }

    /// Returns the first frame, which defines the surface size.
    #[must_use]
    pub fn first(&self) -> &Bitmap {
        &self.frames[0]
    }

    /// Width and height of the first frame.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        self.first().dimensions()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bitmap> {
        self.frames.iter()
    }
}
