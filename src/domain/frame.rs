// SPDX-License-Identifier: MPL-2.0
//! Frame navigation rules.
//!
//! The frame index space is circular: stepping past the last frame lands on
//! the first one and stepping before the first lands on the last.

/// One navigation step through the frame sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One frame back (-1).
    Backward,
    /// Stay on the current frame (0); only redraws.
    Stay,
    /// One frame forward (+1).
    Forward,
}

impl Direction {
    /// Maps a horizontal movement to a step direction by its sign.
    ///
    /// Positive deltas move forward, negative deltas move backward and a
    /// zero (or NaN) delta stays put.
    #[must_use]
    pub fn from_delta(delta: f32) -> Self {
        if delta > 0.0 {
            Direction::Forward
        } else if delta < 0.0 {
            Direction::Backward
        } else {
            Direction::Stay
        }
    }

    /// Applies this step to `current`, wrapping inside `0..total`.
    ///
    /// Returns `current` unchanged when `total` is zero.
    #[must_use]
    pub fn apply(self, current: usize, total: usize) -> usize {
        if total == 0 {
            return current;
        }
        match self {
            Direction::Stay => current % total,
            Direction::Forward => (current + 1) % total,
            Direction::Backward => (current + total - 1) % total,
        }
    }
}
