// SPDX-License-Identifier: MPL-2.0
//! One-pass demo rotation played right after loading.

/// What the demo timer should do on its next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoStep {
    /// Advance one frame.
    Advance,
    /// The last frame is showing; cancel the timer.
    Finished,
}

/// Decides the next demo step from the current position.
///
/// The demo never loops: it finishes as soon as the last frame shows.
#[must_use]
pub fn next_step(current_frame: usize, total_frames: usize) -> DemoStep {
    if current_frame + 1 >= total_frames {
        DemoStep::Finished
    } else {
        DemoStep::Advance
    }
}
