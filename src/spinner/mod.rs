// SPDX-License-Identifier: MPL-2.0
//! Interaction controller for the drag-to-spin viewer.
//!
//! A [`Spinner`] owns the frame set once it is loaded, the drag state and
//! the surface it draws on. Every mutation goes through `&mut self`, so the
//! host must drive it from a single thread (the UI update loop).
//!
//! # Lifecycle
//!
//! 1. [`Spinner::new`] stores the sources, the surface and the options.
//! 2. The host runs [`Spinner::load`] as a background task.
//! 3. [`Spinner::on_frames_loaded`] fits the surface to frame 0 and either
//!    draws it or starts the demo rotation.
//! 4. Drag input and [`Spinner::set_frame`] navigate the frames.

pub mod demo;
pub mod drag;

pub use demo::DemoStep;
pub use drag::{DragInput, DragState};

use crate::domain::{DemoInterval, Direction};
use crate::error::{Error, Result};
use crate::media::{load_frames, Fetch, FrameSet, RetryPolicy};
use crate::surface::Surface;
use std::future::Future;

/// Construction options besides the sources and the surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpinnerOptions {
    /// Play once through all frames right after loading.
    pub demo_on_load: bool,
    /// Delay between two demo steps.
    pub demo_interval: DemoInterval,
}

/// Drag-to-spin controller over a [`Surface`].
#[derive(Debug)]
pub struct Spinner<S: Surface> {
    sources: Vec<String>,
    surface: S,
    options: SpinnerOptions,
    /// Set once, never replaced; `Some` means loaded.
    frames: Option<FrameSet>,
    current_frame: usize,
    drag: DragState,
    demo_running: bool,
}

impl<S: Surface> Spinner<S> {
    #[must_use]
    pub fn new(sources: Vec<String>, surface: S, options: SpinnerOptions) -> Self {
        Self {
            sources,
            surface,
            options,
            frames: None,
            current_frame: 0,
            drag: DragState::default(),
            demo_running: false,
        }
    }

    /// Returns the future loading this spinner's sources.
    ///
    /// The future owns its inputs so it can run on any executor; feed its
    /// output to [`Spinner::on_frames_loaded`].
    pub fn load<F>(
        &self,
        fetcher: F,
        policy: RetryPolicy,
    ) -> impl Future<Output = Result<FrameSet>> + Send + 'static
    where
        F: Fetch + 'static,
    {
        let sources = self.sources.clone();
        async move { load_frames(&fetcher, &sources, policy).await }
    }

    /// Installs the loaded frames, fits the surface to frame 0 and either
    /// starts the demo or draws frame 0.
    ///
    /// Returns `true` if the demo rotation started. A second call is
    /// ignored: the frame set never changes once loaded.
    pub fn on_frames_loaded(&mut self, frames: FrameSet) -> bool {
        if self.frames.is_some() {
            log::warn!("Frames already loaded, ignoring second frame set");
            return false;
        }

        let (width, height) = frames.dimensions();
        self.frames = Some(frames);
        self.surface.resize(width, height);

        if self.options.demo_on_load {
            self.start_demo();
        } else {
            self.update(Direction::Stay);
        }
        self.demo_running
    }

    /// Steps one frame in `direction` (wrapping) and redraws.
    ///
    /// Does nothing before the frames are loaded.
    pub fn update(&mut self, direction: Direction) {
        let Some(frames) = &self.frames else {
            return;
        };
        self.current_frame = direction.apply(self.current_frame, frames.len());
        if let Some(bitmap) = frames.get(self.current_frame) {
            self.surface.draw(bitmap);
        }
    }

    /// Jumps straight to `index` and redraws.
    ///
    /// Silently does nothing before the frames are loaded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FrameOutOfRange`] if `index` is past the last frame;
    /// the current frame is left untouched.
    pub fn set_frame(&mut self, index: usize) -> Result<()> {
        let Some(frames) = &self.frames else {
            return Ok(());
        };
        let Some(bitmap) = frames.get(index) else {
            return Err(Error::FrameOutOfRange {
                index,
                total: frames.len(),
            });
        };
        self.current_frame = index;
        self.surface.draw(bitmap);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Drag input
    // -------------------------------------------------------------------------

    /// Dispatches one drag input to the matching handler.
    pub fn handle_input(&mut self, input: DragInput) {
        match input {
            DragInput::Press => self.press(),
            DragInput::Release => self.release(),
            DragInput::PointerMoved { delta_x } => self.pointer_moved(delta_x),
            DragInput::TouchStart { x } => self.touch_start(x),
            DragInput::TouchMove { x } => self.touch_move(x),
            DragInput::TouchEnd => self.touch_end(),
        }
    }

    pub fn press(&mut self) {
        self.drag.press();
    }

    pub fn release(&mut self) {
        self.drag.release();
    }

    /// Pointer motion: the sign of `delta_x` picks the step direction.
    pub fn pointer_moved(&mut self, delta_x: f32) {
        if !self.is_loaded() || !self.drag.is_dragging {
            return;
        }
        self.step_towards(delta_x);
    }

    pub fn touch_start(&mut self, x: f32) {
        self.drag.start_touch(x);
    }

    /// Touch motion: moving the finger left (`last - x > 0`) steps forward.
    pub fn touch_move(&mut self, x: f32) {
        if !self.is_loaded() {
            return;
        }
        if let Some(delta) = self.drag.touch_delta(x) {
            self.step_towards(delta);
        }
    }

    pub fn touch_end(&mut self) {
        self.drag.end_touch();
    }

    fn step_towards(&mut self, delta: f32) {
        match Direction::from_delta(delta) {
            Direction::Stay => {}
            direction => self.update(direction),
        }
    }

    // -------------------------------------------------------------------------
    // Demo rotation
    // -------------------------------------------------------------------------

    fn start_demo(&mut self) {
        self.update(Direction::Stay);
        self.demo_running = true;
        log::info!("Demo rotation started");
    }

    /// Advances the demo by one frame; call every
    /// [`SpinnerOptions::demo_interval`] while [`Spinner::is_demo_running`].
    ///
    /// Returns whether the demo is still running afterwards.
    pub fn demo_tick(&mut self) -> bool {
        if !self.demo_running {
            return false;
        }
        if demo::next_step(self.current_frame, self.total_frames()) == DemoStep::Advance {
            self.update(Direction::Forward);
        }
        if demo::next_step(self.current_frame, self.total_frames()) == DemoStep::Finished {
            self.demo_running = false;
            log::info!("Demo rotation finished on frame {}", self.current_frame);
        }
        self.demo_running
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    /// Number of frames; zero until loaded.
    #[must_use]
    pub fn total_frames(&self) -> usize {
        self.frames.as_ref().map_or(0, FrameSet::len)
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.frames.is_some()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging
    }

    #[must_use]
    pub fn is_demo_running(&self) -> bool {
        self.demo_running
    }

    #[must_use]
    pub fn options(&self) -> SpinnerOptions {
        self.options
    }

    #[must_use]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }
}
