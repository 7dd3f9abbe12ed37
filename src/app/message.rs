// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::{Config, DragCapture, DEFAULT_USER_AGENT};
use crate::domain::{DemoInterval, Direction, MaxAttempts, RetryDelay};
use crate::error::{Error, Result};
use crate::media::{FrameSet, RetryPolicy};
use crate::spinner::{DragInput, SpinnerOptions};
use std::ffi::OsString;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Outcome of the background frame load.
    FramesLoaded(Result<FrameSet>),
    /// Drag input published by the surface's input layer.
    Input(DragInput),
    DemoTick,
    /// Animation tick for the loading indicator.
    LoadingTick,
    /// Keyboard step (arrow keys).
    Step(Direction),
    JumpToFirst,
    JumpToLast,
}

/// Command-line values layered over the config file. Unset fields keep the
/// configured value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    /// Replaces the configured sources when non-empty.
    pub sources: Vec<String>,
    /// Forces the demo on; there is no flag to force it off.
    pub demo: bool,
    pub max_attempts: Option<u32>,
    pub retry_delay_ms: Option<u64>,
    pub demo_interval_ms: Option<u64>,
    pub capture: Option<DragCapture>,
}

impl Overrides {
    /// Turns the positional arguments left after option parsing into frame
    /// sources, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for a leftover that looks like an option or
    /// is not valid UTF-8; dropping it would shift every later frame.
    pub fn sources_from_args(args: Vec<OsString>) -> Result<Vec<String>> {
        args.into_iter()
            .map(|arg| match arg.into_string() {
                Ok(source) if source.starts_with('-') => {
                    Err(Error::Config(format!("unknown option '{source}'")))
                }
                Ok(source) => Ok(source),
                Err(raw) => Err(Error::Config(format!(
                    "source {} is not valid UTF-8",
                    raw.to_string_lossy()
                ))),
            })
            .collect()
    }
}

/// Runtime flags resolved from the config file and the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Flags {
    /// Ordered frame URLs.
    pub sources: Vec<String>,
    pub demo_on_load: bool,
    pub demo_interval: DemoInterval,
    pub retry: RetryPolicy,
    pub drag_capture: DragCapture,
    pub user_agent: String,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            demo_on_load: false,
            demo_interval: DemoInterval::default(),
            retry: RetryPolicy::unbounded(),
            drag_capture: DragCapture::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Flags {
    /// Builds flags from a loaded config; absent values fall back to defaults.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let retry = match config.max_attempts() {
            Some(max) => RetryPolicy::bounded(max),
            None => RetryPolicy::unbounded(),
        }
        .with_delay(config.retry_delay());

        Self {
            sources: config.viewer.sources.clone(),
            demo_on_load: config.viewer.demo_on_load.unwrap_or(false),
            demo_interval: config.demo_interval(),
            retry,
            drag_capture: config.viewer.drag_capture.unwrap_or_default(),
            user_agent: config.user_agent().to_string(),
        }
    }

    /// Applies command-line overrides on top of these flags.
    ///
    /// `--max-attempts` keeps the current retry delay; `--retry-delay-ms`
    /// keeps the current attempt bound.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if !overrides.sources.is_empty() {
            self.sources = overrides.sources;
        }
        if overrides.demo {
            self.demo_on_load = true;
        }
        if let Some(ms) = overrides.demo_interval_ms {
            self.demo_interval = DemoInterval::from_millis(ms);
        }
        if let Some(capture) = overrides.capture {
            self.drag_capture = capture;
        }
        if let Some(max) = overrides.max_attempts {
            self.retry = RetryPolicy::bounded(MaxAttempts::new(max)).with_delay(self.retry.delay);
        }
        if let Some(ms) = overrides.retry_delay_ms {
            self.retry = self.retry.with_delay(RetryDelay::from_millis(ms));
        }
        self
    }

    #[must_use]
    pub fn spinner_options(&self) -> SpinnerOptions {
        SpinnerOptions {
            demo_on_load: self.demo_on_load,
            demo_interval: self.demo_interval,
        }
    }
}
