// SPDX-License-Identifier: MPL-2.0
//! Test doubles and fixtures shared by the unit tests.

use crate::error::{Error, Result};
use crate::media::{Bitmap, Fetch, FrameSet};
use crate::surface::Surface;
use image_rs::{ImageFormat, Rgba, RgbaImage};
use std::collections::HashMap;
use std::future::Future;
use std::io::Cursor;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Encodes a solid-color PNG.
pub fn encoded_png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba(color));
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("failed to encode png");
    bytes
}

/// A solid bitmap whose red channel carries `tag`.
pub fn solid_bitmap(width: u32, height: u32, tag: u8) -> Bitmap {
    let pixels = [tag, 0, 0, 255].repeat((width * height) as usize);
    Bitmap::from_rgba(width, height, pixels)
}

/// Reads back the tag written by [`solid_bitmap`] or [`encoded_png`].
pub fn tag_of(bitmap: &Bitmap) -> u8 {
    bitmap.rgba_bytes()[0]
}

/// `count` same-sized frames tagged `0..count`.
pub fn tagged_frames(count: u8, width: u32, height: u32) -> FrameSet {
    let frames = (0..count)
        .map(|tag| solid_bitmap(width, height, tag))
        .collect();
    FrameSet::new(frames).expect("at least one frame")
}

/// Surface that records every resize and the tag of every blitted frame.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub size: (u32, u32),
    pub resizes: Vec<(u32, u32)>,
    pub draws: Vec<u8>,
}

impl RecordingSurface {
    /// Tag of the last blitted frame.
    pub fn shown(&self) -> Option<u8> {
        self.draws.last().copied()
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
        self.resizes.push((width, height));
    }

    fn draw(&mut self, bitmap: &Bitmap) {
        self.draws.push(tag_of(bitmap));
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }
}

/// Scripted result of one fetch.
#[derive(Debug, Clone)]
pub enum Outcome {
    Body(Vec<u8>),
    Fail(String),
}

#[derive(Debug, Clone, Default)]
struct Route {
    delay: Duration,
    /// One entry per attempt; the last one repeats.
    outcomes: Vec<Outcome>,
}

/// In-memory [`Fetch`] implementation with per-URL delays and scripts.
#[derive(Debug, Default)]
pub struct ScriptedFetcher {
    routes: HashMap<String, Route>,
    calls: Mutex<HashMap<String, u32>>,
    completed: Arc<Mutex<Vec<String>>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(self, url: &str, body: Vec<u8>) -> Self {
        self.with_outcomes(url, vec![Outcome::Body(body)])
    }

    pub fn with_outcomes(mut self, url: &str, outcomes: Vec<Outcome>) -> Self {
        self.routes.entry(url.to_string()).or_default().outcomes = outcomes;
        self
    }

    pub fn with_delay(mut self, url: &str, delay: Duration) -> Self {
        self.routes.entry(url.to_string()).or_default().delay = delay;
        self
    }

    /// Number of fetches issued for `url`.
    pub fn calls(&self, url: &str) -> u32 {
        self.calls
            .lock()
            .expect("calls lock")
            .get(url)
            .copied()
            .unwrap_or(0)
    }

    /// URLs in the order their fetches completed.
    pub fn completion_order(&self) -> Vec<String> {
        self.completed.lock().expect("completed lock").clone()
    }
}

impl Fetch for ScriptedFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send {
        let attempt = {
            let mut calls = self.calls.lock().expect("calls lock");
            let count = calls.entry(url.to_string()).or_insert(0);
            *count += 1;
            *count as usize
        };
        let route = self.routes.get(url).cloned();
        let completed = Arc::clone(&self.completed);
        let url = url.to_string();

        async move {
            let Some(route) = route else {
                return Err(Error::Fetch {
                    url,
                    message: "no route".into(),
                });
            };
            if !route.delay.is_zero() {
                tokio::time::sleep(route.delay).await;
            }
            let outcome = route
                .outcomes
                .get(attempt - 1)
                .or(route.outcomes.last())
                .cloned()
                .unwrap_or(Outcome::Fail("empty script".into()));
            completed.lock().expect("completed lock").push(url.clone());

            match outcome {
                Outcome::Body(bytes) => Ok(bytes),
                Outcome::Fail(message) => Err(Error::Fetch { url, message }),
            }
        }
    }
}
