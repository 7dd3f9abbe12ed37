// SPDX-License-Identifier: MPL-2.0
//! Concurrent frame loading.
//!
//! Every source is fetched and decoded by its own future; all of them are
//! polled concurrently and the results are assembled in source order once
//! every frame is ready.
//!
//! # Failure policy
//!
//! - A body that does not decode is fetched and decoded again, as dictated
//!   by the [`RetryPolicy`] (forever and without pause by default). Each
//!   failed attempt is logged.
//! - A fetch that fails outright (connection refused, invalid URL, broken
//!   body) is not retried and faults the whole load.
//! - A non-success HTTP status is not a fetch failure: the body still goes
//!   to the decoder, which usually rejects it and triggers a retry.

use crate::config::MAX_REDIRECTS;
use crate::domain::{MaxAttempts, RetryDelay};
use crate::error::{Error, Result};
use crate::media::{Bitmap, FrameSet};
use futures_util::future::try_join_all;
use std::future::Future;

/// Retrieves the raw bytes behind a source locator.
pub trait Fetch: Send + Sync {
    /// Fetches the whole body of `url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] when the resource cannot be retrieved.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

/// Plain HTTP GET fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Builds a fetcher sending `user_agent` and following a bounded number
    /// of redirects.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the HTTP client cannot be initialized
    /// (e.g. no TLS backend).
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Config(format!("HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send {
        let request = self.client.get(url);
        let url = url.to_string();

        async move {
            let fetch_error = |e: reqwest::Error| Error::Fetch {
                url: url.clone(),
                message: e.to_string(),
            };

            let response = request.send().await.map_err(fetch_error)?;

            let status = response.status();
            if !status.is_success() {
                log::warn!("{url} answered HTTP {status}, decoding the body anyway");
            }

            let body = response.bytes().await.map_err(fetch_error)?;
            log::debug!("Fetched {} bytes from {url}", body.len());
            Ok(body.to_vec())
        }
    }
}

/// How often a frame is fetched and decoded again after a decode failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts per frame; `None` retries until the frame decodes.
    pub max_attempts: Option<MaxAttempts>,
    /// Pause before the next attempt.
    pub delay: RetryDelay,
}

impl RetryPolicy {
    /// Retries forever, immediately.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Gives up after `max_attempts` attempts.
    #[must_use]
    pub fn bounded(max_attempts: MaxAttempts) -> Self {
        Self {
            max_attempts: Some(max_attempts),
            delay: RetryDelay::default(),
        }
    }

    /// Waits `delay` between two attempts.
    #[must_use]
    pub fn with_delay(mut self, delay: RetryDelay) -> Self {
        self.delay = delay;
        self
    }

    /// Whether another attempt may follow attempt number `attempt` (1-based).
    #[must_use]
    pub fn allows_retry_after(self, attempt: u32) -> bool {
        self.max_attempts
            .is_none_or(|max| attempt < max.value())
    }
}

/// Fetches and decodes a single frame, retrying decode failures.
///
/// # Errors
///
/// - [`Error::Fetch`] as soon as one fetch fails.
/// - [`Error::DecodeExhausted`] when a bounded policy runs out of attempts.
pub async fn load_frame<F: Fetch>(fetcher: &F, url: &str, policy: RetryPolicy) -> Result<Bitmap> {
    let mut attempt: u32 = 0;

    loop {
        attempt = attempt.saturating_add(1);
        let bytes = fetcher.fetch(url).await?;

        match decode_off_thread(bytes).await {
            Ok(bitmap) => {
                log::debug!(
                    "Decoded {url} ({}x{}) on attempt {attempt}",
                    bitmap.width,
                    bitmap.height
                );
                return Ok(bitmap);
            }
            Err(message) => {
                let err = Error::Decode {
                    url: url.to_string(),
                    message,
                };
                if !policy.allows_retry_after(attempt) {
                    log::warn!("{err} (attempt {attempt}), giving up");
                    return Err(Error::DecodeExhausted {
                        url: url.to_string(),
                        attempts: attempt,
                    });
                }
                log::warn!("{err} (attempt {attempt}), trying again...");
                if !policy.delay.is_zero() {
                    tokio::time::sleep(policy.delay.as_duration()).await;
                }
            }
        }
    }
}

/// Loads every source concurrently and assembles the frames in source order.
///
/// The first failing frame aborts the remaining ones.
///
/// # Errors
///
/// - [`Error::NoSources`] if `sources` is empty.
/// - Any error returned by [`load_frame`] for one of the sources.
pub async fn load_frames<F: Fetch>(
    fetcher: &F,
    sources: &[String],
    policy: RetryPolicy,
) -> Result<FrameSet> {
    if sources.is_empty() {
        return Err(Error::NoSources);
    }

    log::info!("Loading {} frames", sources.len());
    let frames = try_join_all(sources.iter().map(|url| load_frame(fetcher, url, policy))).await?;
    let frames = FrameSet::new(frames)?;

    let (width, height) = frames.dimensions();
    log::info!("Loaded {} frames ({width}x{height})", frames.len());
    Ok(frames)
}

async fn decode_off_thread(bytes: Vec<u8>) -> std::result::Result<Bitmap, String> {
    tokio::task::spawn_blocking(move || Bitmap::decode(&bytes).map_err(|e| e.to_string()))
        .await
        .map_err(|e| e.to_string())?
}
