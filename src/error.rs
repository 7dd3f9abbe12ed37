// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A load was requested with an empty source list.
    NoSources,

    /// The resource could not be retrieved at all (connection refused, bad
    /// URL, truncated body). Not retried: it faults the whole load.
    Fetch { url: String, message: String },

    /// One decode attempt failed. Retried by the loader, only ever logged.
    Decode { url: String, message: String },

    /// A bounded retry policy ran out of attempts for this source.
    DecodeExhausted { url: String, attempts: u32 },

    /// `set_frame` was called with an index past the last frame.
    FrameOutOfRange { index: usize, total: usize },

    Io(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoSources => write!(f, "No image sources to load"),
            Error::Fetch { url, message } => write!(f, "Fetch Error ({}): {}", url, message),
            Error::Decode { url, message } => write!(f, "Decode Error ({}): {}", url, message),
            Error::DecodeExhausted { url, attempts } => write!(
                f,
                "Decode Error ({}): gave up after {} attempts",
                url, attempts
            ),
            Error::FrameOutOfRange { index, total } => write!(
                f,
                "Frame {} out of bounds (frame count: {})",
                index, total
            ),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
