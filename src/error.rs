//! Error handling for the bulkfetch library.
//!
//! Only manifest-level problems and unexpected system failures surface as
//! errors from the public API; per-file transfer failures are absorbed into
//! the batch outcome counts.

use std::io;
use thiserror::Error;

/// Errors that can happen when using bulkfetch.
#[derive(Error, Debug)]
pub enum Error {
    /// The manifest contains no items to download.
    #[error("no items found in the manifest")]
    EmptyManifest,

    /// Error from the underlying URL parser or the expected URL format.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The downloaded payload does not match the size announced by the
    /// manifest, within the configured tolerance.
    #[error("size mismatch: expected {expected_mb}MB, got {actual_mb:.2}MB")]
    SizeMismatch {
        /// Expected size in binary MB.
        expected_mb: f64,
        /// Actual downloaded size in binary MB.
        actual_mb: f64,
    },

    /// I/O Error.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Malformed JSON in the manifest or configuration document.
    #[error("JSON error")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// Error from the Reqwest library.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error raised by the HTTP middleware stack.
    #[error("HTTP client error")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },

    /// Error from an underlying system.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for operations that can fail with a bulkfetch error.
pub type Result<T> = std::result::Result<T, Error>;
