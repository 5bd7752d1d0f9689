//! Configuration structure and defaults for the download engine.

use crate::StyleOptions;
use reqwest::header::HeaderMap;
use std::time::Duration;

/// Configuration for the [`Fetcher`](super::Fetcher).
///
/// The defaults mirror the file-based configuration defaults in
/// [`DownloadSettings`](crate::config::DownloadSettings).
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// Write buffer size in bytes for streaming chunks to disk.
    pub chunk_size: usize,
    /// Maximum number of attempts per file, including the first.
    pub max_retries: u32,
    /// Fixed delay between attempts.
    pub retry_delay: Duration,
    /// Whole-request deadline, covering connect and transfer.
    pub timeout: Duration,
    /// Cap on simultaneous transfers.
    pub max_concurrent: usize,
    /// Style options for the progress display.
    pub style_options: StyleOptions,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            chunk_size: 32_768,
            max_retries: 3,
            retry_delay: Duration::from_secs(1),
            timeout: Duration::from_secs(300),
            max_concurrent: 10,
            style_options: StyleOptions::default(),
            headers: None,
        }
    }
}
