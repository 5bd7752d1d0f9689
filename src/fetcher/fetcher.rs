//! Core download engine with batch orchestration and per-file retry.

use super::config::FetcherConfig;
use crate::error::{Error, Result};
use crate::http::{create_http_client, HttpClientConfig};
use crate::progress::display::ProgressDisplay;
use crate::request::{FileRequest, TransferOutcome};
use crate::verify::{verify_size, DEFAULT_TOLERANCE_MB};

use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use reqwest::header::HeaderMap;
use reqwest_middleware::ClientWithMiddleware;
use std::time::Duration;
use tokio::{
    fs::File,
    io::{AsyncWriteExt, BufWriter},
};
use tracing::{debug, error, info, warn};

/// The concurrent download engine.
///
/// A fetcher can be created via its builder:
///
/// ```rust
/// use bulkfetch::fetcher::FetcherBuilder;
///
/// let f = FetcherBuilder::new().build();
/// ```
#[derive(Debug, Clone)]
pub struct Fetcher {
    config: FetcherConfig,
}

impl Fetcher {
    /// Creates a new Fetcher with the given configuration.
    pub(crate) fn new(config: FetcherConfig) -> Self {
        Self { config }
    }

    /// Gets the write buffer size in bytes.
    pub fn chunk_size(&self) -> usize {
        self.config.chunk_size
    }

    /// Gets the number of attempts per file.
    pub fn max_retries(&self) -> u32 {
        self.config.max_retries
    }

    /// Gets the fixed delay between attempts.
    pub fn retry_delay(&self) -> Duration {
        self.config.retry_delay
    }

    /// Gets the whole-request deadline.
    pub fn timeout(&self) -> Duration {
        self.config.timeout
    }

    /// Gets the cap on simultaneous transfers.
    pub fn max_concurrent(&self) -> usize {
        self.config.max_concurrent
    }

    /// Gets the custom headers.
    pub fn headers(&self) -> Option<&HeaderMap> {
        self.config.headers.as_ref()
    }

    /// Downloads every request in the batch, returning one outcome per
    /// request.
    ///
    /// All requests are scheduled immediately; at most `max_concurrent`
    /// transfers are in flight at any time, and the batch waits for every
    /// transfer regardless of individual failures. One HTTP client is shared
    /// by the whole batch and released when it completes.
    pub async fn fetch_batch(&self, requests: &[FileRequest]) -> Result<Vec<TransferOutcome>> {
        let client = create_http_client(HttpClientConfig {
            timeout: self.config.timeout,
            headers: self.config.headers.clone(),
        })?;

        let display = ProgressDisplay::new(self.config.style_options.clone(), requests.len());

        let outcomes = stream::iter(requests)
            .map(|r| self.transfer(&client, r, &display))
            .buffer_unordered(self.config.max_concurrent.max(1))
            .collect::<Vec<_>>()
            .await;

        display.finish();

        Ok(outcomes)
    }

    /// Runs the attempt loop for one request.
    ///
    /// Never panics or escapes with an error: every failure mode is absorbed
    /// into a `Fail` outcome once the attempts are exhausted.
    async fn transfer(
        &self,
        client: &ClientWithMiddleware,
        request: &FileRequest,
        display: &ProgressDisplay,
    ) -> TransferOutcome {
        let max_retries = self.config.max_retries.max(1);

        let mut attempt = 1;
        loop {
            match self.attempt(client, request, display).await {
                Ok(bytes) => {
                    info!("Successfully downloaded: {}", request.path.display());
                    display.increment_main();
                    return TransferOutcome::success(request.clone(), bytes, attempt);
                }
                Err(e) => {
                    error!(
                        "Error downloading {} (attempt {}/{}): {}",
                        request.path.display(),
                        attempt,
                        max_retries,
                        e
                    );
                    if attempt < max_retries {
                        tokio::time::sleep(self.config.retry_delay).await;
                        attempt += 1;
                    } else {
                        display.increment_main();
                        return TransferOutcome::failure(request.clone(), attempt, e);
                    }
                }
            }
        }
    }

    /// Performs one full GET-and-write cycle for a request, from byte zero.
    async fn attempt(
        &self,
        client: &ClientWithMiddleware,
        request: &FileRequest,
        display: &ProgressDisplay,
    ) -> Result<u64> {
        debug!("Fetching {}", &request.url);
        let res = client.get(request.url.clone()).send().await?;
        let res = res.error_for_status()?;

        let pb = display.child_bar(res.content_length(), request.file_name());

        match self.stream_to_disk(res, request, &pb).await {
            Ok(bytes) => {
                display.finish_child(pb);

                if !verify_size(bytes, request.expected_size_mb, DEFAULT_TOLERANCE_MB) {
                    let actual_mb = bytes as f64 / 1_048_576.0;
                    warn!(
                        "Size mismatch for {}: expected {}MB, got {:.2}MB",
                        request.path.display(),
                        request.expected_size_mb,
                        actual_mb
                    );
                    return Err(Error::SizeMismatch {
                        expected_mb: request.expected_size_mb,
                        actual_mb,
                    });
                }

                Ok(bytes)
            }
            Err(e) => {
                display.abandon_child(pb);
                Err(e)
            }
        }
    }

    /// Streams the response body to the destination file, truncating any
    /// previous attempt, and returns the number of bytes written.
    async fn stream_to_disk(
        &self,
        res: reqwest::Response,
        request: &FileRequest,
        pb: &ProgressBar,
    ) -> Result<u64> {
        let file = File::create(&request.path).await?;
        let mut writer = BufWriter::with_capacity(self.config.chunk_size, file);

        let mut downloaded: u64 = 0;
        let mut stream = res.bytes_stream();
        while let Some(item) = stream.next().await {
            let mut chunk = item?;
            downloaded += chunk.len() as u64;
            pb.inc(chunk.len() as u64);
            writer.write_all_buf(&mut chunk).await?;
        }
        writer.flush().await?;

        Ok(downloaded)
    }
}
