//! Bulkfetch downloads a batch of files described by a JSON manifest,
//! asynchronously via HTTP(S), with bounded concurrency, per-file retries,
//! and size verification.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bulkfetch::{Error, FetcherBuilder, JobRunner, Manifest};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let manifest = Manifest::from_file("data.json").await?;
//! let fetcher = FetcherBuilder::new().max_concurrent(4).build();
//! let report = JobRunner::new(fetcher).execute(&manifest).await?;
//! println!("{} of {} files downloaded", report.successful(), report.total());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`manifest`] - Manifest document describing the collection to download
//! - [`request`] - Per-file requests, transfer outcomes, and batch reports
//! - [`fetcher`] - The concurrent download engine and its builder
//! - [`job`] - End-to-end job execution from a manifest
//! - [`config`] - File-based configuration with defaults
//! - [`logging`] - Console and file logging setup
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`http`] - HTTP client construction
//! - [`progress`] - Progress bar styling and display management
//! - [`verify`] - Downloaded size verification

pub mod config;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod job;
pub mod logging;
pub mod manifest;
pub mod progress;
pub mod request;
pub mod verify;

pub use config::{AppConfig, DownloadSettings, LoggingSettings};
pub use error::{Error, Result};
pub use fetcher::{Fetcher, FetcherBuilder, FetcherConfig};
pub use http::{create_http_client, HttpClientConfig};
pub use job::JobRunner;
pub use manifest::{Manifest, ManifestItem};
pub use progress::{ProgressBarOpts, StyleOptions};
pub use request::{BatchReport, FileRequest, Status, TransferOutcome};
pub use verify::{verify_size, DEFAULT_TOLERANCE_MB};
