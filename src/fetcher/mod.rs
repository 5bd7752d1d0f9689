//! The concurrent download engine.
//!
//! - `fetcher` - Core `Fetcher` with batch orchestration and per-file retry
//! - `builder` - `FetcherBuilder` for flexible configuration
//! - `config` - Engine configuration and defaults
//!
//! # Examples
//!
//! ```rust,no_run
//! use bulkfetch::fetcher::FetcherBuilder;
//! use bulkfetch::request::FileRequest;
//! use reqwest::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let fetcher = FetcherBuilder::new()
//!     .max_concurrent(4)
//!     .max_retries(3)
//!     .build();
//!
//! let url = Url::parse("http://example.com/track")?;
//! let requests = vec![FileRequest::new(url, "album/track.mp3", 2.0)];
//! let outcomes = fetcher.fetch_batch(&requests).await?;
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod fetcher;

pub use builder::FetcherBuilder;
pub use config::FetcherConfig;
pub use fetcher::Fetcher;
