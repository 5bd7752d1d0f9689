//! HTTP client setup and middleware configuration.
//!
//! One client is shared by every transfer in a batch. It carries the
//! whole-request deadline and optional default headers, and traces requests
//! through the `tracing` ecosystem. Retries are handled by the fetcher's
//! attempt loop rather than by middleware, so a failed attempt always
//! restarts its file from byte zero.
//!
//! # Examples
//!
//! ```rust
//! use bulkfetch::http::{create_http_client, HttpClientConfig};
//! use std::time::Duration;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = HttpClientConfig {
//!     timeout: Duration::from_secs(60),
//!     headers: None,
//! };
//! let client = create_http_client(config)?;
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use reqwest::header::HeaderMap;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use std::time::Duration;

/// Configuration for HTTP client setup.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Deadline for each request, covering connect and transfer.
    pub timeout: Duration,
    /// Default headers to include with all requests.
    pub headers: Option<HeaderMap>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(300),
            headers: None,
        }
    }
}

/// Creates an HTTP client with middleware configuration.
///
/// The client applies the whole-request timeout, the optional default
/// headers, and tracing middleware for request/response logging.
pub fn create_http_client(config: HttpClientConfig) -> Result<ClientWithMiddleware> {
    let mut inner_client_builder = reqwest::Client::builder().timeout(config.timeout);

    if let Some(headers) = config.headers {
        inner_client_builder = inner_client_builder.default_headers(headers);
    }

    let inner_client = inner_client_builder.build()?;

    let client = ClientBuilder::new(inner_client)
        // Trace HTTP requests. See the tracing crate to make use of these traces.
        .with(TracingMiddleware::default())
        .build();

    Ok(client)
}
