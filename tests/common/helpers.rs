//! Shared helpers for integration tests, including a canned-response HTTP
//! server backed by a local TCP listener.
#![allow(dead_code)]

use bulkfetch::fetcher::{Fetcher, FetcherBuilder};
use bulkfetch::manifest::Manifest;
use bulkfetch::request::FileRequest;
use reqwest::Url;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a fetcher with hidden progress bars and a short retry delay
pub fn create_test_fetcher(max_retries: u32) -> Fetcher {
    FetcherBuilder::hidden()
        .max_retries(max_retries)
        .retry_delay(Duration::from_millis(10))
        .build()
}

/// Creates a file request pointing at the given URL and destination
pub fn create_test_request(url: &str, path: &Path, expected_size_mb: f64) -> FileRequest {
    FileRequest::new(
        Url::parse(url).expect("invalid test url"),
        path,
        expected_size_mb,
    )
}

/// Parses a manifest from a JSON string
pub fn manifest_from_json(json: &str) -> Manifest {
    serde_json::from_str(json).expect("invalid test manifest")
}

/// Body of `n` patterned bytes
pub fn body_of(n: usize) -> Vec<u8> {
    (0..n).map(|i| (i % 251) as u8).collect()
}

/// Asserts that a file has the expected size
pub fn assert_file_size(path: &Path, expected: u64) {
    let metadata = std::fs::metadata(path).expect("Failed to get file metadata");
    assert_eq!(metadata.len(), expected, "File size mismatch at {:?}", path);
}

/// One canned HTTP response served by [`TestServer`].
#[derive(Clone)]
pub struct CannedResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub sized: bool,
}

impl CannedResponse {
    pub fn ok(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            body,
            sized: true,
        }
    }

    /// A 200 response without a Content-Length header; the body ends at EOF.
    pub fn ok_unsized(body: Vec<u8>) -> Self {
        Self {
            status: 200,
            body,
            sized: false,
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
            sized: true,
        }
    }
}

/// Minimal HTTP server serving a scripted sequence of responses.
///
/// The n-th request receives the n-th canned response; once the script is
/// exhausted the last response repeats. Tracks total hits and the peak
/// number of simultaneous connections.
pub struct TestServer {
    addr: SocketAddr,
    hits: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
}

impl TestServer {
    pub async fn start(script: Vec<CannedResponse>) -> Self {
        Self::start_with_delay(script, Duration::ZERO).await
    }

    /// Start a server that waits `delay` before answering each request.
    pub async fn start_with_delay(script: Vec<CannedResponse>, delay: Duration) -> Self {
        assert!(!script.is_empty(), "test server needs at least one response");
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test server");
        let addr = listener.local_addr().expect("test server addr");
        let hits = Arc::new(AtomicUsize::new(0));
        let peak = Arc::new(AtomicUsize::new(0));
        let active = Arc::new(AtomicUsize::new(0));

        let server_hits = hits.clone();
        let server_peak = peak.clone();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let n = server_hits.fetch_add(1, Ordering::SeqCst);
                let response = script
                    .get(n)
                    .unwrap_or_else(|| script.last().expect("non-empty script"))
                    .clone();
                let active = active.clone();
                let peak = server_peak.clone();
                tokio::spawn(async move {
                    let current = active.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(current, Ordering::SeqCst);

                    // Drain the request head; a plain GET fits in one read.
                    let mut buf = [0u8; 4096];
                    let _ = socket.read(&mut buf).await;

                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }

                    let length_header = if response.sized {
                        format!("Content-Length: {}\r\n", response.body.len())
                    } else {
                        String::new()
                    };
                    let head = format!(
                        "HTTP/1.1 {} {}\r\n{}Connection: close\r\n\r\n",
                        response.status,
                        if response.status == 200 { "OK" } else { "Error" },
                        length_header,
                    );
                    let _ = socket.write_all(head.as_bytes()).await;
                    let _ = socket.write_all(&response.body).await;
                    let _ = socket.shutdown().await;

                    active.fetch_sub(1, Ordering::SeqCst);
                });
            }
        });

        Self { addr, hits, peak }
    }

    /// URL for a path on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Total number of requests received.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    /// Highest number of simultaneous connections observed.
    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}
