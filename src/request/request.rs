//! Description of a single file to fetch: source URL, destination path, and
//! the size announced by the manifest.

use reqwest::Url;
use std::path::PathBuf;

/// Represents a file to be downloaded.
///
/// ```rust
/// use bulkfetch::request::FileRequest;
/// use reqwest::Url;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let url = Url::parse("http://example.com/track1")?;
/// let request = FileRequest::new(url, "album1/track1.mp3", 2.0);
/// assert_eq!(request.file_name(), "track1.mp3");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct FileRequest {
    /// URL of the file to download.
    pub url: Url,
    /// Destination path on disk.
    pub path: PathBuf,
    /// Expected payload size in binary MB.
    pub expected_size_mb: f64,
}

impl FileRequest {
    /// Creates a new [`FileRequest`].
    pub fn new(url: Url, path: impl Into<PathBuf>, expected_size_mb: f64) -> Self {
        Self {
            url,
            path: path.into(),
            expected_size_mb,
        }
    }

    /// Base name of the destination file, used to label progress output.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("download")
    }
}
