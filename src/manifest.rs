//! Manifest document describing a named collection of downloadable items.
//!
//! The manifest is a JSON document:
//!
//! ```json
//! {
//!   "name": "album1",
//!   "list": [
//!     {
//!       "resource_url": "http://host/track",
//!       "resource_name": "track1",
//!       "resource_size": 2.0
//!     }
//!   ]
//! }
//! ```
//!
//! `name` becomes the output directory and each list entry maps to one
//! [`FileRequest`].

use crate::error::{Error, Result};
use crate::request::FileRequest;
use reqwest::Url;
use serde::Deserialize;
use std::path::Path;

/// A named collection of downloadable resources.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    name: String,
    list: Vec<ManifestItem>,
}

impl Manifest {
    /// Read and parse a manifest file.
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Name of the collection; used as the output directory.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Items in manifest order.
    pub fn items(&self) -> &[ManifestItem] {
        &self.list
    }
}

/// One downloadable resource within a [`Manifest`].
#[derive(Debug, Clone, Deserialize)]
pub struct ManifestItem {
    resource_url: String,
    resource_name: String,
    resource_size: f64,
}

impl ManifestItem {
    /// Creates a new [`ManifestItem`].
    pub fn new(resource_url: &str, resource_name: &str, resource_size: f64) -> Self {
        Self {
            resource_url: resource_url.into(),
            resource_name: resource_name.into(),
            resource_size,
        }
    }

    /// URL of the resource.
    pub fn url(&self) -> &str {
        &self.resource_url
    }

    /// Base name of the resource, without extension.
    pub fn name(&self) -> &str {
        &self.resource_name
    }

    /// Announced size of the resource in binary MB.
    pub fn size_mb(&self) -> f64 {
        self.resource_size
    }

    /// Build the file request for this item, rooted at the output directory.
    ///
    /// The `.mp3` extension is fixed by convention of the source catalog.
    pub fn file_request(&self, dir: &Path) -> Result<FileRequest> {
        let url = Url::parse(&self.resource_url).map_err(|e| {
            Error::InvalidUrl(format!(
                "the url \"{}\" cannot be parsed: {}",
                self.resource_url, e
            ))
        })?;
        let path = dir.join(format!("{}.mp3", self.resource_name));
        Ok(FileRequest::new(url, path, self.resource_size))
    }
}
