//! End-to-end job execution from a manifest.

use crate::error::{Error, Result};
use crate::fetcher::Fetcher;
use crate::manifest::Manifest;
use crate::request::BatchReport;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// Runs a whole download job: derives the output directory from the
/// manifest, fans the items out through the [`Fetcher`], and reports the
/// aggregate result.
///
/// ```rust,no_run
/// use bulkfetch::{FetcherBuilder, JobRunner, Manifest};
///
/// # async fn example() -> Result<(), bulkfetch::Error> {
/// let manifest = Manifest::from_file("data.json").await?;
/// let runner = JobRunner::new(FetcherBuilder::new().build());
/// let report = runner.execute(&manifest).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct JobRunner {
    fetcher: Fetcher,
    base_directory: PathBuf,
}

impl JobRunner {
    /// Create a runner that writes below the current directory.
    pub fn new(fetcher: Fetcher) -> Self {
        Self {
            fetcher,
            base_directory: PathBuf::from("."),
        }
    }

    /// Set the directory under which the collection directory is created.
    pub fn base_directory(mut self, base_directory: impl Into<PathBuf>) -> Self {
        self.base_directory = base_directory.into();
        self
    }

    /// Download every item in the manifest and return the aggregate report.
    ///
    /// Fails fast with [`Error::EmptyManifest`] before any I/O when the
    /// manifest has no items. Per-file failures never abort the job; they
    /// only lower the successful count in the report.
    pub async fn execute(&self, manifest: &Manifest) -> Result<BatchReport> {
        info!("Starting download process");

        if manifest.items().is_empty() {
            return Err(Error::EmptyManifest);
        }

        let output_dir = self.base_directory.join(manifest.name());
        info!("Creating directory: {}", output_dir.display());
        tokio::fs::create_dir_all(&output_dir).await?;

        let requests = manifest
            .items()
            .iter()
            .map(|item| item.file_request(&output_dir))
            .collect::<Result<Vec<_>>>()?;

        let start = Instant::now();
        let outcomes = self.fetcher.fetch_batch(&requests).await?;
        let report = BatchReport::from_outcomes(&outcomes, start.elapsed());

        info!(
            "Download complete! Successfully downloaded {} of {} files",
            report.successful(),
            report.total()
        );
        info!("Total time: {:.2} seconds", report.elapsed_secs());

        Ok(report)
    }
}
