//! Progress display management for a batch of transfers.

use crate::progress::StyleOptions;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};
use std::sync::Arc;

/// Coordinates the main batch progress bar and the per-file bars.
///
/// The main bar counts completed files; each transfer attempt adds a child
/// bar labelled with its destination file name and sized by the announced
/// content length.
pub struct ProgressDisplay {
    /// The multi-progress instance for coordinating multiple progress bars.
    multi: Arc<MultiProgress>,
    /// The main progress bar for overall progress.
    main: Arc<ProgressBar>,
    /// Style options for progress bars.
    style_options: StyleOptions,
}

impl ProgressDisplay {
    /// Create a display for a batch of `total_files` transfers.
    pub fn new(style_options: StyleOptions, total_files: usize) -> Self {
        let multi = match style_options.is_enabled() {
            true => Arc::new(MultiProgress::new()),
            false => Arc::new(MultiProgress::with_draw_target(ProgressDrawTarget::hidden())),
        };

        let main = Arc::new(
            multi.add(
                style_options
                    .main()
                    .clone()
                    .to_progress_bar(total_files as u64),
            ),
        );
        main.tick();

        Self {
            multi,
            main,
            style_options,
        }
    }

    /// Create a per-file progress bar labelled with the destination file name.
    ///
    /// Falls back to a spinner when the content length is unknown.
    pub fn child_bar(&self, len: Option<u64>, name: &str) -> ProgressBar {
        let opts = self.style_options.child().clone();
        let pb = match len {
            Some(len) => opts.to_progress_bar(len),
            None => opts.to_spinner(),
        };
        self.multi.add(pb.with_message(name.to_string()))
    }

    /// Advance the main progress bar by one completed file.
    pub fn increment_main(&self) {
        self.main.inc(1);
    }

    /// Remove a per-file bar after a failed attempt so the retry starts clean.
    pub fn abandon_child(&self, pb: ProgressBar) {
        pb.finish_and_clear();
    }

    /// Finish a per-file progress bar based on configuration.
    pub fn finish_child(&self, pb: ProgressBar) {
        if self.style_options.child().clear() {
            pb.finish_and_clear();
        } else {
            pb.finish();
        }
    }

    /// Finish the batch display, clearing or keeping the main bar per
    /// configuration.
    pub fn finish(self) {
        if self.style_options.main().clear() {
            self.main.finish_and_clear();
        } else {
            self.main.finish();
        }
    }
}
