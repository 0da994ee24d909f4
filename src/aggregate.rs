//! Recursive count/size aggregation over a directory tree.
//!
//! This module provides the one traversal the tool performs: starting from a
//! root directory, visit every reachable entry, and for each file that passes
//! the extension filter, add one to the running count and its size to the
//! running total. Directories are descended into but never counted or sized.
//!
//! The walk is single-threaded and synchronous; the accumulating totals are
//! local to one [`Aggregator::aggregate`] call and start at zero.

use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};

use crate::metadata::{Filesystem, TraversalError};

/// Extension filter applied to files during aggregation.
///
/// An empty suffix matches every file; a non-empty suffix matches a file
/// whose full path ends with it (e.g. `.rs`, `.tar.gz`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSpec {
    /// Suffix a file's path must end with; empty matches everything
    suffix: String,
}

impl FilterSpec {
    /// Create a filter for the given path suffix.
    #[must_use]
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// Create a filter that matches every file.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Whether this filter matches every file.
    #[must_use]
    pub fn is_any(&self) -> bool {
        self.suffix.is_empty()
    }

    /// Whether `path` passes the filter.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        self.suffix.is_empty() || path.to_string_lossy().ends_with(&self.suffix)
    }
}

/// Totals accumulated by one aggregation call.
///
/// Both fields start at zero and only ever advance while the walk runs; the
/// result is immutable once returned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationResult {
    /// Number of files that passed the filter
    pub count: u64,

    /// Total size in bytes of the counted files
    pub total_size: u64,
}

/// Recursive aggregation over a directory tree.
///
/// The `Aggregator` owns the filter to apply and the progress behavior; the
/// filesystem to walk is passed into [`Aggregator::aggregate`] explicitly.
#[derive(Debug)]
pub struct Aggregator {
    /// Extension filter applied to every file encountered
    filter: FilterSpec,

    /// When `true`, suppresses the progress spinner (used by `--json` mode).
    quiet: bool,
}

impl Aggregator {
    /// Create a new aggregator with the specified filter.
    #[must_use]
    pub const fn new(filter: FilterSpec) -> Self {
        Self {
            filter,
            quiet: false,
        }
    }

    /// Enable or disable quiet mode (suppresses the progress spinner).
    ///
    /// Quiet mode is required for `--json` output so that only the final
    /// JSON document is printed.
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Walk the tree rooted at `root` and accumulate count and total size.
    ///
    /// Every entry reachable from `root` is visited depth-first through the
    /// [`Filesystem`] capability. Files passing the filter are counted and
    /// sized; directories are only descended into. The caller is responsible
    /// for ensuring `root` is an existing, readable directory.
    ///
    /// # Errors
    ///
    /// Returns a [`TraversalError`] if any entry cannot be accessed during
    /// the walk. Totals gathered before the failure are discarded.
    ///
    /// # Panics
    ///
    /// May panic if the progress bar template string is invalid, which cannot
    /// occur as the template is hardcoded and valid.
    pub fn aggregate<F>(&self, fs: &F, root: &Path) -> Result<AggregationResult, TraversalError>
    where
        F: Filesystem + ?Sized,
    {
        let progress = if self.quiet {
            ProgressBar::hidden()
        } else {
            let pb = ProgressBar::new_spinner();
            pb.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            pb.set_message("Scanning...");
            pb.enable_steady_tick(std::time::Duration::from_millis(100));
            pb
        };

        let result = self.run_walk(fs, root, &progress);
        progress.finish_and_clear();

        result
    }

    /// Drive the walk itself, updating the spinner as files are counted.
    fn run_walk<F>(
        &self,
        fs: &F,
        root: &Path,
        progress: &ProgressBar,
    ) -> Result<AggregationResult, TraversalError>
    where
        F: Filesystem + ?Sized,
    {
        let mut result = AggregationResult::default();

        for entry in fs.walk(root) {
            let entry = entry?;

            if entry.is_dir {
                continue;
            }

            if self.filter.matches(&entry.path) {
                result.count += 1;
                result.total_size += entry.size;
                progress.set_message(format!("Scanning... {} files", result.count));
            }
        }

        Ok(result)
    }
}
