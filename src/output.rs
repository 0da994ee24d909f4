//! Report rendering: colorized key/value lines and the `--json` document.
//!
//! Human-readable output is a short list of `Label: value` lines with the
//! entry-kind label in green and field labels in yellow. When `--json` is
//! active, all of that is replaced by a single [`JsonReport`] serialized to
//! stdout so the output can be piped into other tools.

use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use crate::aggregate::AggregationResult;
use crate::metadata::{Metadata, TraversalError};
use crate::utils::{format_mode, format_size, format_timestamp};

/// Print the human-readable report for a single file or directory.
pub fn print_entry(path: &Path, meta: &Metadata) {
    let label = if meta.is_dir { "Directory" } else { "File" };

    println!("{}: {}", label.green(), path.display());
    println!("{}: {}", "Size".yellow(), format_size(meta.size));
    println!(
        "{}: {}",
        "Modified".yellow(),
        format_timestamp(meta.modified)
    );
    println!(
        "{}: {}",
        "Permissions".yellow(),
        format_mode(meta.mode, meta.is_dir)
    );
}

/// Print the human-readable report for a recursive aggregation.
pub fn print_aggregate(path: &Path, result: &AggregationResult) {
    println!("{}: {}", "Directory".green(), path.display());
    println!("{}: {}", "Total files".yellow(), result.count);
    println!(
        "{}: {}",
        "Total size".yellow(),
        format_size(result.total_size)
    );
}

/// Single JSON document emitted when `--json` is active.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    /// Report kind: `"file"`, `"directory"`, or `"aggregate"`.
    pub kind: String,

    /// The inspected path, as given on the command line.
    pub path: String,

    /// Size in bytes: the entry's own size, or the aggregated total.
    pub size: u64,

    /// Human-readable formatted size (e.g. `"1.5 MB"`).
    pub size_formatted: String,

    /// Modification time, present for single-entry reports only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,

    /// Symbolic permissions, present for single-entry reports only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<String>,

    /// Number of files counted, present for aggregate reports only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_files: Option<u64>,

    /// Diagnostic for a failed walk; totals are zero when this is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JsonReport {
    /// Build a report for a single file or directory.
    #[must_use]
    pub fn from_entry(path: &Path, meta: &Metadata) -> Self {
        let kind = if meta.is_dir { "directory" } else { "file" };

        Self {
            kind: kind.to_string(),
            path: path.display().to_string(),
            size: meta.size,
            size_formatted: format_size(meta.size),
            modified: Some(format_timestamp(meta.modified)),
            permissions: Some(format_mode(meta.mode, meta.is_dir)),
            total_files: None,
            error: None,
        }
    }

    /// Build a report for a completed aggregation.
    #[must_use]
    pub fn from_aggregate(path: &Path, result: &AggregationResult) -> Self {
        Self {
            kind: "aggregate".to_string(),
            path: path.display().to_string(),
            size: result.total_size,
            size_formatted: format_size(result.total_size),
            modified: None,
            permissions: None,
            total_files: Some(result.count),
            error: None,
        }
    }

    /// Build a report for an aggregation that failed mid-walk.
    ///
    /// Totals are zeroed and the diagnostic travels in the `error` field so
    /// stdout remains a single JSON document.
    #[must_use]
    pub fn from_failed_aggregate(path: &Path, err: &TraversalError) -> Self {
        Self {
            error: Some(err.to_string()),
            ..Self::from_aggregate(path, &AggregationResult::default())
        }
    }
}
