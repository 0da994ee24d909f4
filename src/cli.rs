//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments and their defaults using
//! the [clap](https://docs.rs/clap/) library. Accessor methods translate the
//! raw arguments into the value types the library layer takes, so flag values
//! are always passed explicitly rather than read from shared state.

use std::path::{Path, PathBuf};

use clap::Parser;

use file_info::FilterSpec;

/// Main command-line interface structure.
#[derive(Parser)]
#[command(name = "file-info")]
#[command(about = "Get information about files and directories")]
#[command(
    long_about = "file-info is a CLI tool that provides detailed information about files and directories"
)]
#[command(version)]
pub struct Cli {
    /// Path to inspect
    ///
    /// Defaults to the current directory when not specified.
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Recursively count files in directories
    ///
    /// When the path is a directory, walk its whole subtree and report the
    /// number of files and their total size instead of the directory's own
    /// metadata.
    #[arg(short = 'r', long)]
    recursive: bool,

    /// Filter by file extension (e.g. .rs, .txt)
    ///
    /// Only meaningful together with --recursive: files whose path does not
    /// end with the given suffix are excluded from the count and total.
    #[arg(short = 't', long = "type", value_name = "SUFFIX")]
    file_type: Option<String>,

    /// Output a single JSON document for scripting/piping
    ///
    /// When enabled, all human-readable output (colors, progress spinner)
    /// is suppressed and one JSON document is printed to stdout.
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// The path to inspect.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether to aggregate recursively when the path is a directory.
    #[must_use]
    pub const fn recursive(&self) -> bool {
        self.recursive
    }

    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub const fn json(&self) -> bool {
        self.json
    }

    /// Build the extension filter from the `--type` argument.
    #[must_use]
    pub fn filter_spec(&self) -> FilterSpec {
        self.file_type
            .as_deref()
            .map_or_else(FilterSpec::any, FilterSpec::new)
    }
}
