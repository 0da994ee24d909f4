//! # file-info
//!
//! Library behind the `file-info` CLI: inspect metadata about a file or
//! directory (size, modification time, permissions) and, for directories,
//! recursively aggregate a file count and total size filtered by extension.
//!
//! ## Main Parts
//!
//! - [`metadata`] - The filesystem capability: [`Filesystem`] trait, the
//!   [`OsFilesystem`] implementation, and the typed errors surfaced by
//!   metadata queries and directory walks
//! - [`aggregate`] - The recursive count/size aggregation over a directory
//!   tree ([`Aggregator`], [`FilterSpec`], [`AggregationResult`])
//! - [`output`] - Colorized human-readable reports and the `--json` document
//! - [`utils`] - Size, permission, and timestamp formatting helpers

pub mod aggregate;
pub mod metadata;
pub mod output;
pub mod utils;

pub use aggregate::{AggregationResult, Aggregator, FilterSpec};
pub use metadata::{FileEntry, Filesystem, Metadata, OsFilesystem, StatError, TraversalError};
