//! # file-info
//!
//! A CLI tool that provides detailed information about files and directories:
//! size, modification time, and permissions — plus an optional recursive
//! count/size aggregation over a directory tree, filtered by file extension.
//!
//! ## Usage
//!
//! ```bash
//! # Inspect a single file or directory
//! file-info Cargo.toml
//!
//! # Recursively count files and total size under a directory
//! file-info src --recursive
//!
//! # Only count Rust sources
//! file-info src -r --type .rs
//!
//! # Machine-readable output
//! file-info src -r --json
//! ```
//!
//! All diagnostics go to stdout, matching the rest of the output; the process
//! exits with code 1 when the given path cannot be queried or the command
//! line does not parse, and 0 otherwise.

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use file_info::{
    AggregationResult, Aggregator, Filesystem, Metadata, OsFilesystem, output,
    output::JsonReport,
};
use std::process::exit;

/// Entry point for the file-info application.
///
/// Prints any error from [`run`] to stdout before exiting with a non-zero
/// status code. A failed command-line parse also exits 1, while `--help` and
/// `--version` exit 0.
fn main() {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    if let Err(err) = run(&args) {
        println!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Queries the metadata of the requested path, then either reports it
/// directly or, for a directory with `--recursive`, hands off to the
/// aggregation walk.
///
/// # Errors
///
/// Returns an error when the initial path cannot be queried or when JSON
/// serialization fails. Mid-walk traversal failures are handled inside
/// [`report_aggregate`] and do not surface here.
fn run(args: &Cli) -> Result<()> {
    let fs = OsFilesystem;
    let meta = fs.stat(args.path())?;

    if meta.is_dir && args.recursive() {
        report_aggregate(args, &fs)
    } else {
        report_entry(args, &meta)
    }
}

/// Report the metadata of a single file or directory.
fn report_entry(args: &Cli, meta: &Metadata) -> Result<()> {
    if args.json() {
        let report = JsonReport::from_entry(args.path(), meta);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_entry(args.path(), meta);
    }

    Ok(())
}

/// Run the recursive aggregation and report its outcome.
///
/// A traversal failure is a diagnostic, not a fatal error: the walk's totals
/// are discarded, a zero-valued result is displayed, and the process still
/// exits 0.
fn report_aggregate(args: &Cli, fs: &OsFilesystem) -> Result<()> {
    let aggregator = Aggregator::new(args.filter_spec()).with_quiet(args.json());

    match aggregator.aggregate(fs, args.path()) {
        Ok(result) => {
            if args.json() {
                let report = JsonReport::from_aggregate(args.path(), &result);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                output::print_aggregate(args.path(), &result);
            }
        }
        Err(err) => {
            if args.json() {
                let report = JsonReport::from_failed_aggregate(args.path(), &err);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Error walking directory: {err}");
                output::print_aggregate(args.path(), &AggregationResult::default());
            }
        }
    }

    Ok(())
}
