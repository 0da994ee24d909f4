//! Utility functions and helpers.
//!
//! This module contains the formatting helpers used by the report layer:
//! human-readable sizes, symbolic permission strings, and timestamps.

pub mod format;

pub use format::{format_mode, format_size, format_timestamp};
