//! Human-readable formatting of sizes, permission bits, and timestamps.
//!
//! All internal sizes are `u64` bytes; floating point only appears at the
//! display-formatting boundary.

use std::time::SystemTime;

use chrono::{DateTime, Local};

/// Ordered binary-prefix unit letters: 1024^1 through 1024^6.
const UNITS: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Format a byte count into a human-readable string.
///
/// Uses binary steps (1024) but labels them with the common short forms
/// (KB, MB, GB, ...) because that is what users expect in a disk tool.
/// Counts below 1024 are printed as plain bytes with no decimal; everything
/// else gets exactly one decimal place and a space before the unit.
///
/// The unit is chosen by integer-dividing the count by 1024 until the
/// quotient drops below 1024, so a count just under a unit boundary stays in
/// the smaller unit (1 048 575 bytes renders as `"1024.0 KB"`).
///
/// # Examples
///
/// ```
/// # use file_info::utils::format_size;
/// assert_eq!(format_size(512), "512 B");
/// assert_eq!(format_size(1536), "1.5 KB");
/// assert_eq!(format_size(1_572_864), "1.5 MB");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)] // display only, same rounding as f64 math
pub fn format_size(bytes: u64) -> String {
    const UNIT: u64 = 1024;

    if bytes < UNIT {
        return format!("{bytes} B");
    }

    let mut div = UNIT;
    let mut exp = 0;
    let mut n = bytes / UNIT;

    while n >= UNIT {
        div *= UNIT;
        exp += 1;
        n /= UNIT;
    }

    format!("{:.1} {}B", bytes as f64 / div as f64, UNITS[exp])
}

/// Format permission bits as a symbolic mode string (e.g. `drwxr-xr-x`).
///
/// Only the lower nine permission bits are rendered; the leading character
/// distinguishes directories from everything else.
#[must_use]
pub fn format_mode(mode: u32, is_dir: bool) -> String {
    let mut out = String::with_capacity(10);
    out.push(if is_dir { 'd' } else { '-' });

    for shift in [6u32, 3, 0] {
        let bits = (mode >> shift) & 0o7;
        out.push(if bits & 0o4 == 0 { '-' } else { 'r' });
        out.push(if bits & 0o2 == 0 { '-' } else { 'w' });
        out.push(if bits & 0o1 == 0 { '-' } else { 'x' });
    }

    out
}

/// Format a modification time as local `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
