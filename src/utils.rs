//! Utility functions for the `signoff` toolkit.
//!
//! This module provides:
//! - Duration formatting for decimal hour values
//! - Filename extension handling for export targets
//! - Timestamp strings for document headers and footers
//!
//! All functions are pure and side-effect free; they are shared between the
//! export renderers and the CLI.

use chrono::Local;
use std::path::Path;

/// Formats a non-negative decimal hour count as `"{h}h {m}m"`.
///
/// Minutes are the rounded fractional remainder (`round(frac × 60)`); a
/// remainder that rounds up to a full hour carries into the hour count, so
/// `0.999` formats as `"1h"` rather than `"0h 60m"`. When the minute part is
/// zero, only the hour part is emitted.
///
/// Negative input is the caller's responsibility and is not handled here.
///
/// # Arguments
/// * `total_hours` - Duration in decimal hours (e.g. `7.5` for 7h 30m)
///
/// # Returns
/// * `String` - `"7h 30m"`, `"2h"`, `"0h"`, ...
pub fn format_duration(total_hours: f64) -> String {
    let mut hours = total_hours.floor() as u64;
    let mut minutes = ((total_hours - total_hours.floor()) * 60.0).round() as u64;

    if minutes == 60 {
        hours += 1;
        minutes = 0;
    }

    if minutes > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}h", hours)
    }
}

/// Appends `extension` to `filename` unless it is already present
/// (case-insensitive).
///
/// # Arguments
/// * `filename` - Target filename as given by the caller
/// * `extension` - Expected extension without the dot (e.g. `"csv"`)
pub fn ensure_extension(filename: &str, extension: &str) -> String {
    let has_it = Path::new(filename)
        .extension()
        .map(|e| e.eq_ignore_ascii_case(extension))
        .unwrap_or(false);

    if has_it {
        filename.to_string()
    } else {
        format!("{}.{}", filename, extension)
    }
}

/// Current date string for the printable document header (e.g. `2026-08-29`).
pub fn header_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Default footer line for the printable document, used when the caller
/// supplies none.
pub fn default_footer() -> String {
    Local::now().format("Generated %Y-%m-%d %H:%M").to_string()
}
