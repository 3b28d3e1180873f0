//! CSV export renderer.
//!
//! This module serializes a [`Dataset`] to delimited text for spreadsheet
//! tools: UTF-8 with a leading byte-order marker so external tools detect the
//! encoding, and RFC-4180 quoting so any cell content round-trips.

use crate::data::Dataset;
use crate::utils::ensure_extension;
use anyhow::{Context, Result};
use csv::{QuoteStyle, WriterBuilder};
use std::fs::File;
use std::io::Write;

/// UTF-8 byte-order marker prepended to every delimited-text document.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes the dataset as delimited text to `writer`.
///
/// A cell is wrapped in quotes, with internal quotes doubled, if and only if
/// it contains the delimiter, a quote character, or a newline; all other
/// cells pass through verbatim (the csv crate's `QuoteStyle::Necessary`).
/// The header row is always written, so a dataset with zero rows still
/// produces a valid header-only document.
///
/// # Arguments
/// * `dataset` - Pre-validated headers and rows to serialize
/// * `writer` - Destination for the BOM-prefixed CSV bytes
///
/// # Returns
/// * `Result<()>` - Ok if serialization succeeded, Err on I/O failure
pub fn write_delimited<W: Write>(dataset: &Dataset, mut writer: W) -> Result<()> {
    writer
        .write_all(UTF8_BOM)
        .context("Failed to write byte-order marker")?;

    // A zero-column dataset has no header row to emit
    if dataset.headers.is_empty() {
        writer.flush().context("Failed to flush CSV output")?;
        return Ok(());
    }

    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);

    csv_writer
        .write_record(&dataset.headers)
        .context("Failed to write CSV header row")?;
    for row in &dataset.rows {
        csv_writer.write_record(row).context("Failed to write CSV row")?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Exports the dataset to a CSV file on disk.
///
/// Appends the `.csv` extension when `filename` lacks it, then delegates to
/// [`write_delimited`]. Reports the saved path on stderr.
///
/// # Arguments
/// * `dataset` - Pre-validated headers and rows to export
/// * `filename` - Target filename, with or without the `.csv` extension
///
/// # Returns
/// * `Result<String>` - The path actually written
pub fn export(dataset: &Dataset, filename: &str) -> Result<String> {
    let path = ensure_extension(filename, "csv");
    let file =
        File::create(&path).with_context(|| format!("Failed to create CSV file: {}", path))?;

    write_delimited(dataset, file)?;

    eprintln!("CSV output written to: {}", path);
    Ok(path)
}
