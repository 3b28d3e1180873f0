//! CLI interface definitions for the `signoff` application.
//!
//! This module defines command-line arguments using [`clap`] and exposes:
//!
//! - [`Args`]: the main struct parsed from CLI inputs
//! - [`Command`]: the `export` / `sign` subcommands
//! - [`ExportFormat`]: an enum selecting the CSV or printable HTML renderer
//!
//! The `Args` struct is used in `main.rs` to route a JSON dataset or stroke
//! log through the export renderers or the signature pad.
//!
//! # Example
//!
//! ```bash
//! signoff export timesheet.json --format csv --output august.csv
//! signoff export timesheet.json --format html --title "Payroll" --print
//! signoff sign strokes.json --output sig.png --data-uri
//! ```
//!
//! # Dependencies
//! - [`clap`] for argument parsing and help generation

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line arguments for the `signoff` export and capture toolkit.
#[derive(Parser, Debug)]
#[command(name = "signoff", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

/// The two tools offered by the CLI.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Export a tabular dataset as CSV or as a printable HTML document
    Export {
        /// Path to the dataset JSON ({"headers": [...], "rows": [[...], ...]})
        input: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Write output to this file (CSV defaults to stdout, HTML to export.html)
        #[arg(long, value_name = "FILE")]
        output: Option<String>,

        /// Document title (printable format only)
        #[arg(long, default_value = "Export")]
        title: String,

        /// Document subtitle (printable format only)
        #[arg(long)]
        subtitle: Option<String>,

        /// Footer line; defaults to a generated timestamp (printable format only)
        #[arg(long)]
        footer: Option<String>,

        /// Open the printable document in the platform viewer, triggering
        /// its print-on-load script (printable format only)
        #[arg(long, default_value_t = false)]
        print: bool,
    },

    /// Replay a recorded stroke log through the signature pad and save the
    /// confirmed capture as a PNG
    Sign {
        /// Path to the stroke log JSON ([[[x, y], ...], ...], one inner array per stroke)
        input: PathBuf,

        /// Output image path
        #[arg(long, value_name = "FILE", default_value = "signature.png")]
        output: PathBuf,

        /// Logical surface width in pixels
        #[arg(long, default_value_t = 400)]
        width: u32,

        /// Logical surface height in pixels
        #[arg(long, default_value_t = 200)]
        height: u32,

        /// Also print the capture as an embeddable data URI on stdout
        #[arg(long, default_value_t = false)]
        data_uri: bool,
    },
}

/// Enum for selecting the export renderer.
///
/// # Variants
/// * `Csv` - Delimited text with a UTF-8 byte-order marker
/// * `Html` - Styled, self-printing document
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
pub enum ExportFormat {
    Csv,
    Html,
}
