//! Main entry point for the `signoff` CLI application.
//!
//! `signoff` packages the two leaf tools of a timesheet dashboard as a
//! command-line utility: exporting tabular data (CSV or a printable,
//! self-printing HTML document) and replaying recorded signature strokes
//! into a rasterized capture.
//!
//! # Responsibilities
//! - Parses CLI arguments via [`clap`] using the [`Args`] struct
//! - Loads and validates the JSON dataset or stroke log
//! - Delegates rendering to the [`output`] renderers or the [`signature`] pad
//!
//! # Output Modes
//! - CSV to stdout or `--output <file.csv>` (extension appended when missing)
//! - Printable HTML via `--format html`, optionally opened in the platform
//!   viewer with `--print`
//! - Signature PNG via the `sign` subcommand, optionally as a data URI
//!
//! # Modules
//! - [`output`] - export renderers
//! - [`signature`] - capture state machine and backing canvas

use anyhow::{Context, Result, bail};
use clap::Parser;
use signoff::cli::{Args, Command, ExportFormat};
use signoff::data::Dataset;
use signoff::output::{csv, html};
use signoff::signature::{PadEvent, PadOutcome, Point, SignaturePad};
use signoff::utils::ensure_extension;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Loads and validates a dataset from a JSON file.
fn load_dataset(path: &Path) -> Result<Dataset> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset: {}", path.display()))?;
    let dataset: Dataset = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid dataset JSON: {}", path.display()))?;
    dataset.validate()?;
    Ok(dataset)
}

/// Loads a stroke log: one array of `[x, y]` points per stroke.
fn load_strokes(path: &Path) -> Result<Vec<Vec<(f32, f32)>>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read stroke log: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid stroke log JSON: {}", path.display()))
}

/// Runs the `export` subcommand: CSV to stdout/file, or printable HTML.
fn run_export(
    input: &Path,
    format: ExportFormat,
    output: Option<String>,
    title: &str,
    subtitle: Option<&str>,
    footer: Option<&str>,
    print: bool,
) -> Result<()> {
    let dataset = load_dataset(input)?;

    match format {
        ExportFormat::Csv => {
            if let Some(filename) = output {
                csv::export(&dataset, &filename)?;
            } else {
                csv::write_delimited(&dataset, io::stdout().lock())?;
            }
        }
        ExportFormat::Html => {
            let document = html::build_document(title, subtitle, &dataset, footer);
            let path = PathBuf::from(ensure_extension(
                output.as_deref().unwrap_or("export"),
                "html",
            ));
            if print {
                html::export_and_print(&document, &path)?;
            } else {
                html::export(&document, &path)?;
            }
            println!("Output saved to: {}", path.display());
        }
    }

    Ok(())
}

/// Runs the `sign` subcommand: replays a stroke log and saves the capture.
fn run_sign(
    input: &Path,
    output: &Path,
    width: u32,
    height: u32,
    data_uri: bool,
) -> Result<()> {
    let strokes = load_strokes(input)?;

    // The replayed log is already surface-local, so the origin is zero
    let mut pad = SignaturePad::new(Point::new(0.0, 0.0), width, height);
    for stroke in &strokes {
        let mut points = stroke.iter().map(|&(x, y)| Point::new(x, y));
        if let Some(first) = points.next() {
            pad.handle(PadEvent::PointerDown(first))?;
            for point in points {
                pad.handle(PadEvent::PointerMove(point))?;
            }
            pad.handle(PadEvent::PointerUp)?;
        }
    }

    match pad.handle(PadEvent::Confirm)? {
        Some(PadOutcome::Confirmed(capture)) => {
            fs::write(output, &capture.png)
                .with_context(|| format!("Failed to write capture: {}", output.display()))?;
            println!("Signature saved to: {}", output.display());
            if data_uri {
                println!("{}", capture.data_uri());
            }
            Ok(())
        }
        _ => bail!("Stroke log contains no ink; nothing to capture"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Export {
            input,
            format,
            output,
            title,
            subtitle,
            footer,
            print,
        } => run_export(
            &input,
            format,
            output,
            &title,
            subtitle.as_deref(),
            footer.as_deref(),
            print,
        ),
        Command::Sign {
            input,
            output,
            width,
            height,
            data_uri,
        } => run_sign(&input, &output, width, height, data_uri),
    }
}
