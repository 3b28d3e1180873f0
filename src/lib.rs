//! Library crate for signoff
//!
//! This exposes the modules needed for testing and potential library usage.
//!
//! # Features
//!
//! - **Export Renderers**: Turn a tabular dataset into delimited text with a
//!   byte-order marker or into a styled, self-printing document
//! - **Signature Capture**: An explicit state machine recording freehand
//!   strokes onto a 2x backing raster and snapshotting them as PNG
//! - **Utilities**: Duration formatting and filename helpers shared by the
//!   renderers and the CLI
//!
//! # Modules
//!
//! - [`data`]: Core data structures (`Dataset`)
//! - [`cli`]: Command-line interface definitions
//! - [`output`]: Modular export renderers (CSV, printable HTML)
//! - [`signature`]: Signature capture pad and backing canvas
//! - [`utils`]: Duration and filename helpers

pub mod cli;
pub mod data;
pub mod output;
pub mod signature;
pub mod utils;

pub use cli::Args;
pub use data::Dataset;
pub use signature::{CaptureResult, PadEvent, PadOutcome, PadState, Point, SignaturePad};
