//! Modular export system for the `signoff` application.
//!
//! This module provides a pluggable export system with different renderers
//! for turning a [`crate::data::Dataset`] into a downloadable artifact. The
//! modular design allows for easy extension with new export formats.
//!
//! # Available Renderers
//!
//! - **CSV**: machine-readable delimited text with a UTF-8 byte-order marker,
//!   consumable by spreadsheet tools
//! - **HTML**: a styled, self-printing document for the print-to-PDF path
//!
//! # Usage
//!
//! Each renderer accepts a borrowed `Dataset` that has already been validated
//! by the caller. The renderers are stateless: every export call builds its
//! artifact from scratch and hands it straight to the filesystem or the
//! platform viewer.

pub mod csv;
pub mod html;

// Re-export the main entry points for convenience

/// CSV export entry point.
///
/// See [`csv::export`] for full documentation.
pub use csv::export as export_csv;

/// Printable-document builder.
///
/// See [`html::build_document`] for full documentation.
pub use html::build_document;
