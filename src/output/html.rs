//! Printable-document renderer.
//!
//! This module builds a self-contained styled HTML document from a
//! [`Dataset`]: a header block with title, optional subtitle, brand line and
//! current date, a zebra-striped table of the data, and a footer line. The
//! document carries an on-load script that invokes the platform print dialog,
//! so opening it in a viewer is enough to reach print-to-PDF.
//!
//! Printing itself is fire-and-forget: once the viewer has been launched
//! there is no feedback channel, and a cancelled print dialog is not
//! observable from here.

use crate::data::Dataset;
use crate::utils::{default_footer, header_date};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Brand line shown under the document title.
const BRAND: &str = "signoff";

/// Escapes a string for safe embedding in HTML text content or attributes.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Builds the complete printable document as an HTML string.
///
/// # Arguments
/// * `title` - Document title shown in the header block and the tab title
/// * `subtitle` - Optional subtitle under the title; omitted entirely if None
/// * `dataset` - Pre-validated headers and rows to render as a table
/// * `footer` - Optional footer line; defaults to a generated timestamp
///
/// # Returns
/// * `String` - A self-contained document; no external assets are referenced
pub fn build_document(
    title: &str,
    subtitle: Option<&str>,
    dataset: &Dataset,
    footer: Option<&str>,
) -> String {
    let footer_line = footer.map(str::to_string).unwrap_or_else(default_footer);

    let mut doc = String::new();
    doc.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(doc, "<title>{}</title>", escape_html(title));
    doc.push_str(
        "<style>\n\
         body { font-family: sans-serif; margin: 2rem; color: #222; }\n\
         header { border-bottom: 2px solid #444; margin-bottom: 1rem; }\n\
         h1 { margin-bottom: 0; }\n\
         .subtitle { color: #555; margin: 0.25rem 0; }\n\
         .meta { color: #777; font-size: 0.85rem; }\n\
         table { border-collapse: collapse; width: 100%; }\n\
         th, td { border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }\n\
         th { background: #eee; }\n\
         tbody tr:nth-child(even) { background: #f7f7f7; }\n\
         footer { margin-top: 1rem; color: #777; font-size: 0.85rem; }\n\
         </style>\n</head>\n<body>\n",
    );

    // Header block: title, optional subtitle, brand and date
    doc.push_str("<header>\n");
    let _ = writeln!(doc, "<h1>{}</h1>", escape_html(title));
    if let Some(subtitle) = subtitle {
        let _ = writeln!(doc, "<p class=\"subtitle\">{}</p>", escape_html(subtitle));
    }
    let _ = writeln!(
        doc,
        "<p class=\"meta\">{} &middot; {}</p>",
        BRAND,
        header_date()
    );
    doc.push_str("</header>\n");

    // Data table
    doc.push_str("<table>\n<thead>\n<tr>");
    for header in &dataset.headers {
        let _ = write!(doc, "<th>{}</th>", escape_html(header));
    }
    doc.push_str("</tr>\n</thead>\n<tbody>\n");
    for row in &dataset.rows {
        doc.push_str("<tr>");
        for cell in row {
            let _ = write!(doc, "<td>{}</td>", escape_html(cell));
        }
        doc.push_str("</tr>\n");
    }
    doc.push_str("</tbody>\n</table>\n");

    let _ = writeln!(doc, "<footer>{}</footer>", escape_html(&footer_line));

    // Trigger the print dialog once the document has finished loading
    doc.push_str(
        "<script>window.addEventListener('load', function () { window.print(); });</script>\n",
    );
    doc.push_str("</body>\n</html>\n");
    doc
}

/// Writes a built document to disk.
///
/// # Arguments
/// * `document` - Output of [`build_document`]
/// * `path` - Target file path
pub fn export(document: &str, path: &Path) -> Result<()> {
    fs::write(path, document)
        .with_context(|| format!("Failed to write document: {}", path.display()))
}

/// Writes a built document to disk and opens it in the platform viewer,
/// which triggers the embedded print-on-load script.
///
/// If the viewer cannot be launched the written file is removed before the
/// error is returned, so no partial artifact remains.
///
/// # Arguments
/// * `document` - Output of [`build_document`]
/// * `path` - Target file path handed to the viewer
pub fn export_and_print(document: &str, path: &Path) -> Result<()> {
    export(document, path)?;

    if let Err(err) = open::that(path) {
        let _ = fs::remove_file(path);
        return Err(err).with_context(|| {
            format!(
                "Could not open a viewer for {}; printable export aborted",
                path.display()
            )
        });
    }

    Ok(())
}
