//! Conversion facade
//!
//! The single externally callable operation of the core: open the package,
//! pick the parsing pipeline, build the canonical tree, render it, and
//! optionally persist the result. Single-threaded, synchronous, no retries;
//! each call constructs and discards its own [`Document`].

use crate::error::ConvertError;
use crate::formats;
use crate::model::Document;
use crate::outline::{self, OutlineOptions};
use crate::package::{Package, Schema};
use std::fs;
use std::path::Path;

/// Convert an XMind package to a Markdown outline; returns the outline text.
///
/// When `output` is given the text is also written there as UTF-8. Hard
/// failures (missing input, unrecognized package, broken top-level
/// structure) abort with no output written.
pub fn convert_to_outline(
    input: &Path,
    output: Option<&Path>,
    options: &OutlineOptions,
) -> Result<String, ConvertError> {
    let document = load_document(input)?;
    let text = outline::render(&document, options);
    if let Some(path) = output {
        fs::write(path, &text)
            .map_err(|e| ConvertError::Io(format!("cannot write '{}': {e}", path.display())))?;
    }
    Ok(text)
}

/// Open the package and normalize it into the canonical topic tree.
///
/// The archive handle is scoped to detection plus the single entry read and
/// is released on every exit path, including parse failure.
pub fn load_document(input: &Path) -> Result<Document, ConvertError> {
    let mut package = Package::open(input)?;
    let schema = package.detect_schema()?;
    let source = package.read_entry(schema.entry_name())?;
    match schema {
        Schema::AttributeTree => formats::json::parse_document(&source),
        Schema::ElementTree => formats::xml::parse_document(&source),
    }
}
