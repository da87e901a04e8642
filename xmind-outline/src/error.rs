//! Error types for package conversion

use std::fmt;

/// Errors that can occur while converting an XMind package.
///
/// Only structural failures are surfaced as errors. Malformed fields inside
/// an individual topic (missing titles, oddly shaped notes, etc.) resolve to
/// empty values so that partially broken documents still produce an outline.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Input path does not exist
    NotFound(String),
    /// Archive contains neither content.json nor content.xml
    UnsupportedFormat,
    /// Failure opening or reading the zip container
    Archive(String),
    /// Syntax error in the embedded JSON or XML document
    Parse(String),
    /// The modern document's top level matches none of the admissible shapes
    Structure(String),
    /// Failure writing the rendered output
    Io(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::NotFound(path) => write!(f, "Input file not found: {path}"),
            ConvertError::UnsupportedFormat => write!(
                f,
                "This package doesn't contain content.json or content.xml"
            ),
            ConvertError::Archive(msg) => write!(f, "Archive error: {msg}"),
            ConvertError::Parse(msg) => write!(f, "Parse error: {msg}"),
            ConvertError::Structure(msg) => write!(f, "Structure error: {msg}"),
            ConvertError::Io(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
