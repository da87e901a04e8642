//! Canonical topic tree
//!
//! Both normalizers (attribute tree and element tree) reduce their source
//! encoding to this one representation, which is the only thing the outline
//! renderer ever sees. The model is deliberately depth-agnostic: depth
//! limiting is a rendering concern, not a model concern.

/// One node of the mind map.
///
/// A topic is immutable once constructed; normalization builds the tree
/// bottom-up and never mutates a previously returned topic. Attached and
/// detached child groupings from the source are flattened into `children`
/// (attached first), with no marker distinguishing them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Topic {
    /// Topic text; empty titles render as a placeholder.
    pub title: String,
    /// Optional URI attached to the topic.
    pub hyperlink: Option<String>,
    /// Free-text tags, source order, duplicates kept.
    pub labels: Vec<String>,
    /// Opaque marker identifiers (icons/status tags), source order.
    pub markers: Vec<String>,
    /// Whitespace-normalized note text; empty means "no note".
    pub note: String,
    /// Child topics in source order, attached groups before detached ones.
    pub children: Vec<Topic>,
}

/// One page of the mind map.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sheet {
    /// Sheet title; `None` (and empty) falls back to "Sheet {index}".
    pub title: Option<String>,
    /// Root topic. Absent only in malformed legacy documents.
    pub root: Option<Topic>,
}

/// An ordered sequence of sheets, nothing more.
///
/// Built fresh per conversion call, held for the duration of rendering,
/// then discarded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub sheets: Vec<Sheet>,
}

/// Normalize note text: strip spaces/tabs before each newline, then trim
/// leading/trailing whitespace of the whole block. Interior blank lines are
/// preserved.
pub(crate) fn normalize_note(text: &str) -> String {
    let stripped: Vec<&str> = text
        .split('\n')
        .map(|line| line.trim_end_matches([' ', '\t']))
        .collect();
    stripped.join("\n").trim().to_string()
}
