//! Markdown outline renderer
//!
//! Walks the canonical topic tree and emits an ordered sequence of text
//! lines: a `#` heading per sheet, a `##` heading for the sheet's root
//! topic, then nested bullets (two spaces of indent per depth level) for
//! the descendants, with notes as blockquote lines underneath their topic.
//!
//! Depth limiting lives here and only here; the model layer is
//! depth-agnostic.

use crate::model::{normalize_note, Document, Topic};

/// Rendering knobs recognized by the outline renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineOptions {
    /// Include note blocks (default true).
    pub notes: bool,
    /// Include label tags (default true).
    pub labels: bool,
    /// Include marker tags (default true).
    pub markers: bool,
    /// Maximum rendered depth; `Some(0)` keeps only the direct children of
    /// each sheet root. `None` means unlimited.
    pub max_depth: Option<usize>,
}

impl Default for OutlineOptions {
    fn default() -> Self {
        OutlineOptions {
            notes: true,
            labels: true,
            markers: true,
            max_depth: None,
        }
    }
}

/// Render a document to the final outline text: lines joined with `\n`,
/// trailing whitespace stripped, exactly one final newline.
pub fn render(doc: &Document, options: &OutlineOptions) -> String {
    let lines = render_lines(doc, options);
    format!("{}\n", lines.join("\n").trim_end())
}

/// Render a document to an ordered sequence of lines.
pub fn render_lines(doc: &Document, options: &OutlineOptions) -> Vec<String> {
    let mut lines = Vec::new();
    for (index, sheet) in doc.sheets.iter().enumerate() {
        let sheet_title = sheet
            .title
            .as_deref()
            .filter(|title| !title.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Sheet {}", index + 1));
        lines.push(format!("# {sheet_title}"));

        let Some(root) = &sheet.root else {
            lines.push("_(No root topic found)_".to_string());
            lines.push(String::new());
            continue;
        };

        // Sheet and root headings are emitted verbatim, unescaped.
        let root_title = if root.title.is_empty() {
            "Root"
        } else {
            root.title.as_str()
        };
        lines.push(format!("## {root_title}"));
        if options.notes {
            push_note_lines(&mut lines, &root.note, 0);
        }
        for child in &root.children {
            push_topic(&mut lines, child, 0, options);
        }
        // Blank separator line between sheets.
        lines.push(String::new());
    }
    lines
}

fn push_topic(lines: &mut Vec<String>, topic: &Topic, depth: usize, options: &OutlineOptions) {
    if let Some(limit) = options.max_depth {
        // The whole subtree is skipped, not just this node's line.
        if depth > limit {
            return;
        }
    }
    lines.push(format!("{}- {}", indent(depth), format_item(topic, options)));
    if options.notes {
        push_note_lines(lines, &topic.note, depth);
    }
    for child in &topic.children {
        push_topic(lines, child, depth + 1, options);
    }
}

/// Escaped title (link-wrapped when a hyperlink is present), then labels as
/// inline code spans, then markers in angle brackets.
fn format_item(topic: &Topic, options: &OutlineOptions) -> String {
    let mut item = if topic.title.is_empty() {
        "(untitled)".to_string()
    } else {
        escape_markdown(&topic.title)
    };
    if let Some(url) = &topic.hyperlink {
        // A literal ')' in the destination would end the link early.
        let safe_url = url.replace(')', "\\)");
        item = format!("[{item}]({safe_url})");
    }
    let mut tags = Vec::new();
    if options.labels {
        for label in &topic.labels {
            let label = label.trim();
            if !label.is_empty() {
                tags.push(format!("`{}`", escape_markdown(label)));
            }
        }
    }
    if options.markers {
        for marker in &topic.markers {
            let marker = marker.trim();
            if !marker.is_empty() {
                tags.push(format!("<{}>", escape_markdown(marker)));
            }
        }
    }
    if !tags.is_empty() {
        item.push(' ');
        item.push_str(&tags.join(" "));
    }
    item
}

/// Notes render as a blockquote one level deeper than their topic's bullet;
/// blank note lines become a bare `>` with no trailing space.
fn push_note_lines(lines: &mut Vec<String>, note: &str, depth: usize) {
    let note = normalize_note(note);
    if note.is_empty() {
        return;
    }
    for line in note.split('\n') {
        if line.trim().is_empty() {
            lines.push(format!("{}>", indent(depth + 1)));
        } else {
            lines.push(format!("{}> {line}", indent(depth + 1)));
        }
    }
}

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

/// Escape Markdown special characters lightly to avoid broken formatting.
///
/// Applied exactly once per rendered field; escaping already-escaped text
/// will double-escape.
fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '[' | ']' | '(' | ')' | '*' | '_' | '#') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
