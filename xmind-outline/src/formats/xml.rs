//! Element-tree normalizer (XMind 8, `content.xml`)
//!
//! The legacy schema is a namespaced markup document, but producers mix
//! default and `xlink`-style namespaces inconsistently. All element and
//! attribute matching therefore goes through local names only, centralized
//! in [`find_child`] / [`find_children`] / [`attr_local`] rather than
//! repeated inline.
//!
//! # Library Choice
//!
//! We use `roxmltree` for the read-only DOM walk: the whole document fits in
//! memory, and node-by-node inspection maps directly onto the defensive
//! per-field extraction this layer needs.

use crate::error::ConvertError;
use crate::model::{normalize_note, Document, Sheet, Topic};
use roxmltree::Node;

/// Parse a `content.xml` document into the canonical tree.
pub fn parse_document(source: &str) -> Result<Document, ConvertError> {
    let doc = roxmltree::Document::parse(source)
        .map_err(|e| ConvertError::Parse(format!("XML parsing error: {e}")))?;
    let sheets = find_children(doc.root_element(), "sheet")
        .map(parse_sheet)
        .collect();
    Ok(Document { sheets })
}

fn parse_sheet(node: Node) -> Sheet {
    let title = element_text(find_child(node, "title"));
    let title = if title.is_empty() {
        "Untitled Sheet".to_string()
    } else {
        title
    };
    Sheet {
        title: Some(title),
        // Malformed legacy sheets really can lack a root topic.
        root: find_child(node, "topic").map(parse_topic),
    }
}

fn parse_topic(node: Node) -> Topic {
    Topic {
        title: element_text(find_child(node, "title")),
        hyperlink: hyperlink(node),
        labels: labels(node),
        markers: markers(node),
        note: note(node),
        children: children(node),
    }
}

/// XMind 8 writes the link as `xlink:href`, sometimes with the namespace
/// spelled out and sometimes bare. Local-name matching covers all spellings.
fn hyperlink(node: Node) -> Option<String> {
    attr_local(node, &["href"])
        .filter(|link| !link.is_empty())
        .map(str::to_string)
}

/// `<labels><label>…</label></labels>`; empty entries dropped.
fn labels(node: Node) -> Vec<String> {
    let Some(wrapper) = find_child(node, "labels") else {
        return Vec::new();
    };
    find_children(wrapper, "label")
        .map(|label| element_text(Some(label)))
        .filter(|text| !text.is_empty())
        .collect()
}

/// `<markers><marker marker-id="…"/></markers>`, with `markerId` and `id`
/// as alternate attribute spellings.
fn markers(node: Node) -> Vec<String> {
    let Some(wrapper) = find_child(node, "markers") else {
        return Vec::new();
    };
    find_children(wrapper, "marker")
        .filter_map(|marker| attr_local(marker, &["marker-id", "markerId", "id"]))
        .map(str::to_string)
        .collect()
}

/// `<notes><plain>…</plain></notes>`; empty when either level is absent.
fn note(node: Node) -> String {
    let plain = find_child(node, "notes").and_then(|notes| find_child(notes, "plain"));
    normalize_note(&element_text(plain))
}

/// `<children>` wraps one or more `<topics type="attached|detached">`
/// groups; every `<topic>` across all groups is included, group order as
/// encountered, then node order within a group.
fn children(node: Node) -> Vec<Topic> {
    let Some(wrapper) = find_child(node, "children") else {
        return Vec::new();
    };
    find_children(wrapper, "topics")
        .flat_map(|group| find_children(group, "topic"))
        .map(parse_topic)
        .collect()
}

/// First element child whose local name matches, ignoring any namespace.
fn find_child<'a, 'i>(node: Node<'a, 'i>, name: &str) -> Option<Node<'a, 'i>> {
    node.children()
        .find(|child| child.is_element() && child.tag_name().name() == name)
}

/// All element children whose local name matches, ignoring any namespace.
fn find_children<'a, 'i>(
    node: Node<'a, 'i>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'i>> {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == name)
}

/// First attribute whose local name matches one of `names`, in that
/// priority order, ignoring any namespace prefix.
fn attr_local<'a, 'i>(node: Node<'a, 'i>, names: &[&str]) -> Option<&'a str> {
    names.iter().find_map(|name| {
        node.attributes()
            .find(|attr| attr.name() == *name)
            .map(|attr| attr.value())
    })
}

fn element_text(node: Option<Node>) -> String {
    node.and_then(|n| n.text()).unwrap_or("").trim().to_string()
}
