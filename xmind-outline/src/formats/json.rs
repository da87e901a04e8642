//! Attribute-tree normalizer (XMind Zen/2020, `content.json`)
//!
//! The modern schema is a nested key-value document whose field shapes
//! drifted across producer versions. Every extraction function here performs
//! one ordered set of shape tests at its entry point and falls through to an
//! empty default when nothing matches; only the document's top level is
//! allowed to hard-fail.
//!
//! # Library Choice
//!
//! Parsed into `serde_json::Value` rather than typed structs: the whole point
//! of this layer is tolerating shapes that don't match a fixed schema.

use crate::error::ConvertError;
use crate::model::{normalize_note, Document, Sheet, Topic};
use serde_json::Value;

/// Parse a `content.json` document into the canonical tree.
pub fn parse_document(source: &str) -> Result<Document, ConvertError> {
    let data: Value = serde_json::from_str(source)
        .map_err(|e| ConvertError::Parse(format!("JSON parsing error: {e}")))?;
    let sheets = top_level_sheets(&data)?;
    Ok(Document {
        sheets: sheets.into_iter().map(parse_sheet).collect(),
    })
}

/// Resolve the three admissible top-level forms, in order:
/// `{"sheets": [...]}`, a single sheet-shaped object (has `rootTopic`),
/// or a bare array of sheet-shaped objects.
fn top_level_sheets(data: &Value) -> Result<Vec<&Value>, ConvertError> {
    if let Some(object) = data.as_object() {
        if let Some(sheets) = object.get("sheets") {
            return sheets
                .as_array()
                .map(|items| items.iter().collect())
                .ok_or_else(|| ConvertError::Structure("'sheets' is not an array".to_string()));
        }
        if object.contains_key("rootTopic") {
            return Ok(vec![data]);
        }
    } else if let Some(items) = data.as_array() {
        return Ok(items.iter().collect());
    }
    Err(ConvertError::Structure(
        "unrecognized top-level shape in content.json".to_string(),
    ))
}

fn parse_sheet(value: &Value) -> Sheet {
    let title = value
        .get("title")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .map(str::to_string);
    // A missing rootTopic still yields an (empty) root in this pipeline.
    let root = parse_topic(value.get("rootTopic").unwrap_or(&Value::Null));
    Sheet {
        title,
        root: Some(root),
    }
}

/// Normalize one topic node, recursively. Any individually malformed field
/// resolves to its empty default; a non-object node yields an empty topic.
fn parse_topic(value: &Value) -> Topic {
    Topic {
        title: title(value),
        hyperlink: hyperlink(value),
        labels: labels(value),
        markers: markers(value),
        note: note(value),
        children: children(value),
    }
}

fn title(value: &Value) -> String {
    match value.get("title") {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => String::new(),
        // Odd producers emit scalar titles; coerce them to text.
        Some(other) => other.to_string(),
    }
}

fn hyperlink(value: &Value) -> Option<String> {
    ["hyperlink", "href"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(Value::as_str))
        .find(|link| !link.is_empty())
        .map(str::to_string)
}

/// Labels come either as `{"labels": [...]}` or wrapped one level deeper as
/// `{"labels": {"labels": [...]}}`. Every element is coerced to text.
fn labels(value: &Value) -> Vec<String> {
    let list = match value.get("labels") {
        Some(Value::Array(items)) => Some(items),
        Some(Value::Object(wrapper)) => wrapper.get("labels").and_then(Value::as_array),
        _ => None,
    };
    list.map(|items| items.iter().map(coerce_text).collect())
        .unwrap_or_default()
}

/// Direct markers (`markers`: bare strings or objects keyed `markerId`,
/// `id`, or `marker-id`) followed by marker references (`marker-refs` or
/// `markerRefs`: objects keyed `markerId` or `id`), in that order.
fn markers(value: &Value) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(items) = value.get("markers").and_then(Value::as_array) {
        for item in items {
            match item {
                Value::String(id) => out.push(id.clone()),
                Value::Object(_) => {
                    if let Some(id) = marker_id(item, &["markerId", "id", "marker-id"]) {
                        out.push(id);
                    }
                }
                _ => {}
            }
        }
    }
    let refs = value.get("marker-refs").or_else(|| value.get("markerRefs"));
    if let Some(items) = refs.and_then(Value::as_array) {
        for item in items {
            if let Some(id) = marker_id(item, &["markerId", "id"]) {
                out.push(id);
            }
        }
    }
    out
}

fn marker_id(item: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| item.get(*key).and_then(Value::as_str))
        .find(|id| !id.is_empty())
        .map(str::to_string)
}

/// Common shape is `{"notes": {"plain": {"content": "..."}}}`; a bare string
/// note is tolerated too. Anything else is an empty note, not an error.
fn note(value: &Value) -> String {
    match value.get("notes") {
        Some(Value::String(text)) => normalize_note(text),
        Some(Value::Object(notes)) => notes
            .get("plain")
            .and_then(Value::as_object)
            .and_then(|plain| plain.get("content"))
            .and_then(Value::as_str)
            .map(normalize_note)
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// `{"children": {"attached": [...], "detached": [...]}}` flattened with
/// attached groups first. Missing container or sequences mean no children.
fn children(value: &Value) -> Vec<Topic> {
    let mut out = Vec::new();
    if let Some(container) = value.get("children").and_then(Value::as_object) {
        for group in ["attached", "detached"] {
            if let Some(items) = container.get(group).and_then(Value::as_array) {
                out.extend(items.iter().map(parse_topic));
            }
        }
    }
    out
}

fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
