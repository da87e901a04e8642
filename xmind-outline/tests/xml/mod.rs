//! Element-tree normalizer tests (content.xml pipeline)

use xmind_outline::formats::xml::parse_document;
use xmind_outline::ConvertError;

const LEGACY_DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xmap-content xmlns="urn:xmind:xmap:xmlns:content:2.0"
              xmlns:xlink="http://www.w3.org/1999/xlink" version="2.0">
  <sheet>
    <title>Plan</title>
    <topic xlink:href="http://example.com/root">
      <title>Goal</title>
      <notes><plain>root note</plain></notes>
      <labels>
        <label>tag one</label>
        <label>   </label>
        <label>tag two</label>
      </labels>
      <markers>
        <marker marker-id="priority-1"/>
        <marker markerId="flag-red"/>
        <marker id="star"/>
        <marker/>
      </markers>
      <children>
        <topics type="attached">
          <topic><title>a1</title></topic>
          <topic><title>a2</title></topic>
        </topics>
        <topics type="detached">
          <topic><title>d1</title></topic>
        </topics>
      </children>
    </topic>
  </sheet>
  <sheet>
    <topic><title>Second Root</title></topic>
  </sheet>
  <sheet>
    <title>Rootless</title>
  </sheet>
</xmap-content>
"#;

#[test]
fn sheets_keep_source_order_and_defaults() {
    let doc = parse_document(LEGACY_DOC).expect("parse");
    assert_eq!(doc.sheets.len(), 3);
    assert_eq!(doc.sheets[0].title.as_deref(), Some("Plan"));
    assert_eq!(doc.sheets[1].title.as_deref(), Some("Untitled Sheet"));
    assert_eq!(doc.sheets[2].title.as_deref(), Some("Rootless"));
    assert!(doc.sheets[2].root.is_none());
}

#[test]
fn topic_fields_are_extracted_by_local_name() {
    let doc = parse_document(LEGACY_DOC).expect("parse");
    let root = doc.sheets[0].root.as_ref().expect("root topic");

    assert_eq!(root.title, "Goal");
    assert_eq!(root.hyperlink.as_deref(), Some("http://example.com/root"));
    assert_eq!(root.note, "root note");
    // Whitespace-only label is dropped, order preserved.
    assert_eq!(root.labels, ["tag one", "tag two"]);
    // All three marker-id spellings accepted; attribute-less marker dropped.
    assert_eq!(root.markers, ["priority-1", "flag-red", "star"]);
}

#[test]
fn children_flatten_groups_in_encounter_order() {
    let doc = parse_document(LEGACY_DOC).expect("parse");
    let root = doc.sheets[0].root.as_ref().expect("root topic");
    let titles: Vec<&str> = root
        .children
        .iter()
        .map(|child| child.title.as_str())
        .collect();
    assert_eq!(titles, ["a1", "a2", "d1"]);
}

#[test]
fn bare_href_attribute_is_accepted_too() {
    let doc = parse_document(
        r#"<content><sheet><topic href="http://plain.example"><title>t</title></topic></sheet></content>"#,
    )
    .expect("parse");
    let root = doc.sheets[0].root.as_ref().expect("root topic");
    assert_eq!(root.hyperlink.as_deref(), Some("http://plain.example"));
}

#[test]
fn missing_wrappers_mean_empty_fields_not_errors() {
    let doc = parse_document(r#"<content><sheet><topic/></sheet></content>"#).expect("parse");
    let root = doc.sheets[0].root.as_ref().expect("root topic");
    assert_eq!(root.title, "");
    assert_eq!(root.hyperlink, None);
    assert!(root.labels.is_empty());
    assert!(root.markers.is_empty());
    assert_eq!(root.note, "");
    assert!(root.children.is_empty());
}

#[test]
fn notes_require_the_plain_grandchild() {
    let doc = parse_document(
        r#"<content><sheet><topic><notes><html>rich only</html></notes></topic></sheet></content>"#,
    )
    .expect("parse");
    assert_eq!(doc.sheets[0].root.as_ref().unwrap().note, "");
}

#[test]
fn note_whitespace_is_normalized() {
    let doc = parse_document(
        "<content><sheet><topic><notes><plain>  first  \nsecond\t\n</plain></notes></topic></sheet></content>",
    )
    .expect("parse");
    assert_eq!(doc.sheets[0].root.as_ref().unwrap().note, "first\nsecond");
}

#[test]
fn invalid_xml_is_a_parse_error() {
    assert!(matches!(
        parse_document("<content><sheet>"),
        Err(ConvertError::Parse(_))
    ));
}

#[test]
fn document_without_sheets_yields_an_empty_document() {
    let doc = parse_document("<content/>").expect("parse");
    assert!(doc.sheets.is_empty());
}
