//! Schema detection and conversion facade tests, driven through real zip
//! packages on disk.

use crate::common::package_file;
use xmind_outline::package::{Package, Schema};
use xmind_outline::{convert_to_outline, load_document, ConvertError, OutlineOptions};

const JSON_DOC: &str = r#"{"sheets": [{"title": "FromJson", "rootTopic": {"title": "Goal"}}]}"#;
const XML_DOC: &str =
    r#"<content><sheet><title>FromXml</title><topic><title>Goal</title></topic></sheet></content>"#;

#[test]
fn json_entry_is_preferred_over_xml() {
    // The xml entry is deliberately broken: detection must never probe
    // entry contents, so the conversion still succeeds through json.
    let (_dir, path) = package_file(&[
        ("content.json", JSON_DOC),
        ("content.xml", "<broken"),
    ]);
    let doc = load_document(&path).expect("convert via json pipeline");
    assert_eq!(doc.sheets[0].title.as_deref(), Some("FromJson"));
}

#[test]
fn xml_entry_is_used_when_json_is_absent() {
    let (_dir, path) = package_file(&[("content.xml", XML_DOC), ("metadata.json", "{}")]);
    let doc = load_document(&path).expect("convert via xml pipeline");
    assert_eq!(doc.sheets[0].title.as_deref(), Some("FromXml"));
}

#[test]
fn schema_detection_is_name_only() {
    let (_dir, path) = package_file(&[("content.json", "{definitely not json")]);
    let package = Package::open(&path).expect("open");
    assert_eq!(package.detect_schema().unwrap(), Schema::AttributeTree);
}

#[test]
fn package_without_recognized_entries_is_unsupported() {
    let (_dir, path) = package_file(&[("manifest.xml", "<manifest/>"), ("styles.xml", "<s/>")]);
    assert_eq!(
        load_document(&path).unwrap_err(),
        ConvertError::UnsupportedFormat
    );
}

#[test]
fn missing_input_reports_not_found() {
    let err = convert_to_outline(
        std::path::Path::new("/no/such/map.xmind"),
        None,
        &OutlineOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, ConvertError::NotFound(_)));
}

#[test]
fn non_zip_input_reports_an_archive_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("map.xmind");
    std::fs::write(&path, "this is not a zip archive").expect("write file");
    assert!(matches!(
        load_document(&path).unwrap_err(),
        ConvertError::Archive(_)
    ));
}

#[test]
fn facade_returns_text_and_persists_when_asked() {
    let (_dir, path) = package_file(&[("content.json", JSON_DOC)]);
    let out = path.with_extension("md");

    let text = convert_to_outline(&path, Some(&out), &OutlineOptions::default())
        .expect("conversion succeeds");
    assert_eq!(text, "# FromJson\n## Goal\n");
    assert_eq!(std::fs::read_to_string(&out).expect("output file"), text);
}

#[test]
fn hard_failure_writes_no_output() {
    let (_dir, path) = package_file(&[("something.bin", "xx")]);
    let out = path.with_extension("md");

    let err = convert_to_outline(&path, Some(&out), &OutlineOptions::default()).unwrap_err();
    assert_eq!(err, ConvertError::UnsupportedFormat);
    assert!(!out.exists());
}

#[test]
fn end_to_end_xml_pipeline_renders_markers_and_children() {
    let xml = r#"<xmap-content xmlns="urn:xmind:xmap:xmlns:content:2.0"
                     xmlns:xlink="http://www.w3.org/1999/xlink">
        <sheet>
            <title>Trip</title>
            <topic>
                <title>Itinerary</title>
                <children>
                    <topics type="attached">
                        <topic xlink:href="http://maps.example">
                            <title>Day 1</title>
                            <markers><marker marker-id="flag-green"/></markers>
                        </topic>
                    </topics>
                </children>
            </topic>
        </sheet>
    </xmap-content>"#;
    let (_dir, path) = package_file(&[("content.xml", xml)]);
    let text = convert_to_outline(&path, None, &OutlineOptions::default()).expect("convert");
    assert_eq!(
        text,
        "# Trip\n## Itinerary\n- [Day 1](http://maps.example) <flag-green>\n"
    );
}
