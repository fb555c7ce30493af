use embridge_io::bridge::{RenderHtml, from_html, to_html};
use embridge_io::core::Document;
use embridge_io::metadata::{MARKER_PREFIX, strip};

/// Stand-in for the host's real renderer.
struct StubRenderer;

impl RenderHtml for StubRenderer {
    fn render(&self, _document: &Document) -> String {
        "<div><h1>Rendered</h1><p>Body</p></div>".to_string()
    }
}

fn fixture_document() -> Document {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("document.json");

    let json = std::fs::read_to_string(&path).expect("fixtures/document.json must exist");
    serde_json::from_str(&json).expect("fixture must parse")
}

#[test]
fn to_html_exposes_both_forms() {
    let doc = fixture_document();
    let export = to_html(&StubRenderer, &doc).unwrap();

    assert_eq!(export.clean, StubRenderer.render(&doc));
    assert!(export.with_metadata.starts_with(MARKER_PREFIX));
    assert!(export.with_metadata.ends_with(&export.clean));
}

#[test]
fn outgoing_then_incoming_is_lossless() {
    let doc = fixture_document();
    let export = to_html(&StubRenderer, &doc).unwrap();

    assert_eq!(from_html(&export.with_metadata), doc);
}

#[test]
fn embedded_token_is_authoritative_over_the_markup() {
    // The fixture document has a container with two children; the
    // markup after the marker describes something else entirely.
    let doc = fixture_document();
    let html = embridge_io::metadata::embed("<h1>Completely unrelated</h1>", &doc).unwrap();

    let restored = from_html(&html);
    assert_eq!(restored, doc);
    assert_eq!(
        restored.children_of("container-1").unwrap(),
        ["text-1", "image-1"]
    );
}

#[test]
fn strip_of_the_export_restores_the_clean_form() {
    let doc = fixture_document();
    let export = to_html(&StubRenderer, &doc).unwrap();

    assert_eq!(strip(&export.with_metadata), export.clean);
}
