use embridge_core::model::{Block, Document, ROOT_ID};
use embridge_core::validate::validate_document;
use embridge_import::importer::{PASSTHROUGH_ID, import, import_with_report, passthrough_document};

fn passthrough_contents(doc: &Document) -> &str {
    match doc.get(PASSTHROUGH_ID).unwrap() {
        Block::Html(data) => &data.props.contents,
        other => panic!("expected Html, got {}", other.type_name()),
    }
}

#[test]
fn empty_input_yields_a_passthrough_document() {
    let doc = import("");

    assert_eq!(doc.children_of(ROOT_ID).unwrap(), [PASSTHROUGH_ID]);
    assert_eq!(passthrough_contents(&doc), "");
    assert_eq!(validate_document(&doc), Ok(()));
}

#[test]
fn plain_text_body_is_preserved_verbatim() {
    let html = "just some words, no markup at all";
    let doc = import(html);

    assert_eq!(passthrough_contents(&doc), html);
}

#[test]
fn stray_closing_tag_is_preserved_verbatim() {
    let html = "</div>";
    let doc = import(html);

    assert_eq!(passthrough_contents(&doc), html);
}

#[test]
fn malformed_markup_never_loses_the_input() {
    let html = "<<<not <html> at >> all <";
    let doc = import(html);

    assert!(!doc.children_of(ROOT_ID).unwrap().is_empty());
    assert_eq!(validate_document(&doc), Ok(()));
}

#[test]
fn passthrough_document_matches_the_import_fallback() {
    assert_eq!(passthrough_document("</div>"), import("</div>"));
}

#[test]
fn report_counts_mapped_blocks() {
    let (_, report) = import_with_report("<h1>A</h1><p>B</p><p>C</p>");

    assert_eq!(report.elements_visited, 3);
    assert_eq!(report.dropped_elements, 0);
    assert!(!report.used_passthrough);
    assert_eq!(report.blocks_by_type.get("Heading"), Some(&1));
    assert_eq!(report.blocks_by_type.get("Text"), Some(&2));
    assert_eq!(report.blocks_total(), 3);
}

#[test]
fn report_flags_the_passthrough_path() {
    let (_, report) = import_with_report("<span>nothing mappable</span>");

    assert_eq!(report.elements_visited, 1);
    assert_eq!(report.dropped_elements, 1);
    assert!(report.used_passthrough);
    assert_eq!(report.blocks_by_type.get("Html"), Some(&1));
}

#[test]
fn report_serializes_deterministically() {
    let (_, a) = import_with_report("<h1>A</h1><span>x</span>");
    let (_, b) = import_with_report("<h1>A</h1><span>x</span>");

    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}
