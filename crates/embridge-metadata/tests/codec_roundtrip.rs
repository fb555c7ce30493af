use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use embridge_core::model::Document;
use embridge_metadata::codec::{DecodeError, decode, encode};

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
fn decode_inverts_encode() {
    let doc = fixture_document();
    let token = encode(&doc).unwrap();
    let decoded = decode(&token).unwrap();
    assert_eq!(decoded, doc);
}

#[test]
fn encode_is_deterministic() {
    let doc = fixture_document();
    assert_eq!(encode(&doc).unwrap(), encode(&doc).unwrap());
}

#[test]
fn token_is_comment_safe() {
    let token = encode(&fixture_document()).unwrap();
    assert!(!token.contains("-->"));
    assert!(!token.contains('-'));
    assert!(token.chars().all(|c| !c.is_control()));
}

#[test]
fn non_base64_token_fails() {
    let err = decode("@@@ not a token @@@").unwrap_err();
    assert!(matches!(err, DecodeError::InvalidToken(_)), "{err}");
}

#[test]
fn non_json_payload_fails() {
    let token = BASE64.encode("certainly not json");
    let err = decode(&token).unwrap_err();
    assert!(matches!(err, DecodeError::InvalidJson(_)), "{err}");
}

#[test]
fn wrong_shape_fails_before_validation() {
    let token = BASE64.encode(r#"{"root":{"type":"Teleport","data":{}}}"#);
    let err = decode(&token).unwrap_err();
    assert!(matches!(err, DecodeError::InvalidJson(_)), "{err}");
}

#[test]
fn document_without_root_fails_validation() {
    let token = BASE64.encode(r#"{"text-1":{"type":"Text","data":{"style":{},"props":{"text":"x"}}}}"#);
    let err = decode(&token).unwrap_err();
    assert!(matches!(err, DecodeError::MalformedDocument(_)), "{err}");
}

#[test]
fn dangling_child_fails_validation() {
    let json = r##"{"root":{"type":"EmailLayout","data":{
        "backdropColor":"#F5F5F5","canvasColor":"#FFFFFF","textColor":"#262626",
        "fontFamily":"MODERN_SANS","childrenIds":["ghost-1"]}}}"##;
    let token = BASE64.encode(json);

    let err = decode(&token).unwrap_err();
    assert!(matches!(err, DecodeError::MalformedDocument(_)), "{err}");
    assert!(err.to_string().contains("ghost-1"), "{err}");
}

#[test]
fn empty_token_is_a_decode_error_not_a_panic() {
    assert!(decode("").is_err());
}
