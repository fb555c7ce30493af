//! Token codec: Document ⇄ text-safe token.
//!
//! The token is base64 over the document's JSON form. The standard
//! base64 alphabet contains neither `-` nor control characters, so a
//! token can never produce `-->` and is safe inside an HTML comment.
//!
//! Determinism: the model stores blocks in a `BTreeMap` and every
//! struct serializes in declaration order, so a given Document value
//! always encodes to the same token regardless of how it was built.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use embridge_core::model::Document;
use embridge_core::validate::validate_document;

/// Encoding can only fail inside serde_json, and not for any value the
/// model can represent; the type exists so callers propagate with `?`.
pub type EncodeError = serde_json::Error;

/// A structured error for decoding a metadata token.
///
/// Every variant is recoverable: the orchestrator treats any decode
/// failure as "no metadata available" and falls through to the
/// importer. A partially-populated Document is never returned.
#[derive(Debug)]
pub enum DecodeError {
    /// The token was not valid base64.
    InvalidToken(base64::DecodeError),
    /// The token decoded to bytes that were not UTF-8.
    InvalidUtf8(std::string::FromUtf8Error),
    /// The decoded text was not valid JSON, or did not match the
    /// Document schema/shape (including unknown block types).
    InvalidJson(serde_json::Error),
    /// JSON matched the shape but the document is not well-formed
    /// (missing root, dangling child reference).
    MalformedDocument(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidToken(e) => write!(f, "Invalid metadata token: {e}"),
            DecodeError::InvalidUtf8(e) => write!(f, "Metadata token is not UTF-8: {e}"),
            DecodeError::InvalidJson(e) => write!(f, "Invalid document JSON in metadata: {e}"),
            DecodeError::MalformedDocument(msg) => {
                write!(f, "Metadata decoded to a malformed document: {msg}")
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::InvalidToken(e) => Some(e),
            DecodeError::InvalidUtf8(e) => Some(e),
            DecodeError::InvalidJson(e) => Some(e),
            DecodeError::MalformedDocument(_) => None,
        }
    }
}

/// Encode a document into an embeddable token.
pub fn encode(document: &Document) -> Result<String, EncodeError> {
    let json = serde_json::to_string(document)?;
    Ok(BASE64.encode(json.as_bytes()))
}

/// Decode a token back into the exact document it was encoded from.
///
/// `decode(encode(d)) == d` for every well-formed `d` (structural
/// equality). Validation runs before returning, so a decodable token
/// wrapping an ill-formed document still fails.
pub fn decode(token: &str) -> Result<Document, DecodeError> {
    let bytes = BASE64
        .decode(token.trim().as_bytes())
        .map_err(DecodeError::InvalidToken)?;
    let json = String::from_utf8(bytes).map_err(DecodeError::InvalidUtf8)?;
    let doc: Document = serde_json::from_str(&json).map_err(DecodeError::InvalidJson)?;
    validate_document(&doc).map_err(DecodeError::MalformedDocument)?;
    Ok(doc)
}
