//! The bridge orchestrator.
//!
//! Incoming HTML resolves through a strict priority chain with no
//! partial states:
//! 1. embedded metadata token → exact document (the token is
//!    authoritative; the surrounding markup is ignored)
//! 2. heuristic import
//! 3. terminal passthrough document wrapping the raw input
//!
//! Nothing here is allowed to propagate a failure to the host: every
//! path terminates in a usable document, and the original markup is
//! never lost.

use std::panic::{AssertUnwindSafe, catch_unwind};

use embridge_core::model::Document;
use embridge_metadata::codec::EncodeError;
use embridge_metadata::{carrier, codec};

/// The external renderer seam.
///
/// Turning a document into static markup is the host's concern; the
/// bridge only ever composes the rendered string with the metadata
/// carrier.
pub trait RenderHtml {
    fn render(&self, document: &Document) -> String;
}

/// Both outgoing forms of a document: metadata-free markup for
/// delivery, metadata-bearing markup for later re-editing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlExport {
    pub clean: String,
    pub with_metadata: String,
}

/// Render a document and attach its metadata marker.
pub fn to_html<R: RenderHtml>(renderer: &R, document: &Document) -> Result<HtmlExport, EncodeError> {
    let clean = renderer.render(document);
    let with_metadata = carrier::embed(&clean, document)?;
    Ok(HtmlExport {
        clean,
        with_metadata,
    })
}

/// Reconstruct a document from incoming HTML.
///
/// A decode failure is "no metadata available", not an error; the
/// importer runs instead. The importer is total, but html5ever is
/// foreign code on pathological input, so a panic guard converts the
/// worst case into the passthrough document.
pub fn from_html(html: &str) -> Document {
    if let Some(token) = carrier::extract(html) {
        if let Ok(document) = codec::decode(token) {
            return document;
        }
    }

    catch_unwind(AssertUnwindSafe(|| embridge_import::import(html)))
        .unwrap_or_else(|_| embridge_import::passthrough_document(html))
}
