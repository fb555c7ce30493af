//! Marker carrier: embed/extract/strip the metadata token in HTML.
//!
//! The marker is a single HTML comment prepended to the rendered
//! markup, so renderers and mail clients ignore it:
//!
//! ```text
//! <!-- EMAIL_BUILDER_DATA:<token> -->
//! <rendered html>
//! ```
//!
//! The prefix is a namespaced literal (never bare `<!--`), so ordinary
//! comments elsewhere in a document cannot produce false positives.

use embridge_core::model::Document;

use crate::codec::{self, EncodeError};

pub const MARKER_PREFIX: &str = "<!-- EMAIL_BUILDER_DATA:";
pub const MARKER_SUFFIX: &str = " -->";

const COMMENT_CLOSE: &str = "-->";

/// Prepend a marker carrying the encoded document to `html`.
///
/// The marker must sit at the very start of the output; extraction and
/// stripping anchor on the prefix literal, and downstream consumers
/// rely on "first line = metadata, rest = markup, unmodified".
pub fn embed(html: &str, document: &Document) -> Result<String, EncodeError> {
    let token = codec::encode(document)?;
    Ok(format!("{MARKER_PREFIX}{token}{MARKER_SUFFIX}\n{html}"))
}

/// Find the marker and return its token payload, or `None` when the
/// input carries no marker. The input is never modified.
///
/// The payload runs up to (but not including) the first `-->` after the
/// prefix; surrounding whitespace is not part of the token.
pub fn extract(html: &str) -> Option<&str> {
    let start = html.find(MARKER_PREFIX)? + MARKER_PREFIX.len();
    let rest = &html[start..];
    let end = rest.find(COMMENT_CLOSE)?;
    Some(rest[..end].trim())
}

/// Return `html` with every marker removed, each including the line
/// break `embed` appends after it. `embed` only ever produces one
/// marker, but removing all of them is what makes
/// `strip(strip(x)) == strip(x)` hold for arbitrary input.
pub fn strip(html: &str) -> String {
    let mut out = html.to_string();
    loop {
        let Some(start) = out.find(MARKER_PREFIX) else {
            return out;
        };
        let Some(rel_end) = out[start..].find(COMMENT_CLOSE) else {
            return out;
        };
        let mut end = start + rel_end + COMMENT_CLOSE.len();
        if out[end..].starts_with('\n') {
            end += 1;
        }
        out.replace_range(start..end, "");
    }
}
