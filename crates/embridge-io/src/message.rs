//! Host message contract.
//!
//! The transport itself (postMessage listeners, origins, retries) is
//! the host's concern; this module only fixes the wire shapes and maps
//! them onto bridge calls.

use serde::{Deserialize, Serialize};

use embridge_core::model::Document;
use embridge_metadata::codec::EncodeError;

use crate::bridge::{self, HtmlExport, RenderHtml};

/// Messages the bridge consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InboundMessage {
    #[serde(rename = "LOAD_EMAIL_HTML")]
    LoadEmailHtml { html: String },
}

/// Messages the bridge produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutboundMessage {
    /// Emitted whenever the document changes. `html` carries the
    /// metadata marker; `html_clean` is suitable for delivery.
    #[serde(rename = "EMAIL_HTML", rename_all = "camelCase")]
    EmailHtml { html: String, html_clean: String },
}

impl OutboundMessage {
    pub fn email_html(export: HtmlExport) -> Self {
        OutboundMessage::EmailHtml {
            html: export.with_metadata,
            html_clean: export.clean,
        }
    }
}

/// Parse an inbound message, ignoring every message type this bridge
/// does not own (those are handled, if at all, by collaborators).
pub fn parse_inbound(json: &str) -> Option<InboundMessage> {
    serde_json::from_str(json).ok()
}

/// Resolve an inbound message to a document.
pub fn handle_inbound(message: &InboundMessage) -> Document {
    match message {
        InboundMessage::LoadEmailHtml { html } => bridge::from_html(html),
    }
}

/// Build the outbound notification for a changed document.
pub fn outbound_for<R: RenderHtml>(
    renderer: &R,
    document: &Document,
) -> Result<OutboundMessage, EncodeError> {
    Ok(OutboundMessage::email_html(bridge::to_html(
        renderer, document,
    )?))
}
