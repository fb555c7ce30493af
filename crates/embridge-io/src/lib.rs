//! `embridge-io` is the single supported public entrypoint for the
//! HTML ⇄ block-document bridge: the document model, the metadata
//! round-trip codec/carrier, the heuristic HTML importer, the bridge
//! orchestrator, and the host message contract.
//!
//! This crate intentionally contains **no** rendering, editing UI, or
//! transport logic. Those belong to the host. `embridge-io` focuses on:
//! - stable document types
//! - lossless metadata round-trips
//! - best-effort import of foreign HTML
//! - a failure policy where every path ends in a usable document

// -----------------------------------------------------------------------------
// Public API contract
// -----------------------------------------------------------------------------
//
// Consumers SHOULD import from `embridge_io::prelude::*`.
// Anything not re-exported via the prelude is considered internal and may change
// without notice.

// Re-export the canonical document model.
#[doc(hidden)]
pub mod core {
    pub use embridge_core::id::IdGenerator;
    pub use embridge_core::model::{
        Block, BlockData, BlockId, ButtonProps, ContainerProps, DividerProps, Document,
        EmailLayoutProps, HeadingLevel, HeadingProps, HtmlProps, ImageProps, Padding, ROOT_ID,
        Style, TextProps,
    };
    pub use embridge_core::validate::validate_document;
}

// Re-export the metadata codec and carrier.
#[doc(hidden)]
pub mod metadata {
    pub use embridge_metadata::carrier::{MARKER_PREFIX, MARKER_SUFFIX, embed, extract, strip};
    pub use embridge_metadata::codec::{DecodeError, EncodeError, decode, encode};
}

// Re-export the importer.
#[doc(hidden)]
pub mod import {
    pub use embridge_import::importer::{
        PASSTHROUGH_ID, import, import_with_report, passthrough_document,
    };
    pub use embridge_import::style::extract_style;
    pub use embridge_import::telemetry::ImportReport;
}

// Re-export font-family keys.
#[doc(hidden)]
pub mod fonts {
    pub use embridge_fonts::{DEFAULT_FAMILY, FontFamily, from_key, is_known_key, stack_for_key};
}

/// The bridge orchestrator: `from_html` / `to_html`.
pub mod bridge;

/// Host message contract (postMessage shapes).
pub mod message;

/// Convenience prelude for consumers.
///
/// This is the **only supported** import surface for external users.
pub mod prelude {
    pub use crate::bridge::{HtmlExport, RenderHtml, from_html, to_html};
    pub use crate::core::{Block, BlockId, Document, ROOT_ID};
    pub use crate::import::ImportReport;
    pub use crate::message::{InboundMessage, OutboundMessage, handle_inbound, parse_inbound};
    pub use crate::metadata::DecodeError;
}
