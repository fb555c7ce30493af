#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the embridge project.

Do NOT depend on this crate directly.
Use `embridge-io` instead.
"#]

pub mod importer;
pub mod style;
pub mod telemetry;

pub use importer::{PASSTHROUGH_ID, import, import_with_report, passthrough_document};
pub use style::extract_style;
pub use telemetry::ImportReport;
