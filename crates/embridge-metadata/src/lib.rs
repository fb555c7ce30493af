#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the embridge project.

Do NOT depend on this crate directly.
Use `embridge-io` instead.
"#]

pub mod carrier;
pub mod codec;

pub use carrier::{MARKER_PREFIX, MARKER_SUFFIX, embed, extract, strip};
pub use codec::{DecodeError, EncodeError, decode, encode};
