#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of the embridge project.

Do NOT depend on this crate directly.
Use `embridge-io` instead.
"#]

pub mod id;
pub mod model;
pub mod validate;
