//! # custom-editor DOM
//!
//! Owned, detached HTML fragments for the custom-editor boundary.
//!
//! Editing engines hand block contents across the boundary as plain
//! [`Node`] trees so the block-replacement logic can run without touching
//! a live document. The crate covers the round trip:
//!
//! ```text
//! html text ──lexer──> tokens ──parser──> Vec<Node> ──serializer──> html text
//! ```
//!
//! plus [`path`] helpers for addressing nodes inside a fragment and
//! [`tags`] for block/inline classification.

mod error;
mod lexer;
mod node;
mod parser;
mod serializer;

pub mod path;
pub mod tags;

pub use error::{HtmlError, HtmlResult};
pub use node::Node;
pub use parser::parse_fragment;
pub use serializer::{escape_attribute, escape_text, to_html};
