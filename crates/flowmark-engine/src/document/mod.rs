//! # Document Splicing
//!
//! Finds interaction blocks in markdown text and replaces each with an
//! [`InteractionElement`] carrying the flattened projection, leaving the
//! surrounding text intact.
//!
//! ## Modules
//!
//! - **`fence`**: `CodeFence` line signatures; fenced code is a raw zone
//! - **`inline`**: cursor-based prose scanner; code spans are raw zones
//! - **`splice`**: `splice_text` for a single text leaf, `splice_document` for a whole file
//!
//! ## Raw Zone Precedence
//!
//! Fences are resolved per line before any inline scanning, and code spans
//! before interaction blocks, so `` `?[Continue]` `` stays literal.

pub mod fence;
pub mod inline;
pub mod splice;

pub use splice::{DEFAULT_ELEMENT_NAME, Fragment, InteractionElement, splice_document, splice_text};
