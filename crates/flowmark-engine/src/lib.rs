pub mod compat;
pub mod document;
pub mod interaction;
pub mod span;

// Re-export key types for easier usage
pub use compat::{LegacyReturnData, RemarkCompatibleResult};
pub use document::{
    DEFAULT_ELEMENT_NAME, Fragment, InteractionElement, splice_document, splice_text,
};
pub use interaction::{
    Button, InteractionError, InteractionParser, InteractionType, NamePolicy, ParseResult, parse,
};
pub use span::Span;
