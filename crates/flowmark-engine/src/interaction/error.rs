use thiserror::Error;

/// Faults raised inside the parse pipeline.
///
/// These never reach callers of [`InteractionParser::parse`]; they are folded
/// into [`ParseResult::Error`] at the entry point.
///
/// [`InteractionParser::parse`]: super::InteractionParser::parse
/// [`ParseResult::Error`]: super::ParseResult::Error
#[derive(Debug, Clone, Error)]
pub enum InteractionError {
    /// The input is not exactly one `?[...]` span.
    #[error("Invalid interaction format: {content}")]
    InvalidEnvelope { content: String },

    /// A built-in pattern failed to compile.
    #[error("Parsing error: invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A stage hit a state the grammar cannot produce.
    #[error("Parsing error: {reason} in {fragment:?}")]
    Malformed { fragment: String, reason: String },
}
