//! Delimiter constants for each construct of the interaction block grammar.
//!
//! Every construct owns its syntax here; the scanners and splitters refer to
//! these constants and never hardcode `?[`, `%{{`, `|` or `//` themselves.

/// The `?[...]` envelope around an interaction block.
pub struct Envelope;

impl Envelope {
    pub const OPEN: &'static [u8; 2] = b"?[";
    pub const CLOSE: u8 = b']';
    /// A `(` right after the closing bracket makes the span a markdown link.
    pub const LINK_OPEN: u8 = b'(';
}

/// The optional `%{{name}}` variable binding prefix.
pub struct Binding;

impl Binding {
    pub const OPEN: &'static str = "%{{";
    pub const CLOSE: &'static str = "}}";
}

/// Button separators. Only ASCII pipes delimit; the full-width `｜` is text.
pub struct Pipe;

impl Pipe {
    pub const SINGLE: u8 = b'|';
    pub const DOUBLE: &'static str = "||";
}

/// The `...` marker that introduces free-text input.
pub struct Ellipsis;

impl Ellipsis {
    pub const MARK: &'static str = "...";
}

/// The `display//value` shorthand inside a single button segment.
pub struct ValueSplit;

impl ValueSplit {
    pub const MARK: &'static str = "//";
}

/// Inline code spans. They are raw zones: no interaction block is recognised
/// inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';
}
