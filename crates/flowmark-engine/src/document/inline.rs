use crate::{
    interaction::{
        cursor::Cursor,
        envelope::{BlockMatch, try_match_at},
        kinds::CodeSpan,
    },
    span::Span,
};

/// A scanned inline node with byte spans into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineNode {
    /// Plain text that isn't part of any special construct.
    Text(Span),
    /// A code span (backtick-delimited). This is a raw zone: no interaction
    /// blocks are recognised inside it.
    CodeSpan {
        /// Full span including backticks.
        full: Span,
        /// Inner span (content between backticks).
        inner: Span,
    },
    /// A `?[...]` interaction block.
    Interaction(BlockMatch),
}

impl InlineNode {
    /// The full span of the node.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text(sp) => *sp,
            InlineNode::CodeSpan { full, .. } => *full,
            InlineNode::Interaction(m) => m.full,
        }
    }
}

/// Scans prose into a sequence of [`InlineNode`]s.
///
/// # Arguments
/// - `base`: Byte offset in the source where `s` begins (for absolute span positions)
/// - `s`: The prose to scan
///
/// # Raw Zone Precedence
/// Code spans are checked first and suppress interaction blocks inside them:
/// `` `?[Continue]` `` is a code span, not a button.
///
/// # Returns
/// A vector of nodes covering the entire input. Text between special
/// constructs is emitted as `InlineNode::Text`.
pub fn parse_inline(base: usize, s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s, base);
    let mut out = vec![];
    let mut text_start = cur.pos();

    // Helper to flush accumulated text as a Text node
    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text(Span { start, end }));
        }
    }

    while !cur.eof() {
        // Try constructs in precedence order (code spans first = raw zone)
        let node = try_parse_code_span(&mut cur)
            .or_else(|| try_match_at(&mut cur).map(InlineNode::Interaction));
        if let Some(node) = node {
            flush_text(&mut out, text_start, node.span().start);
            text_start = node.span().end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns `None` if not at a backtick or if the code span isn't closed.
/// On failure, cursor position is restored.
fn try_parse_code_span(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // `
    let inner_start = cur.pos();

    if !cur.seek(CodeSpan::TICK) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump(); // closing `
    let end = cur.pos();

    Some(InlineNode::CodeSpan {
        full: Span { start, end },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}
