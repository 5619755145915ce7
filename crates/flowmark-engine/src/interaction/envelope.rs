//! Block extraction: locating the `?[...]` envelope.
//!
//! An envelope is `?[`, any run of bytes without `]`, then `]`, provided the
//! closing bracket is not immediately followed by `(`. `?[text](url)` is a
//! markdown link and never an interaction block.

use crate::span::Span;

use super::{cursor::Cursor, kinds::Envelope};

/// A located envelope with absolute spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMatch {
    /// Full span including `?[` and `]`.
    pub full: Span,
    /// Span of the content between the brackets.
    pub inner: Span,
}

/// Returns the inner content if the whole of `content` (after trimming) is
/// exactly one envelope.
///
/// Leading or trailing text outside the brackets is a negative match, not an
/// error: `None` means "not an interaction block".
pub fn extract_block(content: &str) -> Option<&str> {
    let trimmed = content.trim();
    let found = find_block(trimmed, 0)?;
    if found.full.start != 0 || found.full.end != trimmed.len() {
        return None;
    }
    found.inner.slice(trimmed)
}

/// Finds the first envelope in `text` starting at or after byte `from`.
///
/// Spans in the returned match are byte offsets into `text`.
pub fn find_block(text: &str, from: usize) -> Option<BlockMatch> {
    let mut cur = Cursor::new(text, 0);
    cur.bump_n(from);
    while !cur.eof() {
        if let Some(found) = try_match_at(&mut cur) {
            return Some(found);
        }
        cur.bump();
    }
    None
}

/// Attempts to match an envelope starting exactly at the cursor.
///
/// On success the cursor is left after the closing `]`. On failure the
/// cursor position is restored.
pub fn try_match_at(cur: &mut Cursor<'_>) -> Option<BlockMatch> {
    if !cur.starts_with(Envelope::OPEN) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump_n(Envelope::OPEN.len());
    let inner_start = cur.pos();

    if !cur.seek(Envelope::CLOSE) {
        // Not closed, restore cursor
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump(); // ]

    if cur.peek() == Some(Envelope::LINK_OPEN) {
        // `?[text](url)` is a link
        *cur = saved;
        return None;
    }

    Some(BlockMatch {
        full: Span {
            start,
            end: cur.pos(),
        },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}
