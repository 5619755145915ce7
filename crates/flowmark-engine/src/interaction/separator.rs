//! Separator resolution and segment splitting.
//!
//! The first pipe in the content decides the mode for the whole block. If it
//! starts a `||`, the block is multi-select and every lone `|` is ordinary
//! text. Otherwise the block is single-select and every `||` is ordinary
//! text. Only ASCII pipes take part; `｜` is always text.

use super::{cursor::Cursor, kinds::Pipe};

/// The delimiter governing how a block's content splits into segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `|`, single-select.
    Single,
    /// `||`, multi-select.
    Double,
}

impl Separator {
    /// Decides the active separator for `content`, or `None` if it has no
    /// pipe at all.
    pub fn resolve(content: &str) -> Option<Self> {
        let single = content.bytes().position(|b| b == Pipe::SINGLE)?;
        match content.find(Pipe::DOUBLE) {
            // The first `|` is itself the start of the first `||`
            Some(double) if double <= single => Some(Self::Double),
            _ => Some(Self::Single),
        }
    }

    pub fn is_multi_select(self) -> bool {
        matches!(self, Self::Double)
    }
}

/// Splits `content` on the resolved separator. Segments are not trimmed and
/// may be empty.
pub fn split_segments(content: &str, separator: Option<Separator>) -> Vec<&str> {
    match separator {
        None => vec![content],
        Some(Separator::Double) => content.split(Pipe::DOUBLE).collect(),
        Some(Separator::Single) => split_lone_pipes(content),
    }
}

/// Splits on each `|` that has no `|` directly before or after it.
fn split_lone_pipes(content: &str) -> Vec<&str> {
    let mut cur = Cursor::new(content, 0);
    let mut out = vec![];
    let mut seg_start = 0;

    while cur.seek(Pipe::SINGLE) {
        let lone = cur.peek_back() != Some(Pipe::SINGLE) && cur.peek_next() != Some(Pipe::SINGLE);
        if lone {
            out.push(&content[seg_start..cur.i]);
            seg_start = cur.i + 1;
        }
        cur.bump();
    }

    out.push(&content[seg_start..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Submit", None)]
    #[case("", None)]
    #[case("A | B | C", Some(Separator::Single))]
    #[case("A||B||C", Some(Separator::Double))]
    #[case("A||B | C", Some(Separator::Double))]
    #[case("A | B||C", Some(Separator::Single))]
    #[case("||", Some(Separator::Double))]
    #[case("|", Some(Separator::Single))]
    #[case("苹果｜香蕉", None)]
    fn resolves_first_separator(#[case] content: &str, #[case] expected: Option<Separator>) {
        assert_eq!(Separator::resolve(content), expected);
    }

    #[test]
    fn double_mode_keeps_lone_pipes() {
        assert_eq!(
            split_segments("A||B | C", Some(Separator::Double)),
            vec!["A", "B | C"]
        );
    }

    #[test]
    fn single_mode_keeps_double_pipes() {
        assert_eq!(
            split_segments("A | B||C", Some(Separator::Single)),
            vec!["A ", " B||C"]
        );
    }

    #[test]
    fn single_mode_keeps_pipe_runs() {
        assert_eq!(
            split_segments("A|||B|C", Some(Separator::Single)),
            vec!["A|||B", "C"]
        );
    }

    #[test]
    fn trailing_separator_yields_empty_segment() {
        assert_eq!(split_segments("A|B|", Some(Separator::Single)), vec!["A", "B", ""]);
        assert_eq!(
            split_segments("A||B||", Some(Separator::Double)),
            vec!["A", "B", ""]
        );
    }

    #[test]
    fn full_width_pipe_is_text() {
        assert_eq!(
            split_segments("option1|option2｜option3", Some(Separator::Single)),
            vec!["option1", "option2｜option3"]
        );
    }

    #[test]
    fn no_separator_is_one_segment() {
        assert_eq!(split_segments(" Submit ", None), vec![" Submit "]);
    }
}
