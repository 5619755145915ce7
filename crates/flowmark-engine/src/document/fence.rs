#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

/// A fence line: its marker kind, the length of the marker run, and whether
/// anything (an info string) follows the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig {
    pub kind: FenceKind,
    pub len: usize,
    pub bare: bool,
}

/// Fenced code blocks are raw zones: no interaction blocks inside.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Strips leading indentation and blockquote markers, and the line ending.
    pub fn content(line: &str) -> &str {
        line.trim_start_matches([' ', '\t', '>'])
            .trim_end_matches(['\r', '\n'])
    }

    /// Returns the fence signature if `line` starts with a fence marker.
    pub fn sig(line: &str) -> Option<FenceSig> {
        let t = Self::content(line);
        let (kind, mark) = if t.starts_with(Self::BACKTICKS) {
            (FenceKind::Backticks, b'`')
        } else if t.starts_with(Self::TILDES) {
            (FenceKind::Tildes, b'~')
        } else {
            return None;
        };
        let len = t.bytes().take_while(|&b| b == mark).count();
        Some(FenceSig {
            kind,
            len,
            bare: t[len..].trim().is_empty(),
        })
    }

    /// A fence closes only on a bare run of the same marker at least as long
    /// as the opening run.
    pub fn closes(open: FenceSig, sig: Option<FenceSig>) -> bool {
        sig.is_some_and(|s| s.kind == open.kind && s.len >= open.len && s.bare)
    }
}
