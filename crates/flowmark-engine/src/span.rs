use serde::Serialize;

/// A byte range `[start, end)` into a source string.
///
/// Scanned nodes store spans rather than copied text, so slicing the source
/// with a span reproduces the exact original bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    /// Slices `source` with this span, or `None` if it is out of bounds or
    /// not on a char boundary.
    pub fn slice(self, source: &str) -> Option<&str> {
        source.get(self.start..self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_within_bounds() {
        let sp = Span { start: 2, end: 5 };
        assert_eq!(sp.slice("?[abc]"), Some("abc"));
    }

    #[test]
    fn slice_out_of_bounds() {
        let sp = Span { start: 2, end: 50 };
        assert_eq!(sp.slice("?[abc]"), None);
    }
}
