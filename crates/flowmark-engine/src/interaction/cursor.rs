/// A byte cursor over a string slice with position tracking.
///
/// `base` is the absolute offset of `s` within a larger source, so spans
/// produced while scanning a paragraph point into the whole document.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Base offset in the source (added to local index for absolute positions).
    pub base: usize,
    /// Current local index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s` with the given base offset.
    pub fn new(s: &'a str, base: usize) -> Self {
        Self { s, base, i: 0 }
    }

    /// Returns the current absolute byte position (base + local index).
    pub fn pos(&self) -> usize {
        self.base + self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Peeks at the byte immediately before the current position.
    pub fn peek_back(&self) -> Option<u8> {
        let prev = self.i.checked_sub(1)?;
        self.s.as_bytes().get(prev).copied()
    }

    /// Peeks at the byte after the current one.
    pub fn peek_next(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i + 1).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances until the current byte is `b` or the input ends.
    ///
    /// Returns true if `b` was found; the cursor is left on it.
    pub fn seek(&mut self, b: u8) -> bool {
        while let Some(c) = self.peek() {
            if c == b {
                return true;
            }
            self.bump();
        }
        false
    }
}
