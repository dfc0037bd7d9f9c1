//! Byte cursor for scanning a single line.
//!
//! The classifier only ever steps over ASCII marker bytes, so every offset
//! the cursor stops at is also a `char` boundary of the underlying `&str`.

/// A cursor over one line of input.
///
/// # Example
/// ```
/// use draftmark::cursor::Cursor;
///
/// let mut cursor = Cursor::new("## Title");
/// assert_eq!(cursor.skip_while(|b| b == b'#'), 2);
/// assert!(cursor.eat(b' '));
/// assert_eq!(cursor.rest(), "Title");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `line`.
    #[inline]
    pub fn new(line: &'a str) -> Self {
        Self { line, pos: 0 }
    }

    /// Current byte offset into the line.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Number of bytes remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.line.len() - self.pos
    }

    /// Check if the cursor is at the end of the line.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.line.as_bytes().get(self.pos).copied()
    }

    /// Check if the current byte is `b`.
    #[inline]
    pub fn at(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    /// Check if the current byte is any of `bytes`.
    #[inline]
    pub fn at_any(&self, bytes: &[u8]) -> bool {
        self.peek().is_some_and(|b| bytes.contains(&b))
    }

    /// Advance by one byte.
    #[inline]
    pub fn bump(&mut self) {
        debug_assert!(!self.is_eof());
        self.pos += 1;
    }

    /// Consume `b` if it is the current byte.
    #[inline]
    pub fn eat(&mut self, b: u8) -> bool {
        if self.at(b) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Skip while `predicate` holds, returning the number of bytes skipped.
    #[inline]
    pub fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !predicate(b) {
                break;
            }
            self.bump();
        }
        self.pos - start
    }

    /// Skip spaces and tabs.
    #[inline]
    pub fn skip_whitespace(&mut self) -> usize {
        self.skip_while(|b| b == b' ' || b == b'\t')
    }

    /// The unconsumed remainder of the line.
    #[inline]
    pub fn rest(&self) -> &'a str {
        // Only ASCII bytes are ever consumed.
        &self.line[self.pos..]
    }
}
