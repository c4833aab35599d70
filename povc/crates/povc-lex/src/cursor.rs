//! Character cursor for traversing scene source.
//!
//! The state machine only needs two operations from its input: read the
//! next character, and push back characters it has already read. Those
//! are captured by [`LexerInput`]; [`Cursor`] is the in-memory
//! implementation used by the [`Lexer`](crate::Lexer), which additionally
//! tracks byte position and line/column for spans.

/// Source of characters for the classification state machine.
///
/// Implementations must support `backup` over any characters returned by
/// `read` since the start of the current token.
pub trait LexerInput {
    /// Consume and return the next character, or `None` at end of input.
    ///
    /// At end of input the position does not move.
    fn read(&mut self) -> Option<char>;

    /// Un-read the last `count` characters.
    fn backup(&mut self, count: usize);

    /// Look at the next character without consuming it.
    ///
    /// This is a read followed by a backup, so the position is restored
    /// exactly whatever the character turns out to be.
    fn peek(&mut self) -> Option<char> {
        let next = self.read();
        if next.is_some() {
            self.backup(1);
        }
        next
    }
}

/// A cursor over an in-memory source string.
///
/// # Example
///
/// ```
/// use povc_lex::cursor::{Cursor, LexerInput};
///
/// let mut cursor = Cursor::new("box");
/// assert_eq!(cursor.read(), Some('b'));
/// assert_eq!(cursor.read(), Some('o'));
/// cursor.backup(1);
/// assert_eq!(cursor.read(), Some('o'));
/// assert_eq!(cursor.slice_from(0), "bo");
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the next character to read.
    position: usize,

    /// Line of the next character (1-based).
    line: u32,

    /// Column of the next character (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns true once every character has been read.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Byte offset of the next character to read.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Line of the next character to read (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the next character to read (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Source text from `start` up to the current position.
    ///
    /// `start` must be a position previously reported by this cursor.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Source text not read yet.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// The full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Column a position would have, found by scanning back to the
    /// previous newline.
    fn column_at(&self, position: usize) -> u32 {
        let line_start = self.source[..position].rfind('\n').map_or(0, |i| i + 1);
        self.source[line_start..position].chars().count() as u32 + 1
    }
}

impl LexerInput for Cursor<'_> {
    #[inline]
    fn read(&mut self) -> Option<char> {
        let c = self.source[self.position..].chars().next()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn backup(&mut self, count: usize) {
        for _ in 0..count {
            let Some(c) = self.source[..self.position].chars().next_back() else {
                return;
            };
            self.position -= c.len_utf8();
            if c == '\n' {
                self.line -= 1;
                self.column = self.column_at(self.position);
            } else {
                self.column -= 1;
            }
        }
    }
}
