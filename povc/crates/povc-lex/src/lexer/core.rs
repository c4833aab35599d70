//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its scan loop.

use povc_util::Span;

use crate::cursor::{Cursor, LexerInput};
use crate::token::Token;

use super::state::State;

/// Lexer for POV-Ray scene files.
///
/// The lexer turns source text into a lossless stream of tokens:
/// whitespace and comments are emitted like everything else, so the
/// concatenated token texts reproduce the input.
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
        }
    }

    /// Returns the next token, or `None` once the input is exhausted.
    ///
    /// Every call starts from a clean state and consumes at least one
    /// character unless the input is already exhausted.
    ///
    /// # Example
    ///
    /// ```
    /// use povc_lex::{Lexer, TokenKind};
    ///
    /// let mut lexer = Lexer::new("#declare R = 2;");
    /// let token = lexer.next_token().unwrap();
    /// assert_eq!(token.kind, TokenKind::DirectivePrefix);
    /// assert_eq!(token.text, "#declare");
    /// ```
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        let start = self.cursor.position();
        let line = self.cursor.line();
        let column = self.cursor.column();

        let mut state = State::None;
        let mut prev = '\0';

        while let Some(curr) = self.cursor.read() {
            if state == State::None {
                state = State::find_start(curr, prev, &mut self.cursor);
            } else if state.ends(curr, prev) {
                if !state.is_end_inclusive() {
                    self.cursor.backup(1);
                }
                break;
            }
            prev = curr;
        }

        let text = self.cursor.slice_from(start);
        if text.is_empty() {
            return None;
        }

        let kind = state.resolve(text);
        let span = Span::new(start, self.cursor.position(), line, column);
        tracing::trace!(%kind, ?text, line, column, "token");
        Some(Token::new(kind, text, span))
    }

    /// Returns the current line number (1-based).
    ///
    /// This is the line of the next token to be lexed.
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the byte offset of the next token to be lexed.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

/// Lexes a whole source text.
///
/// ```
/// use povc_lex::{tokenize, TokenKind};
///
/// let kinds: Vec<_> = tokenize("box{}").iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Keyword, TokenKind::BlockOpen, TokenKind::BlockClose]);
/// ```
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let tokens: Vec<_> = Lexer::new(source).collect();
    tracing::debug!(bytes = source.len(), tokens = tokens.len(), "tokenized source");
    tokens
}
