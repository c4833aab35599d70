//! Classification states.
//!
//! Each state carries four rules: an entry predicate tried while no state
//! is active, an end predicate tried on every following character, an
//! inclusivity flag saying whether the terminating character belongs to
//! the span, and a resolver mapping the finished span to a [`TokenKind`].

use crate::cursor::LexerInput;
use crate::keywords::Keyword;
use crate::token::TokenKind;
use crate::unicode::{is_blank, is_digit, is_operator, is_punctuation, is_word_start, DIRECTIVE_PREFIX};

/// The state the scanner is in while accumulating one span.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// No span started yet
    None,
    /// `/* ... */`
    Comment,
    /// `// ...` through the newline
    LineComment,
    /// `( ... )`
    ArgumentList,
    /// Blanks, `;` and `,`
    Whitespace,
    /// `< ... >`
    Vector,
    /// `#` up to the next blank
    DirectivePrefix,
    /// `{`
    BlockOpen,
    /// `}`
    BlockClose,
    /// `" ... "`
    String,
    /// `*`, `+` or `=`
    Operator,
    /// Anything that is neither blank nor punctuation
    Word,
    /// Digits with embedded dots
    Number,
    /// One character nothing else claims
    Other,
}

/// Entry predicates are tried in this order; the first match wins.
pub const ENTRY_ORDER: [State; 12] = [
    State::Comment,
    State::LineComment,
    State::ArgumentList,
    State::Whitespace,
    State::Vector,
    State::DirectivePrefix,
    State::BlockOpen,
    State::BlockClose,
    State::String,
    State::Operator,
    State::Word,
    State::Number,
];

/// Blank characters plus the two separators treated as whitespace.
#[inline]
fn is_separator(c: char) -> bool {
    is_blank(c) || c == ';' || c == ','
}

/// Checks whether `curr` opens a comment of the given second character.
///
/// The lookahead reads one character and always pushes it back.
fn opens_comment<I: LexerInput + ?Sized>(
    curr: char,
    prev: char,
    second: char,
    input: &mut I,
) -> bool {
    if prev == '/' && curr == second {
        return true;
    }
    curr == '/' && input.peek() == Some(second)
}

impl State {
    /// Returns true while this state absorbs `curr` without letting any
    /// other state start.
    pub fn swallows(self, curr: char) -> bool {
        match self {
            State::Comment | State::ArgumentList => true,
            State::LineComment => curr != '\n',
            State::String => curr != '"',
            _ => false,
        }
    }

    /// Entry predicate.
    ///
    /// `active` is the state currently being accumulated; states that
    /// swallow their content suppress every entry.
    pub fn starts<I: LexerInput + ?Sized>(
        self,
        curr: char,
        prev: char,
        active: State,
        input: &mut I,
    ) -> bool {
        if active.swallows(curr) {
            return false;
        }
        match self {
            State::None | State::Other => false,
            State::Comment => opens_comment(curr, prev, '*', input),
            State::LineComment => opens_comment(curr, prev, '/', input),
            State::ArgumentList => curr == '(',
            State::Whitespace => is_separator(curr),
            State::Vector => curr == '<',
            State::DirectivePrefix => curr == DIRECTIVE_PREFIX,
            State::BlockOpen => curr == '{',
            State::BlockClose => curr == '}',
            State::String => active != State::String && curr == '"',
            State::Operator => is_operator(curr),
            State::Word => is_word_start(curr),
            State::Number => is_digit(curr),
        }
    }

    /// End predicate, tried on every character after the first.
    pub fn ends(self, curr: char, prev: char) -> bool {
        match self {
            State::None | State::Other => true,
            State::BlockOpen | State::BlockClose | State::Operator => true,
            State::Whitespace => !is_blank(curr),
            State::ArgumentList => curr == ')',
            State::Comment => prev == '*' && curr == '/',
            State::LineComment => curr == '\n',
            State::Vector => curr == '>',
            State::DirectivePrefix => is_blank(curr),
            State::String => curr == '"',
            State::Word => is_blank(curr) || is_punctuation(curr) || is_operator(curr),
            State::Number => curr != '.' && !is_digit(curr),
        }
    }

    /// Returns true if the character that ends the state is part of its span.
    pub const fn is_end_inclusive(self) -> bool {
        matches!(
            self,
            State::Comment
                | State::LineComment
                | State::Vector
                | State::String
                | State::ArgumentList
        )
    }

    /// Maps a finished span to its token kind.
    pub fn resolve(self, text: &str) -> TokenKind {
        match self {
            State::None | State::Whitespace => TokenKind::Whitespace,
            State::Comment | State::LineComment => TokenKind::Comment,
            State::ArgumentList => TokenKind::ArgumentList,
            State::Vector => TokenKind::Vector,
            State::DirectivePrefix => TokenKind::DirectivePrefix,
            State::BlockOpen => TokenKind::BlockOpen,
            State::BlockClose => TokenKind::BlockClose,
            State::String => TokenKind::String,
            State::Operator => TokenKind::Operator,
            State::Number => TokenKind::Number,
            State::Other => TokenKind::Other,
            State::Word => resolve_word(text),
        }
    }

    /// Picks the state a span starting with `curr` enters.
    ///
    /// Falls back to [`State::Other`] when no entry predicate matches.
    pub fn find_start<I: LexerInput + ?Sized>(curr: char, prev: char, input: &mut I) -> State {
        ENTRY_ORDER
            .into_iter()
            .find(|state| state.starts(curr, prev, State::None, input))
            .unwrap_or(State::Other)
    }
}

fn resolve_word(text: &str) -> TokenKind {
    if Keyword::lookup(text).is_some() {
        TokenKind::Keyword
    } else if text.chars().all(is_digit) {
        TokenKind::Number
    } else {
        TokenKind::Identifier
    }
}
