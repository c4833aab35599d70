//! Token definitions for the scene-description language.
//!
//! The lexer is lossless: every character of the input lands in exactly
//! one token, so whitespace and comments are tokens too.

use std::fmt;

use povc_util::Span;

/// Category of a token.
///
/// The set is closed. [`TokenKind::name`] gives the tag used by
/// highlighting consumers and by the `povt` command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// Run of blanks, `;` or `,`
    Whitespace,
    /// `/* ... */` or `// ...` up to and including the newline
    Comment,
    /// `{`
    BlockOpen,
    /// `}`
    BlockClose,
    /// `<...>` including both angle brackets
    Vector,
    /// A reserved word from the keyword table
    Keyword,
    /// Any other word
    Identifier,
    /// `*`, `+` or `=`
    Operator,
    /// A run of digits
    Number,
    /// `#` and the directive glued to it, e.g. `#declare`
    DirectivePrefix,
    /// `"..."` including both quotes
    String,
    /// `(...)` including both parentheses
    ArgumentList,
    /// A single character nothing else claims
    Other,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 13] = [
        TokenKind::Whitespace,
        TokenKind::Comment,
        TokenKind::BlockOpen,
        TokenKind::BlockClose,
        TokenKind::Vector,
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Operator,
        TokenKind::Number,
        TokenKind::DirectivePrefix,
        TokenKind::String,
        TokenKind::ArgumentList,
        TokenKind::Other,
    ];

    /// Tag of this kind.
    ///
    /// ```
    /// use povc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::BlockOpen.name(), "block_open");
    /// assert_eq!(TokenKind::DirectivePrefix.to_string(), "directive_prefix");
    /// ```
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::BlockOpen => "block_open",
            TokenKind::BlockClose => "block_close",
            TokenKind::Vector => "vector",
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Operator => "operator",
            TokenKind::Number => "number",
            TokenKind::DirectivePrefix => "directive_prefix",
            TokenKind::String => "string",
            TokenKind::ArgumentList => "argument_list",
            TokenKind::Other => "other",
        }
    }

    /// Returns true for kinds that carry no meaning for a parser.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified slice of the source text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// Category of the token
    pub kind: TokenKind,
    /// Exact source text, never empty
    pub text: &'a str,
    /// Where the text sits in the source
    pub span: Span,
}

impl<'a> Token<'a> {
    /// Create a token.
    #[inline]
    pub fn new(kind: TokenKind, text: &'a str, span: Span) -> Self {
        Self { kind, text, span }
    }

    /// Length of the token text in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for tokens produced by the lexer.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}
