//! povc-lex - Lexical Analyzer for POV-Ray scene files
//!
//! This crate turns scene description source into a stream of classified
//! tokens for syntax highlighting and editor tooling. It does not build a
//! syntax tree and never fails: text the lexer cannot make sense of comes
//! out as single-character [`TokenKind::Other`] tokens.
//!
//! # Example Usage
//!
//! ```
//! use povc_lex::{Lexer, TokenKind};
//!
//! let source = "sphere { <0, 1, 0>, 2 }";
//! let mut lexer = Lexer::new(source);
//!
//! let first = lexer.next_token().unwrap();
//! assert_eq!(first.kind, TokenKind::Keyword);
//! assert_eq!(first.text, "sphere");
//!
//! // The rest of the stream, whitespace included
//! let rest: String = lexer.map(|t| t.text).collect();
//! assert_eq!(rest, " { <0, 1, 0>, 2 }");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`keywords`] - The reserved word table and its classifications
//! - [`lexer`] - The classification state machine and driver
//! - [`cursor`] - Character input with one-step push-back
//! - [`unicode`] - Character classes
//! - [`completion`] - Keyword completion for editors
//!
//! # Token Categories
//!
//! - **Trivia**: whitespace (blanks, `;` and `,`), `/* block */` and
//!   `// line` comments
//! - **Blocks**: `{`, `}`
//! - **Bracketed spans**: `<vectors>`, `(argument lists)` and
//!   `"strings"`, each kept whole with both delimiters
//! - **Words**: keywords from the table, numbers (all digits) and
//!   identifiers (everything else)
//! - **Directives**: `#` and the word glued to it, e.g. `#declare`
//! - **Operators**: `*`, `+`, `=`
//! - **Other**: any single character nothing else claims, like `.`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod completion;
pub mod cursor;
pub mod keywords;
pub mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::{Cursor, LexerInput};
pub use keywords::{Keyword, UnknownKeyword};
pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
