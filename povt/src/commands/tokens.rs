//! Tokens command implementation.
//!
//! Lexes a scene file and lists its tokens, either as plain text or as
//! JSON lines for other tools to consume.

use std::io::Write;
use std::path::PathBuf;

use povc_lex::{tokenize, Token, TokenKind};
use povc_util::SourceFile;
use serde::Serialize;

use crate::commands::common::OutputFormat;
use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the tokens command.
#[derive(Debug, Clone)]
pub struct TokensArgs {
    /// Scene file to lex.
    pub path: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Leave whitespace tokens out of the listing.
    pub skip_whitespace: bool,
}

/// One token as written in JSON output.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    text: &'a str,
    start: usize,
    end: usize,
    line: u32,
    column: u32,
}

impl<'a> From<&Token<'a>> for TokenRecord<'a> {
    fn from(token: &Token<'a>) -> Self {
        Self {
            kind: token.kind.name(),
            text: token.text,
            start: token.span.start,
            end: token.span.end,
            line: token.span.line,
            column: token.span.column,
        }
    }
}

/// Tokens command handler.
pub struct TokensCommand {
    args: TokensArgs,
}

impl TokensCommand {
    fn write_token(&self, out: &mut dyn Write, token: &Token<'_>) -> Result<()> {
        match self.args.format {
            OutputFormat::Text => writeln!(
                out,
                "{}:{} {} {:?}",
                token.span.line, token.span.column, token.kind, token.text
            )?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &TokenRecord::from(token))?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

impl Command for TokensCommand {
    type Args = TokensArgs;

    fn new(args: TokensArgs) -> Self {
        Self { args }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let file = SourceFile::load(&self.args.path)?;
        let tokens = tokenize(file.content());
        tracing::info!(
            file = file.name(),
            tokens = tokens.len(),
            lines = file.line_count(),
            "lexed scene file"
        );

        for token in tokens
            .iter()
            .filter(|t| !(self.args.skip_whitespace && t.kind == TokenKind::Whitespace))
        {
            self.write_token(out, token)?;
        }
        Ok(())
    }

    fn name() -> &'static str {
        "tokens"
    }
}
