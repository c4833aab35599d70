//! Complete command implementation.

use std::io::Write;

use povc_lex::completion::suggest;

use crate::commands::traits::Command;
use crate::error::{PovtError, Result};

/// Arguments for the complete command.
#[derive(Debug, Clone)]
pub struct CompleteArgs {
    /// The partial word, e.g. `sph` or `#dec`.
    pub word: String,
}

/// Complete command handler.
pub struct CompleteCommand {
    args: CompleteArgs,
}

impl Command for CompleteCommand {
    type Args = CompleteArgs;

    fn new(args: CompleteArgs) -> Self {
        Self { args }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let word = self.args.word.trim();
        if word.is_empty() {
            return Err(PovtError::Validation("word must not be empty".to_string()));
        }

        for keyword in suggest(Some(word)) {
            writeln!(out, "{}", keyword)?;
        }
        Ok(())
    }

    fn name() -> &'static str {
        "complete"
    }
}
