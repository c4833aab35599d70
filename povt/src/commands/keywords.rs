//! Keywords command implementation.
//!
//! Prints the keyword table, optionally narrowed to the words editors
//! treat specially.

use std::io::Write;

use povc_lex::Keyword;

use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the keywords command.
///
/// Filters combine with OR; with none set the whole table is listed.
#[derive(Debug, Clone, Default)]
pub struct KeywordsArgs {
    /// Include directives that follow `#`.
    pub after_directive: bool,
    /// Include shape keywords.
    pub shapes: bool,
    /// Include visual attribute keywords.
    pub visual: bool,
}

impl KeywordsArgs {
    fn is_filtered(&self) -> bool {
        self.after_directive || self.shapes || self.visual
    }

    fn selects(&self, keyword: Keyword) -> bool {
        !self.is_filtered()
            || (self.after_directive && keyword.occurs_after_directive_prefix())
            || (self.shapes && keyword.is_shape())
            || (self.visual && keyword.is_visual_attribute())
    }
}

/// Keywords command handler.
pub struct KeywordsCommand {
    args: KeywordsArgs,
}

impl KeywordsCommand {
    /// Keywords selected by the filters, in table order.
    pub fn selected(&self) -> Vec<Keyword> {
        Keyword::ALL
            .iter()
            .copied()
            .filter(|&k| self.args.selects(k))
            .collect()
    }
}

impl Command for KeywordsCommand {
    type Args = KeywordsArgs;

    fn new(args: KeywordsArgs) -> Self {
        Self { args }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<()> {
        let keywords = self.selected();
        tracing::debug!(count = keywords.len(), "listing keywords");
        for keyword in keywords {
            writeln!(out, "{}", keyword)?;
        }
        Ok(())
    }

    fn name() -> &'static str {
        "keywords"
    }
}
