//! Command trait for the povt CLI.
//!
//! Every subcommand is built from its arguments and then writes its
//! report to a caller-supplied sink, which keeps commands testable
//! without capturing stdout.

use std::io::Write;

use crate::error::Result;

/// Standard command trait that all povt commands implement.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command, writing its output to `out`.
    fn execute(&self, out: &mut dyn Write) -> Result<()>;

    /// The subcommand name, used in log events.
    fn name() -> &'static str;
}

/// Build a command and run it against stdout.
pub fn run<C: Command>(args: C::Args) -> Result<()> {
    tracing::debug!(command = C::name(), "running command");
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    C::new(args).execute(&mut out)?;
    out.flush()?;
    Ok(())
}
