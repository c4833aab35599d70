//! Povt CLI - command-line tools for POV-Ray scene files.
//!
//! This is the main entry point for the povt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::OutputFormat, traits, CompleteArgs, CompleteCommand, KeywordsArgs, KeywordsCommand,
    TokensArgs, TokensCommand,
};
use config::Config;
use error::{PovtError, Result};

/// Povt - command-line tools for POV-Ray scene files
///
/// Povt lexes scene files and exposes the keyword table used by
/// syntax highlighting and completion.
#[derive(Parser, Debug)]
#[command(name = "povt")]
#[command(author = "Povc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line tools for POV-Ray scene files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "POVT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "POVT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "POVT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the povt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the tokens of a scene file
    ///
    /// Every character of the file belongs to exactly one token, so the
    /// listing covers whitespace and comments too.
    Tokens(TokensCommandArgs),

    /// List scene language keywords
    Keywords(KeywordsCommandArgs),

    /// Suggest keywords for a partial word
    Complete(CompleteCommandArgs),
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommandArgs {
    /// Scene file to lex
    file: PathBuf,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Leave whitespace tokens out of the listing
    #[arg(short, long)]
    skip_whitespace: bool,
}

/// Arguments for the keywords subcommand.
#[derive(Parser, Debug)]
struct KeywordsCommandArgs {
    /// Directives that may follow `#`
    #[arg(long)]
    after_directive: bool,

    /// Shape keywords
    #[arg(long)]
    shapes: bool,

    /// Visual attribute keywords (texture, pigment, ...)
    #[arg(long)]
    visual: bool,
}

/// Arguments for the complete subcommand.
#[derive(Parser, Debug)]
struct CompleteCommandArgs {
    /// Partial word, e.g. `sph` or `#dec`
    #[arg(allow_hyphen_values = true)]
    word: String,
}

/// Main entry point for the povt CLI.
///
/// Errors are reported on stderr as `error: <message>` with exit code 1.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

/// Load configuration, initialize logging and run the selected command.
fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config.as_deref()).context("could not load configuration")?;
    let verbose = cli.verbose || config.verbose;

    init_logging(verbose, cli.no_color)?;

    execute_command(cli.command, config)?;
    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| PovtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::Keywords(args) => traits::run::<KeywordsCommand>(KeywordsArgs {
            after_directive: args.after_directive,
            shapes: args.shapes,
            visual: args.visual,
        }),
        Commands::Complete(args) => {
            traits::run::<CompleteCommand>(CompleteArgs { word: args.word })
        }
    }
}

/// Execute the tokens command, filling unset flags from the config.
fn execute_tokens(args: TokensCommandArgs, config: Config) -> Result<()> {
    let format: OutputFormat = args
        .format
        .as_deref()
        .unwrap_or(&config.tokens.format)
        .parse()?;

    traits::run::<TokensCommand>(TokensArgs {
        path: args.file,
        format,
        skip_whitespace: args.skip_whitespace || config.tokens.skip_whitespace,
    })
}
