//! Command modules for the povt CLI.
//!
//! Each subcommand lives in its own file and implements [`traits::Command`].

pub mod common;
pub mod traits;

pub mod complete;
pub mod keywords;
pub mod tokens;

// Re-export command types
pub use complete::{CompleteArgs, CompleteCommand};
pub use keywords::{KeywordsArgs, KeywordsCommand};
pub use tokens::{TokensArgs, TokensCommand};
