//! Lexer module.
//!
//! - `core` - the Lexer driver and its scan loop
//! - `state` - classification states with their entry, end and resolution rules

mod core;
pub mod state;

pub use core::{tokenize, Lexer};
pub use state::State;
