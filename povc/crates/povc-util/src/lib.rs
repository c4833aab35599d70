//! povc-util - foundation types shared by the povc crates.
//!
//! - [`span`] - byte spans with line/column and loaded scene files
//! - [`error`] - errors raised while loading scene files

pub mod error;
pub mod span;

pub use error::{SourceMapError, SourceMapResult};
pub use span::{SourceFile, Span};
