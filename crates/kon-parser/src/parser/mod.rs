//! KON parser module.

/// Recursive-descent parser over a prepared token stream.
#[allow(clippy::module_inception)]
pub mod parser;

pub use parser::{KonParser, MAX_NESTING_DEPTH, ParseIssue, parse_scalar};
