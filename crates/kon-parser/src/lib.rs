//! Tokenizer and parser for KON, a small configuration and markup notation.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer** - a single left-to-right pass driven by a table of
//!   character adjacency rules ([`RuleSet`]) instead of a hand-written
//!   state machine
//! - **Span condenser** - re-merges the pieces of `"quoted strings"` that
//!   the classifier split apart ([`SpanCondenser`])
//! - **Token stream** - condensed tokens with blank whitespace removed and
//!   newlines kept, read through a by-value cursor ([`TokenStream`])
//! - **Parser** - recursive descent into a tree of [`KonElement`]s
//!
//! ```text
//! window (width = 640 px, title = "Main") {
//!     button (id = ok) = "OK"
//!     spacing = 1.5 em
//! }
//! ```
//!
//! The crate does no I/O and never logs. A parse either returns the whole
//! tree or the first [`ParseError`].
//!
//! # Not Yet Implemented
//!
//! - Escape sequences inside string literals
//! - Source positions (line/column) in errors

/// Error types.
pub mod error;
/// Recursive-descent parser.
pub mod parser;
/// Token stream preparation and cursor.
pub mod stream;
/// Rule-based tokenizer and span condenser.
pub mod tokenizer;
/// Elements and scalar values.
pub mod value;

pub use error::{ParseError, Result};
pub use parser::{KonParser, MAX_NESTING_DEPTH, ParseIssue, parse_scalar};
pub use stream::{TokenStream, filter_blank, prepare_tokens};
pub use tokenizer::{
    CharClass, DelimitedCondenser, Delimiter, KonTokenizer, OpenSpan, Rule, RuleSet,
    SpanCondenser, tokenize,
};
pub use value::{Attributes, KonElement, KonNumber, KonValue, Magnitude, NumberUnit};

/// Parse KON source text into its root elements.
///
/// # Errors
///
/// Returns the first [`ParseError`] met while tokenizing or parsing.
pub fn parse(source: &str) -> Result<Vec<KonElement>> {
    KonParser::new(prepare_tokens(tokenize(source))?).run()
}

/// Parse KON source text and also return the non-fatal [`ParseIssue`]s.
///
/// # Errors
///
/// Returns the first [`ParseError`] met while tokenizing or parsing.
pub fn parse_with_issues(source: &str) -> Result<(Vec<KonElement>, Vec<ParseIssue>)> {
    KonParser::new(prepare_tokens(tokenize(source))?).run_with_issues()
}
