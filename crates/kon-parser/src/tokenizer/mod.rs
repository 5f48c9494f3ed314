//! KON tokenizer module.

/// Span condensing for quoted literals.
pub mod condenser;
/// Adjacency rules evaluated per character.
pub mod rules;
/// Structural token helpers.
pub mod token;
/// Tokenizer implementation.
#[allow(clippy::module_inception)]
pub mod tokenizer;

pub use condenser::{DelimitedCondenser, OpenSpan, SpanCondenser};
pub use rules::{CharClass, Rule, RuleSet};
pub use token::Delimiter;
pub use tokenizer::{KonTokenizer, tokenize};
