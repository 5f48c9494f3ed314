//! Error types for the KON front end.
//!
//! Every failure is fatal: the first error aborts the whole parse and no
//! partial tree is returned.

use std::fmt;

use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ParseError>;

/// A parse-time failure tied to the offending token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `"` opened a string literal that was never closed.
    #[error("unterminated literal {literal}")]
    UnterminatedLiteral {
        /// The merged text from the opening quote to the end of input.
        literal: String,
    },

    /// A mandatory token was not found where the grammar requires it.
    #[error("expected '{expected}' instead got '{actual}'")]
    UnexpectedToken {
        /// What the grammar required at this point.
        expected: String,
        /// The token that was actually found.
        actual: String,
    },

    /// A value-position token matched none of the scalar forms.
    #[error("illegal value '{token}'")]
    IllegalValue {
        /// The offending token.
        token: String,
    },

    /// The token stream ran out while a construct still needed tokens.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    /// Child blocks are nested deeper than the parser allows.
    #[error("child blocks nested deeper than {limit} levels")]
    NestingTooDeep {
        /// The deepest nesting the parser accepts.
        limit: usize,
    },
}

impl ParseError {
    /// Build a [`ParseError::UnexpectedToken`] from anything printable.
    #[must_use]
    pub fn unexpected(expected: impl fmt::Display, actual: impl Into<String>) -> Self {
        Self::UnexpectedToken {
            expected: expected.to_string(),
            actual: actual.into(),
        }
    }

    /// Build an [`ParseError::IllegalValue`].
    #[must_use]
    pub fn illegal_value(token: impl Into<String>) -> Self {
        Self::IllegalValue {
            token: token.into(),
        }
    }
}
