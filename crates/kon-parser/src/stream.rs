//! Token stream preparation and the parser's cursor.

use crate::error::{ParseError, Result};
use crate::tokenizer::token::{Delimiter, is_blank};
use crate::tokenizer::{DelimitedCondenser, SpanCondenser};

/// Condense string literals and drop blank-only tokens.
///
/// Newline tokens are kept; they separate elements.
///
/// # Errors
///
/// Returns [`ParseError::UnterminatedLiteral`] if a `"` is never closed.
pub fn prepare_tokens(raw: Vec<String>) -> Result<Vec<String>> {
    let condensed = DelimitedCondenser::string_literals()
        .condense(raw)
        .map_err(|span| ParseError::UnterminatedLiteral {
            literal: span.items.concat(),
        })?;
    Ok(filter_blank(condensed))
}

/// Drop every token made only of blank (non-newline) whitespace.
#[must_use]
pub fn filter_blank(tokens: Vec<String>) -> Vec<String> {
    tokens.into_iter().filter(|token| !is_blank(token)).collect()
}

/// A read-only cursor over prepared tokens.
///
/// The cursor is `Copy`; every operation hands back a new cursor instead of
/// mutating in place, so a parser step is a function from one cursor to the
/// next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenStream<'a> {
    tokens: &'a [String],
    position: usize,
}

impl<'a> TokenStream<'a> {
    /// A cursor at the start of `tokens`.
    #[must_use]
    pub const fn new(tokens: &'a [String]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Index of the next token in the underlying slice.
    #[must_use]
    pub const fn position(self) -> usize {
        self.position
    }

    /// Whether every token has been consumed.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.position >= self.tokens.len()
    }

    /// The tokens not yet consumed.
    #[must_use]
    pub fn remaining(self) -> &'a [String] {
        self.tokens.get(self.position..).unwrap_or_default()
    }

    /// The next token, without consuming it.
    #[must_use]
    pub fn peek(self) -> Option<&'a str> {
        self.tokens.get(self.position).map(String::as_str)
    }

    /// Whether the next token is `delimiter`.
    #[must_use]
    pub fn peek_is(self, delimiter: Delimiter) -> bool {
        self.peek().is_some_and(|token| delimiter.is(token))
    }

    /// Skip one token.
    #[must_use]
    pub fn advance(self) -> Self {
        Self {
            position: (self.position + 1).min(self.tokens.len()),
            ..self
        }
    }

    /// Consume the next token.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnexpectedEndOfInput`] if no token is left.
    pub fn pop(self) -> Result<(&'a str, Self)> {
        let token = self.peek().ok_or(ParseError::UnexpectedEndOfInput)?;
        Ok((token, self.advance()))
    }

    /// Consume the next token, which must be `delimiter`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnexpectedToken`] on any other token and
    /// [`ParseError::UnexpectedEndOfInput`] if no token is left.
    pub fn expect(self, delimiter: Delimiter) -> Result<Self> {
        let (token, rest) = self.pop()?;
        if delimiter.is(token) {
            Ok(rest)
        } else {
            Err(ParseError::unexpected(delimiter.as_str().escape_debug(), token))
        }
    }

    /// Skip any run of newline tokens.
    #[must_use]
    pub fn skip_newlines(self) -> Self {
        let mut stream = self;
        while stream.peek_is(Delimiter::Newline) {
            stream = stream.advance();
        }
        stream
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_prepare_merges_quotes_and_drops_blanks() {
        let raw = strings(&["a", " ", "=", " ", "\"", "x", " ", "y", "\"", "\n"]);
        let prepared = prepare_tokens(raw).unwrap();
        assert_eq!(prepared, strings(&["a", "=", "\"x y\"", "\n"]));
    }

    #[test]
    fn test_prepare_reports_unterminated_literal() {
        let raw = strings(&["a", "=", "\"", "x", " "]);
        assert_eq!(
            prepare_tokens(raw),
            Err(ParseError::UnterminatedLiteral {
                literal: "\"x ".to_string()
            })
        );
    }

    #[test]
    fn test_cursor_is_by_value() {
        let tokens = strings(&["\n", "\n", "a", "="]);
        let start = TokenStream::new(&tokens);
        let after = start.skip_newlines();
        assert_eq!(start.position(), 0);
        assert_eq!(after.peek(), Some("a"));
        let (name, rest) = after.pop().unwrap();
        assert_eq!(name, "a");
        assert!(rest.expect(Delimiter::Equals).unwrap().is_empty());
    }

    #[test]
    fn test_pop_at_end() {
        let tokens = strings(&[]);
        let stream = TokenStream::new(&tokens);
        assert_eq!(stream.pop(), Err(ParseError::UnexpectedEndOfInput));
        assert_eq!(stream.advance().position(), 0);
        assert!(stream.remaining().is_empty());
    }

    #[test]
    fn test_expect_mismatch() {
        let tokens = strings(&["x"]);
        let err = TokenStream::new(&tokens).expect(Delimiter::CloseBrace).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                expected: "}".to_string(),
                actual: "x".to_string()
            }
        );
    }
}
