//! Recursive-descent parser for KON.
//!
//! ```text
//! Document   := (Newlines Element Newlines)*
//! Element    := Name Newlines Attributes? Children? Value?
//! Attributes := '(' (Name '=' Scalar ','?)* ')'
//! Children   := '{' (Newlines Element Newlines)* '}'
//! Value      := '=' Scalar
//! Scalar     := StringLit | Number Unit? | Symbol
//! ```
//!
//! Every production takes a [`TokenStream`] cursor by value and returns the
//! cursor after the tokens it consumed. One token of lookahead decides
//! every branch; nothing backtracks.
//!
//! Child blocks may nest at most [`MAX_NESTING_DEPTH`] levels deep.

use crate::error::{ParseError, Result};
use crate::stream::TokenStream;
use crate::tokenizer::token::{Delimiter, is_bare_word, is_name};
use crate::value::{Attributes, KonElement, KonNumber, KonValue, Magnitude, NumberUnit};

/// Deepest child-block nesting accepted before [`ParseError::NestingTooDeep`].
pub const MAX_NESTING_DEPTH: usize = 128;

/// A non-fatal observation made while parsing.
///
/// Issues never change the resulting tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    /// Human-readable description.
    pub message: String,
    /// Index into the prepared token stream where the issue was noticed.
    pub token_index: usize,
}

/// KON parser over a prepared token stream.
pub struct KonParser {
    tokens: Vec<String>,
    issues: Vec<ParseIssue>,
    /// Number of child blocks currently open.
    depth: usize,
}

impl KonParser {
    /// Create a new parser from prepared tokens.
    #[must_use]
    pub const fn new(tokens: Vec<String>) -> Self {
        Self {
            tokens,
            issues: Vec::new(),
            depth: 0,
        }
    }

    /// Parse the whole document into its root elements.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered; no partial tree is kept.
    pub fn run(self) -> Result<Vec<KonElement>> {
        self.run_with_issues().map(|(elements, _)| elements)
    }

    /// Parse the whole document and also return the collected issues.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered; no partial tree is kept.
    pub fn run_with_issues(mut self) -> Result<(Vec<KonElement>, Vec<ParseIssue>)> {
        let tokens = std::mem::take(&mut self.tokens);
        let elements = self.parse_document(TokenStream::new(&tokens))?;
        Ok((elements, self.issues))
    }

    fn parse_document(&mut self, mut stream: TokenStream<'_>) -> Result<Vec<KonElement>> {
        let mut roots = Vec::new();

        loop {
            stream = stream.skip_newlines();
            if stream.is_empty() {
                return Ok(roots);
            }
            let (element, rest) = self.parse_element(stream)?;
            roots.push(element);
            stream = rest;
        }
    }

    fn parse_element<'a>(&mut self, stream: TokenStream<'a>) -> Result<(KonElement, TokenStream<'a>)> {
        // STEP 1: Name, then any newlines before the optional parts.
        let (name, stream) = parse_name(stream)?;
        let mut element = KonElement::new(name);
        let mut stream = stream.skip_newlines();

        // STEP 2: "(" starts the attribute list.
        if stream.peek_is(Delimiter::OpenParen) {
            stream = self.parse_attributes(stream.advance(), &mut element.attributes)?;
        }

        // STEP 3: "{" starts the child block.
        if stream.peek_is(Delimiter::OpenBrace) {
            let (children, rest) = self.parse_children(stream.advance())?;
            element.children = children;
            stream = rest;
        }

        // STEP 4: "=" introduces the element value.
        if stream.peek_is(Delimiter::Equals) {
            let (value, rest) = parse_scalar(stream.advance())?;
            element.value = value;
            stream = rest;
        }

        Ok((element, stream))
    }

    /// Parse attribute entries after the opening `(`, through the closing `)`.
    fn parse_attributes<'a>(
        &mut self,
        mut stream: TokenStream<'a>,
        attributes: &mut Attributes,
    ) -> Result<TokenStream<'a>> {
        loop {
            match stream.peek() {
                None => return Err(ParseError::UnexpectedEndOfInput),
                Some(token) if Delimiter::CloseParen.is(token) => return Ok(stream.advance()),
                Some(_) => {}
            }

            let token_index = stream.position();
            let (name, rest) = parse_name(stream)?;
            let rest = rest.expect(Delimiter::Equals)?;
            let (value, rest) = parse_scalar(rest)?;

            if attributes.insert(name.to_string(), value).is_some() {
                self.issues.push(ParseIssue {
                    message: format!("duplicate attribute '{name}' overwrites the earlier value"),
                    token_index,
                });
            }

            stream = if rest.peek_is(Delimiter::Comma) {
                rest.advance()
            } else {
                rest
            };
        }
    }

    /// Parse child elements after the opening `{`, through the closing `}`.
    fn parse_children<'a>(
        &mut self,
        mut stream: TokenStream<'a>,
    ) -> Result<(Vec<KonElement>, TokenStream<'a>)> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            });
        }
        self.depth += 1;
        let mut children = Vec::new();

        loop {
            stream = stream.skip_newlines();
            match stream.peek() {
                None => return Err(ParseError::UnexpectedEndOfInput),
                Some(token) if Delimiter::CloseBrace.is(token) => {
                    self.depth -= 1;
                    return Ok((children, stream.advance()));
                }
                Some(token) if !is_name(token) => {
                    return Err(ParseError::unexpected(Delimiter::CloseBrace, token));
                }
                Some(_) => {}
            }

            let (child, rest) = self.parse_element(stream)?;
            children.push(child);
            stream = rest;
        }
    }
}

/// Consume an element or attribute name.
fn parse_name(stream: TokenStream<'_>) -> Result<(&str, TokenStream<'_>)> {
    let (token, rest) = stream.pop()?;
    if is_name(token) {
        Ok((token, rest))
    } else {
        Err(ParseError::unexpected("name", token))
    }
}

/// Consume one scalar value: a string, a number with optional unit, or a symbol.
///
/// # Errors
///
/// Returns [`ParseError::IllegalValue`] for a token that is none of those,
/// or [`ParseError::UnexpectedEndOfInput`] if the stream is empty.
pub fn parse_scalar(stream: TokenStream<'_>) -> Result<(KonValue, TokenStream<'_>)> {
    let (token, stream) = stream.pop()?;

    if let Some(text) = strip_quotes(token) {
        return Ok((KonValue::String(text.to_string()), stream));
    }

    if is_decimal_literal(token) {
        let value: f64 = token
            .parse()
            .map_err(|_| ParseError::illegal_value(token))?;
        return Ok(number(Magnitude::Decimal(value), token, stream));
    }

    if is_integer_literal(token) {
        // Out-of-range integers are not representable.
        let value: i64 = token
            .parse()
            .map_err(|_| ParseError::illegal_value(token))?;
        return Ok(number(Magnitude::Integer(value), token, stream));
    }

    if is_name(token) {
        return Ok((KonValue::Symbol(token.to_string()), stream));
    }

    Err(ParseError::illegal_value(token))
}

/// Attach the optional unit that follows a numeric literal.
fn number<'a>(
    magnitude: Magnitude,
    literal: &str,
    stream: TokenStream<'a>,
) -> (KonValue, TokenStream<'a>) {
    let (unit, stream) = match stream.peek() {
        Some(word) if is_bare_word(word) => (NumberUnit::Named(word.to_string()), stream.advance()),
        _ => (NumberUnit::Pure, stream),
    };
    let number = KonNumber {
        magnitude,
        unit,
        literal: literal.to_string(),
    };
    (KonValue::Number(number), stream)
}

/// The contents of a `"..."` token, delimiters removed.
fn strip_quotes(token: &str) -> Option<&str> {
    let quote = Delimiter::Quote.as_str();
    if token.len() >= 2 * quote.len() {
        token.strip_prefix(quote)?.strip_suffix(quote)
    } else {
        None
    }
}

fn strip_sign(token: &str) -> &str {
    token.strip_prefix(['+', '-']).unwrap_or(token)
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// `[+-]?digits`
fn is_integer_literal(token: &str) -> bool {
    is_digits(strip_sign(token))
}

/// `[+-]?digits.digits`
fn is_decimal_literal(token: &str) -> bool {
    strip_sign(token)
        .split_once('.')
        .is_some_and(|(whole, fraction)| is_digits(whole) && is_digits(fraction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_shapes() {
        assert!(is_integer_literal("42"));
        assert!(is_integer_literal("-42"));
        assert!(is_integer_literal("+7"));
        assert!(!is_integer_literal("-"));
        assert!(!is_integer_literal("4.2"));

        assert!(is_decimal_literal("3.5"));
        assert!(is_decimal_literal("-0.25"));
        assert!(!is_decimal_literal("3."));
        assert!(!is_decimal_literal(".5"));
        assert!(!is_decimal_literal("1.2.3"));
    }

    #[test]
    fn test_strip_quotes() {
        assert_eq!(strip_quotes("\"a b\""), Some("a b"));
        assert_eq!(strip_quotes("\"\""), Some(""));
        assert_eq!(strip_quotes("\""), None);
        assert_eq!(strip_quotes("abc"), None);
    }
}
