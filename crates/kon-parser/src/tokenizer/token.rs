//! Structural tokens of the KON notation.
//!
//! Tokens themselves are plain strings; this module names the fixed
//! single-character tokens the parser looks for and classifies word tokens.

use std::fmt;

use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

/// The fixed punctuation of the notation. None of these are configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Delimiter {
    /// Opens an attribute list.
    #[strum(serialize = "(")]
    OpenParen,
    /// Closes an attribute list.
    #[strum(serialize = ")")]
    CloseParen,
    /// Opens a child block.
    #[strum(serialize = "{")]
    OpenBrace,
    /// Closes a child block.
    #[strum(serialize = "}")]
    CloseBrace,
    /// Separates a name from its value.
    #[strum(serialize = "=")]
    Equals,
    /// Separates attribute entries.
    #[strum(serialize = ",")]
    Comma,
    /// Delimits a string literal.
    #[strum(serialize = "\"")]
    Quote,
    /// Separates elements.
    #[strum(serialize = "\n")]
    Newline,
}

impl Delimiter {
    /// The literal token text.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Whether `token` is exactly this delimiter.
    #[must_use]
    pub fn is(self, token: &str) -> bool {
        token == self.as_str()
    }

    /// The delimiter spelled by `token`, if any.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::iter().find(|delimiter| delimiter.is(token))
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `token` consists only of blank (non-newline) whitespace.
#[must_use]
pub fn is_blank(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_whitespace() && c != '\n')
}

/// Whether `token` can name an element or attribute.
///
/// A name starts with a letter or `_` and continues with letters, digits,
/// `_`, or `-`.
#[must_use]
pub fn is_name(token: &str) -> bool {
    let mut chars = token.chars();
    chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

/// Whether `token` is a bare word: letters, digits, and `_` only.
///
/// Only bare words are taken as a number's unit.
#[must_use]
pub fn is_bare_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimiter_round_trip() {
        for delimiter in Delimiter::iter() {
            assert_eq!(Delimiter::from_token(delimiter.as_str()), Some(delimiter));
        }
        assert_eq!(Delimiter::from_token("(("), None);
    }

    #[test]
    fn test_delimiter_display_is_token_text() {
        assert_eq!(Delimiter::OpenBrace.to_string(), "{");
        assert_eq!(Delimiter::CloseBrace.to_string(), "}");
        assert_eq!(Delimiter::Newline.to_string(), "\n");
    }

    #[test]
    fn test_names() {
        assert!(is_name("kebab-case"));
        assert!(is_name("_private"));
        assert!(is_name("h1"));
        assert!(!is_name("1h"));
        assert!(!is_name("-x"));
        assert!(!is_name(""));
    }

    #[test]
    fn test_bare_words() {
        assert!(is_bare_word("px"));
        assert!(is_bare_word("abc"));
        assert!(!is_bare_word("\n"));
        assert!(!is_bare_word("\"s\""));
        assert!(!is_bare_word("em-x"));
    }
}
