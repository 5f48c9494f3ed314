//! Adjacency rules for the character-classification tokenizer.
//!
//! The tokenizer has no per-character state machine. Instead it asks a small
//! table of rules whether the next character may join the token being built.
//! A rule pairs a `first` class with a `then` class: the `first` class is
//! tested against the last character already in the token, the `then` class
//! against the incoming character.

use strum_macros::{Display, EnumIter};

/// A character predicate used by the KON rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum CharClass {
    /// Any alphabetic character (Unicode).
    Letter,
    /// An ASCII digit `0`..=`9`.
    Digit,
    /// `+` or `-` in leading-sign position.
    Sign,
    /// `.`
    Dot,
    /// `_`
    Underscore,
    /// `-`
    Hyphen,
    /// Whitespace other than a newline.
    Blank,
}

impl CharClass {
    /// Whether `c` belongs to this class.
    #[must_use]
    pub fn matches(self, c: char) -> bool {
        match self {
            Self::Letter => c.is_alphabetic(),
            Self::Digit => c.is_ascii_digit(),
            Self::Sign => c == '+' || c == '-',
            Self::Dot => c == '.',
            Self::Underscore => c == '_',
            Self::Hyphen => c == '-',
            Self::Blank => c.is_whitespace() && c != '\n',
        }
    }
}

/// One adjacency rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// A `first` character may be followed by a `then` character.
    Directed {
        /// Class of the last character already in the token.
        first: CharClass,
        /// Class of the incoming character.
        then: CharClass,
    },
    /// Runs of the same class stick together.
    Same(CharClass),
    /// The two classes may alternate freely in either order.
    Symmetric(CharClass, CharClass),
}

impl Rule {
    /// Whether `next` may extend a token whose last character is `prev`.
    #[must_use]
    pub fn joins(self, prev: char, next: char) -> bool {
        match self {
            Self::Directed { first, then } => first.matches(prev) && then.matches(next),
            Self::Same(class) => class.matches(prev) && class.matches(next),
            Self::Symmetric(a, b) => {
                (a.matches(prev) && b.matches(next)) || (b.matches(prev) && a.matches(next))
            }
        }
    }
}

/// An ordered table of adjacency rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Create a rule set from an explicit table.
    #[must_use]
    pub const fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The rule table of the KON notation.
    ///
    /// - identifiers may carry digits after a letter or `_` (`h1`, `col_1`)
    /// - a sign may lead a digit run (`-3`)
    /// - letters, digits, and blanks each aggregate
    /// - digits interleave with `.` (`3.5`)
    /// - letters interleave with `_` and `-` (`snake_case`, `kebab-case`)
    #[must_use]
    pub fn kon() -> Self {
        use CharClass::{Blank, Digit, Dot, Hyphen, Letter, Sign, Underscore};

        Self::new(vec![
            Rule::Directed {
                first: Letter,
                then: Digit,
            },
            Rule::Directed {
                first: Underscore,
                then: Digit,
            },
            Rule::Directed {
                first: Sign,
                then: Digit,
            },
            Rule::Same(Letter),
            Rule::Same(Digit),
            Rule::Same(Blank),
            Rule::Symmetric(Digit, Dot),
            Rule::Symmetric(Letter, Underscore),
            Rule::Symmetric(Letter, Hyphen),
        ])
    }

    /// Whether any rule lets `next` extend a token ending in `prev`.
    #[must_use]
    pub fn joins(&self, prev: char, next: char) -> bool {
        self.rules.iter().any(|rule| rule.joins(prev, next))
    }

    /// The rules in table order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::kon()
    }
}
