use super::rules::RuleSet;

/// Character-classification tokenizer.
///
/// Splits the input into maximal substrings in a single left-to-right pass.
/// A character joins the current token when some rule in the table links it
/// to the previous character; otherwise it starts a new token. Characters no
/// rule covers (punctuation, quotes, newlines) therefore end up as
/// one-character tokens. The tokens partition the input exactly: no gaps,
/// no overlaps.
pub struct KonTokenizer {
    /// The input string being tokenized
    input: Vec<char>,
    /// The adjacency rules in effect
    rules: RuleSet,
    /// Collected tokens
    tokens: Vec<String>,
}

impl KonTokenizer {
    /// Create a tokenizer for `input` using the KON rule table.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self::with_rules(input, RuleSet::kon())
    }

    /// Create a tokenizer for `input` using a custom rule table.
    #[must_use]
    pub fn with_rules(input: impl Into<String>, rules: RuleSet) -> Self {
        Self {
            input: input.into().chars().collect(),
            rules,
            tokens: Vec::new(),
        }
    }

    /// Split the whole input into tokens.
    pub fn run(&mut self) {
        let mut current = String::new();
        let mut prev: Option<char> = None;

        for &c in &self.input {
            let joins = prev.is_some_and(|p| self.rules.joins(p, c));
            if !joins && !current.is_empty() {
                self.tokens.push(std::mem::take(&mut current));
            }
            current.push(c);
            prev = Some(c);
        }

        if !current.is_empty() {
            self.tokens.push(current);
        }
    }

    /// Return the collected tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<String> {
        self.tokens
    }

    /// Return a reference to the collected tokens.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

/// Tokenize `input` with the KON rule table.
#[must_use]
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokenizer = KonTokenizer::new(input);
    tokenizer.run();
    tokenizer.into_tokens()
}
