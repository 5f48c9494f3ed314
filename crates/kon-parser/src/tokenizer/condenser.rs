//! Span condensing: re-merge runs of tokens between a start and end marker.
//!
//! The classifier knows nothing about quotes, so `"hello world"` arrives as
//! five tokens. Condensing folds every `start ... end` run back into one.

use super::token::Delimiter;

/// A span that was opened but never closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenSpan<T> {
    /// Index of the start marker in the input sequence.
    pub start: usize,
    /// The items from the start marker to the end of input.
    pub items: Vec<T>,
}

/// Re-groups an ordered sequence by merging marker-delimited runs.
pub trait SpanCondenser {
    /// The element type being condensed.
    type Item;

    /// Whether `item` opens a span.
    fn is_start(&self, item: &Self::Item) -> bool;

    /// Whether `item` closes the open span.
    fn is_end(&self, item: &Self::Item) -> bool;

    /// Fold a complete run, markers included, into one item.
    fn merge(&self, span: Vec<Self::Item>) -> Self::Item;

    /// Replace every `start ... end` run in `items` by its merged item.
    ///
    /// While a span is open the end marker is checked first, so identical
    /// start and end markers alternate and spans never nest. End markers
    /// outside a span pass through unchanged.
    ///
    /// # Errors
    ///
    /// Returns the [`OpenSpan`] if the input ends inside a span.
    fn condense(&self, items: Vec<Self::Item>) -> Result<Vec<Self::Item>, OpenSpan<Self::Item>> {
        let mut output = Vec::with_capacity(items.len());
        let mut open: Option<OpenSpan<Self::Item>> = None;

        for (index, item) in items.into_iter().enumerate() {
            if let Some(mut span) = open.take() {
                let closes = self.is_end(&item);
                span.items.push(item);
                if closes {
                    output.push(self.merge(span.items));
                } else {
                    open = Some(span);
                }
            } else if self.is_start(&item) {
                open = Some(OpenSpan {
                    start: index,
                    items: vec![item],
                });
            } else {
                output.push(item);
            }
        }

        match open {
            Some(span) => Err(span),
            None => Ok(output),
        }
    }
}

/// Condenses string tokens delimited by fixed start and end texts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimitedCondenser {
    start: String,
    end: String,
}

impl DelimitedCondenser {
    /// Create a condenser for the given marker texts.
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// The condenser that reassembles `"..."` string literals.
    #[must_use]
    pub fn string_literals() -> Self {
        Self::new(Delimiter::Quote.as_str(), Delimiter::Quote.as_str())
    }
}

impl SpanCondenser for DelimitedCondenser {
    type Item = String;

    fn is_start(&self, item: &String) -> bool {
        *item == self.start
    }

    fn is_end(&self, item: &String) -> bool {
        *item == self.end
    }

    fn merge(&self, span: Vec<String>) -> String {
        span.concat()
    }
}
