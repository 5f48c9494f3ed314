//! The KON data model: scalar values, numbers with units, and elements.
//!
//! Elements and values are plain owned data. The parser builds them bottom-up
//! and hands the whole tree to the caller; nothing is shared between parses.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// Map of attribute names to values for an element.
///
/// Keys are unique; inserting an existing key overwrites the earlier value.
pub type Attributes = BTreeMap<String, KonValue>;

/// The unit suffix attached to every numeric value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum NumberUnit {
    /// No unit, e.g. `10`.
    Pure,
    /// A bare-word unit, e.g. the `px` of `10 px`.
    Named(String),
}

impl NumberUnit {
    /// The unit name, or `None` for a pure number.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Pure => None,
            Self::Named(name) => Some(name),
        }
    }
}

impl fmt::Display for NumberUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pure => Ok(()),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// The numeric part of a [`KonNumber`].
#[derive(Debug, Clone, Copy, Serialize)]
pub enum Magnitude {
    /// An integral literal such as `42` or `-3`.
    Integer(i64),
    /// A fractional literal such as `3.5`.
    Decimal(f64),
}

impl Magnitude {
    /// The magnitude widened to `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(i) => i as f64,
            Self::Decimal(d) => d,
        }
    }
}

// Decimals compare by bit pattern so that `Eq` and `Hash` agree. The decimal
// literal grammar has no spelling for NaN.
impl PartialEq for Magnitude {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Decimal(a), Self::Decimal(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for Magnitude {}

impl Hash for Magnitude {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Integer(i) => {
                0u8.hash(state);
                i.hash(state);
            }
            Self::Decimal(d) => {
                1u8.hash(state);
                d.to_bits().hash(state);
            }
        }
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Decimal(d) => write!(f, "{d:?}"),
        }
    }
}

/// A number with its unit.
///
/// `literal` keeps the source spelling (`+07`, `3.50`) for diagnostics.
/// Equality and hashing look at the magnitude and unit only.
#[derive(Debug, Clone, Serialize)]
pub struct KonNumber {
    /// The numeric value.
    pub magnitude: Magnitude,
    /// The unit suffix.
    pub unit: NumberUnit,
    /// The literal as written in the source.
    pub literal: String,
}

impl KonNumber {
    /// Create an integral number, spelling the literal canonically.
    #[must_use]
    pub fn integer(value: i64, unit: NumberUnit) -> Self {
        Self {
            magnitude: Magnitude::Integer(value),
            unit,
            literal: value.to_string(),
        }
    }

    /// Create a fractional number, spelling the literal canonically.
    #[must_use]
    pub fn decimal(value: f64, unit: NumberUnit) -> Self {
        Self {
            magnitude: Magnitude::Decimal(value),
            unit,
            literal: format!("{value:?}"),
        }
    }

    /// Whether this number came from an integral literal.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self.magnitude, Magnitude::Integer(_))
    }
}

impl PartialEq for KonNumber {
    fn eq(&self, other: &Self) -> bool {
        self.magnitude == other.magnitude && self.unit == other.unit
    }
}

impl Eq for KonNumber {}

impl Hash for KonNumber {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.magnitude.hash(state);
        self.unit.hash(state);
    }
}

impl fmt::Display for KonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.unit {
            NumberUnit::Pure => write!(f, "{}", self.magnitude),
            NumberUnit::Named(unit) => write!(f, "{} {unit}", self.magnitude),
        }
    }
}

/// A scalar value: the right-hand side of an attribute or of `element = ...`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub enum KonValue {
    /// No value. The default for elements without `= value`.
    #[default]
    None,
    /// A quoted string with its delimiters stripped.
    String(String),
    /// A bare word such as `foo` or `snake_case`.
    Symbol(String),
    /// A number with an optional unit.
    Number(KonNumber),
}

impl KonValue {
    /// A string value.
    #[must_use]
    pub fn string(text: impl Into<String>) -> Self {
        Self::String(text.into())
    }

    /// A symbol value.
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// An integral number value.
    #[must_use]
    pub fn integer(value: i64, unit: NumberUnit) -> Self {
        Self::Number(KonNumber::integer(value, unit))
    }

    /// A fractional number value.
    #[must_use]
    pub fn decimal(value: f64, unit: NumberUnit) -> Self {
        Self::Number(KonNumber::decimal(value, unit))
    }

    /// Whether this is [`KonValue::None`].
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The text of a string or symbol value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) | Self::Symbol(text) => Some(text),
            Self::None | Self::Number(_) => None,
        }
    }

    /// The number, if this is a numeric value.
    #[must_use]
    pub const fn as_number(&self) -> Option<&KonNumber> {
        match self {
            Self::Number(number) => Some(number),
            _ => None,
        }
    }
}

impl fmt::Display for KonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => Ok(()),
            Self::String(text) => write!(f, "\"{text}\""),
            Self::Symbol(name) => f.write_str(name),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}

/// A named node with attributes, children, and an optional value.
///
/// Children keep source order. A value and children may coexist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct KonElement {
    /// The element name.
    pub name: String,
    /// Attributes from the parenthesized list.
    pub attributes: Attributes,
    /// Child elements from the brace block, in source order.
    pub children: Vec<KonElement>,
    /// The `= value` suffix, or [`KonValue::None`].
    pub value: KonValue,
}

impl KonElement {
    /// An element with no attributes, children, or value.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add an attribute, overwriting any earlier one with the same name.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: KonValue) -> Self {
        let _ = self.attributes.insert(name.into(), value);
        self
    }

    /// Append a child element.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Set the element value.
    #[must_use]
    pub fn with_value(mut self, value: KonValue) -> Self {
        self.value = value;
        self
    }

    /// Look up an attribute by name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&KonValue> {
        self.attributes.get(name)
    }

    /// The first child with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|child| child.name == name)
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let prefix = "  ".repeat(depth);
        write!(f, "{prefix}{}", self.name)?;

        if !self.attributes.is_empty() {
            let attrs: Vec<String> = self
                .attributes
                .iter()
                .map(|(name, value)| format!("{name} = {value}"))
                .collect();
            write!(f, " ({})", attrs.join(", "))?;
        }

        if !self.children.is_empty() {
            writeln!(f, " {{")?;
            for child in &self.children {
                child.write_indented(f, depth + 1)?;
                writeln!(f)?;
            }
            write!(f, "{prefix}}}")?;
        }

        if !self.value.is_none() {
            write!(f, " = {}", self.value)?;
        }
        Ok(())
    }
}

impl fmt::Display for KonElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_number_equality_ignores_literal() {
        let mut a = KonNumber::integer(7, NumberUnit::Pure);
        let b = KonNumber::integer(7, NumberUnit::Pure);
        a.literal = "+07".to_string();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_number_equality_respects_unit() {
        let a = KonNumber::integer(10, NumberUnit::Named("px".to_string()));
        let b = KonNumber::integer(10, NumberUnit::Pure);
        assert_ne!(a, b);
    }

    #[test]
    fn test_integer_never_equals_decimal() {
        let a = KonValue::integer(1, NumberUnit::Pure);
        let b = KonValue::decimal(1.0, NumberUnit::Pure);
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_element_tree() {
        let element = KonElement::new("window")
            .with_attribute("width", KonValue::integer(640, NumberUnit::Named("px".into())))
            .with_child(KonElement::new("title").with_value(KonValue::string("Hi")))
            .with_value(KonValue::symbol("visible"));
        assert_eq!(
            element.to_string(),
            "window (width = 640 px) {\n  title = \"Hi\"\n} = visible"
        );
    }

    #[test]
    fn test_display_decimal_keeps_fraction() {
        assert_eq!(KonValue::decimal(-3.5, NumberUnit::Pure).to_string(), "-3.5");
        assert_eq!(KonValue::decimal(2.0, NumberUnit::Pure).to_string(), "2.0");
    }
}
