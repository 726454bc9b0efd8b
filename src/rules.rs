//! Canonical style rules, the common currency between parsing and
//! application.
//!
//! Every style source, raw CSS text or a structured kit payload, is
//! normalized into a [`RuleSet`] before any node is touched. A rule set
//! maps a selector (or layer name) to a property map; property order is
//! irrelevant and never observed.

use std::collections::HashMap;
use std::fmt;

/// A single property value: free-form text or a number.
///
/// CSS declarations always arrive as [`PropertyValue::Text`]; kit
/// payloads carry typed numbers. Stringification via [`fmt::Display`]
/// feeds the annotation fallback, so no value kind is ever dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Text(String),
    Number(f64),
}

impl PropertyValue {
    /// Returns the text form, if this value is textual.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(text) => Some(text),
            PropertyValue::Number(_) => None,
        }
    }

    /// Returns the numeric form, if this value is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Text(_) => None,
            PropertyValue::Number(n) => Some(*n),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Text(text) => f.write_str(text),
            PropertyValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(text: &str) -> Self {
        PropertyValue::Text(text.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(text: String) -> Self {
        PropertyValue::Text(text)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Number(n)
    }
}

/// Properties resolved for one selector or layer name.
pub type PropertyMap = HashMap<String, PropertyValue>;

/// Normalized selector/name → property-map records.
///
/// Selectors are unique; inserting a property under an existing selector
/// merges into it, and re-inserting a property name overwrites the
/// previous value (last write wins). A rule set is built fresh per
/// invocation and discarded after application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleSet {
    rules: HashMap<String, PropertyMap>,
}

impl RuleSet {
    /// Creates an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property under a selector, creating the rule if needed.
    pub fn set(&mut self, selector: &str, property: &str, value: impl Into<PropertyValue>) {
        self.rules
            .entry(selector.to_string())
            .or_default()
            .insert(property.to_string(), value.into());
    }

    /// Returns the property map for a selector, if any rule carries it.
    pub fn get(&self, selector: &str) -> Option<&PropertyMap> {
        self.rules.get(selector)
    }

    /// Returns one property value under a selector.
    pub fn property(&self, selector: &str, property: &str) -> Option<&PropertyValue> {
        self.rules.get(selector)?.get(property)
    }

    /// Iterates over `(selector, properties)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyMap)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of distinct selectors.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no rule was produced.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
