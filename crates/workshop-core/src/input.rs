//! Raw input fields and the shared parsing helpers.
//!
//! The presentation layer hands over untouched strings; everything that
//! interprets them lives here.

use std::fmt;

use crate::strategy::WorkshopError;

/// An input field a strategy's form can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Free text: a message, a number, or a comma-separated list.
    Text,
    /// Optional `p, q` RSA key pair.
    Keys,
    /// Sort order flag.
    Order,
    /// Sorting method (bubble or selection).
    Method,
}

impl Field {
    /// Short field name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Keys => "keys",
            Self::Order => "order",
            Self::Method => "method",
        }
    }
}

/// Untouched strings from the caller, one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    text: String,
    keys: String,
    order: String,
    method: String,
}

impl RawInput {
    /// Input with only the text field filled.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_keys(mut self, keys: impl Into<String>) -> Self {
        self.keys = keys.into();
        self
    }

    #[must_use]
    pub fn with_order(mut self, order: impl Into<String>) -> Self {
        self.order = order.into();
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Set a field by name.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Text => self.text = value,
            Field::Keys => self.keys = value,
            Field::Order => self.order = value,
            Field::Method => self.method = value,
        }
    }

    /// Read a field; unset fields are empty.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Text => &self.text,
            Field::Keys => &self.keys,
            Field::Order => &self.order,
            Field::Method => &self.method,
        }
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Parse an order flag. Blank means ascending; otherwise the first
    /// character decides (`A`/`a` or `D`/`d`).
    pub fn parse(raw: &str) -> Result<Self, WorkshopError> {
        match raw.trim().chars().next() {
            None | Some('A' | 'a') => Ok(Self::Ascending),
            Some('D' | 'd') => Ok(Self::Descending),
            Some(_) => Err(WorkshopError::validation(format!(
                "Unknown sort order '{}': use Ascending or Descending",
                raw.trim()
            ))),
        }
    }

    /// Whether `a` may precede `b` (ties allowed).
    #[inline]
    #[must_use]
    pub fn in_order<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            Self::Ascending => a <= b,
            Self::Descending => a >= b,
        }
    }

    /// Whether `a` strictly belongs before `b`.
    #[inline]
    #[must_use]
    pub fn precedes<T: Ord>(self, a: &T, b: &T) -> bool {
        match self {
            Self::Ascending => a < b,
            Self::Descending => a > b,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => f.write_str("Ascending"),
            Self::Descending => f.write_str("Descending"),
        }
    }
}

/// Quadratic sorting method offered by the sorting session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMethod {
    #[default]
    Bubble,
    Selection,
}

impl SortMethod {
    /// Parse a method name. Blank means bubble.
    pub fn parse(raw: &str) -> Result<Self, WorkshopError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "b" | "bubble" => Ok(Self::Bubble),
            "s" | "selection" => Ok(Self::Selection),
            other => Err(WorkshopError::validation(format!(
                "Unknown sorting method '{other}': use bubble or selection"
            ))),
        }
    }
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bubble => f.write_str("Bubble"),
            Self::Selection => f.write_str("Selection"),
        }
    }
}

/// Parse a single integer, ignoring surrounding whitespace.
pub fn parse_integer(raw: &str) -> Result<i64, WorkshopError> {
    raw.trim()
        .parse()
        .map_err(|_| WorkshopError::validation("Invalid input"))
}

/// Parse a comma-separated list of integers. Empty tokens are dropped.
pub fn parse_int_list(raw: &str) -> Result<Vec<i64>, WorkshopError> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse().map_err(|_| {
                WorkshopError::validation(format!("Invalid input: '{token}' is not an integer"))
            })
        })
        .collect()
}

/// Parse an optional `p, q` key pair. Blank input means "no keys".
///
/// At least two integer tokens are required; tokens after the second are
/// ignored, but every token must be an integer.
pub fn parse_key_pair(raw: &str) -> Result<Option<(i64, i64)>, WorkshopError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    let format_error = || WorkshopError::validation("Format must be: prime, prime");
    let keys = raw
        .split(',')
        .map(|token| token.trim().parse::<i64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| format_error())?;
    match keys.as_slice() {
        [p, q, ..] => Ok(Some((*p, *q))),
        _ => Err(format_error()),
    }
}

/// Render integers the way the result labels show lists: `[1, 2, 3]`.
#[must_use]
pub fn format_list<T: fmt::Display>(values: &[T]) -> String {
    let joined = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_input_builder() {
        let raw = RawInput::new("hi")
            .with_keys("61, 53")
            .with_order("D")
            .with_method("s");
        assert_eq!(raw.get(Field::Text), "hi");
        assert_eq!(raw.get(Field::Keys), "61, 53");
        assert_eq!(raw.get(Field::Order), "D");
        assert_eq!(raw.get(Field::Method), "s");
    }

    #[test]
    fn raw_input_set() {
        let mut raw = RawInput::default();
        raw.set(Field::Keys, "7,11");
        assert_eq!(raw.get(Field::Keys), "7,11");
        assert_eq!(raw.get(Field::Text), "");
    }

    #[test]
    fn sort_order_defaults_to_ascending() {
        assert_eq!(SortOrder::parse("").unwrap(), SortOrder::Ascending);
        assert_eq!(SortOrder::parse("   ").unwrap(), SortOrder::Ascending);
    }

    #[test]
    fn sort_order_first_character() {
        assert_eq!(SortOrder::parse("Ascending").unwrap(), SortOrder::Ascending);
        assert_eq!(SortOrder::parse("Descending").unwrap(), SortOrder::Descending);
        assert_eq!(SortOrder::parse("desc").unwrap(), SortOrder::Descending);
        assert!(SortOrder::parse("sideways").is_err());
    }

    #[test]
    fn sort_order_comparisons() {
        assert!(SortOrder::Ascending.in_order(&1, &1));
        assert!(!SortOrder::Ascending.precedes(&1, &1));
        assert!(SortOrder::Descending.precedes(&2, &1));
        assert!(!SortOrder::Descending.in_order(&1, &2));
    }

    #[test]
    fn sort_method_parse() {
        assert_eq!(SortMethod::parse("").unwrap(), SortMethod::Bubble);
        assert_eq!(SortMethod::parse("Selection").unwrap(), SortMethod::Selection);
        assert_eq!(SortMethod::parse("b").unwrap(), SortMethod::Bubble);
        assert!(SortMethod::parse("quick").is_err());
    }

    #[test]
    fn int_list_drops_empty_tokens() {
        assert_eq!(parse_int_list(" 3, ,1,  2 ,").unwrap(), vec![3, 1, 2]);
        assert!(parse_int_list("").unwrap().is_empty());
        assert!(parse_int_list(" , ").unwrap().is_empty());
    }

    #[test]
    fn int_list_rejects_garbage() {
        let err = parse_int_list("1, two, 3").unwrap_err();
        assert!(matches!(err, WorkshopError::Validation(_)));
        assert!(err.to_string().contains("two"));
    }

    #[test]
    fn int_list_accepts_negatives() {
        assert_eq!(parse_int_list("-5,0,5").unwrap(), vec![-5, 0, 5]);
    }

    #[test]
    fn integer_parse() {
        assert_eq!(parse_integer(" 42 ").unwrap(), 42);
        assert_eq!(parse_integer("-1").unwrap(), -1);
        assert!(parse_integer("4.5").is_err());
        assert!(parse_integer("").is_err());
    }

    #[test]
    fn key_pair_blank_means_random() {
        assert_eq!(parse_key_pair("").unwrap(), None);
        assert_eq!(parse_key_pair("  ").unwrap(), None);
    }

    #[test]
    fn key_pair_parses_two_values() {
        assert_eq!(parse_key_pair("61, 53").unwrap(), Some((61, 53)));
        assert_eq!(parse_key_pair("61,53,7").unwrap(), Some((61, 53)));
    }

    #[test]
    fn key_pair_format_errors() {
        for bad in ["61", "61,", "a,b", "61;53"] {
            let err = parse_key_pair(bad).unwrap_err();
            assert_eq!(err.to_string(), "Format must be: prime, prime", "input {bad:?}");
        }
    }

    #[test]
    fn list_formatting() {
        assert_eq!(format_list(&[1, 2, 3]), "[1, 2, 3]");
        assert_eq!(format_list::<i64>(&[]), "[]");
    }

    #[test]
    fn field_names() {
        assert_eq!(Field::Keys.name(), "keys");
    }
}
