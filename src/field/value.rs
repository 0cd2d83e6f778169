//! Field values.

use serde::Serialize;
use std::fmt;

/// Content of a single form field.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Flag(bool),
    List(Vec<String>),
}

impl FieldValue {
    /// Return the value as a whole number. Text parses after trimming.
    ///
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(number) => Some(*number),
            FieldValue::Text(text) => text.trim().parse().ok(),
            _ => None,
        }
    }

    /// True for empty text or an empty list. Numbers and flags are never blank.
    ///
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Integer(_) | FieldValue::Flag(_) => false,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{}", text),
            FieldValue::Integer(number) => write!(f, "{}", number),
            FieldValue::Flag(flag) => write!(f, "{}", flag),
            FieldValue::List(items) => write!(f, "{}", items.join(", ")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<i64> for FieldValue {
    fn from(number: i64) -> Self {
        FieldValue::Integer(number)
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        FieldValue::Flag(flag)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_integer() {
        assert_eq!(FieldValue::from(" 42 ").as_integer(), Some(42));
        assert_eq!(FieldValue::from("-3").as_integer(), Some(-3));
        assert_eq!(FieldValue::Integer(17).as_integer(), Some(17));
        assert_eq!(FieldValue::from("4.5").as_integer(), None);
        assert_eq!(FieldValue::from("").as_integer(), None);
        assert_eq!(FieldValue::Flag(true).as_integer(), None);
    }

    #[test]
    fn test_is_blank() {
        assert!(FieldValue::from("").is_blank());
        assert!(FieldValue::from("   ").is_blank());
        assert!(FieldValue::List(vec![]).is_blank());
        assert!(!FieldValue::from("a").is_blank());
        assert!(!FieldValue::Integer(0).is_blank());
        assert!(!FieldValue::Flag(false).is_blank());
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::from("Ada").to_string(), "Ada");
        assert_eq!(FieldValue::Integer(36).to_string(), "36");
        assert_eq!(
            FieldValue::List(vec!["a".to_string(), "b".to_string()]).to_string(),
            "a, b"
        );
    }

    #[test]
    fn test_serialize_untagged() {
        let json = serde_json::to_string(&FieldValue::Integer(7)).unwrap();
        assert_eq!(json, "7");
        let json = serde_json::to_string(&FieldValue::from("x")).unwrap();
        assert_eq!(json, "\"x\"");
    }
}
