//! Dynamic values held by form model attributes.

use std::collections::BTreeMap;

use crate::error::ValueDomain;

/// The current value of a form model attribute.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<FieldValue>),
    Object(BTreeMap<String, FieldValue>),
}

impl FieldValue {
    /// Returns whether the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns whether the value is a list or an object.
    pub fn is_iterable(&self) -> bool {
        matches!(self, Self::List(_) | Self::Object(_))
    }

    /// Returns whether the value is numeric, counting numeric strings.
    pub fn is_numeric(&self) -> bool {
        match self {
            Self::Int(_) | Self::Float(_) => true,
            Self::Str(s) => s.trim().parse::<f64>().is_ok(),
            _ => false,
        }
    }

    /// Returns whether the value belongs to `domain`.
    pub fn matches(&self, domain: ValueDomain) -> bool {
        match domain {
            ValueDomain::StringOrNull => matches!(self, Self::Null | Self::Str(_)),
            ValueDomain::NumericOrNull => self.is_null() || self.is_numeric(),
            ValueDomain::ScalarOrNull | ValueDomain::NotIterable => !self.is_iterable(),
            ValueDomain::IterableOrNull => {
                matches!(self, Self::Null | Self::List(_) | Self::Object(_))
            }
        }
    }

    /// Converts a scalar to its attribute string form.
    ///
    /// Booleans become `"1"`/`"0"`; null, lists and objects have no
    /// string form.
    pub fn as_attr_string(&self) -> Option<String> {
        match self {
            Self::Null | Self::List(_) | Self::Object(_) => None,
            Self::Bool(b) => Some(if *b { "1" } else { "0" }.to_string()),
            Self::Int(i) => Some(i.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Str(s) => Some(s.clone()),
        }
    }

    /// Returns whether `candidate` is this value, or one of its elements
    /// when the value is a list or an object.
    pub fn contains(&self, candidate: &str) -> bool {
        match self {
            Self::List(items) => items
                .iter()
                .any(|item| item.as_attr_string().as_deref() == Some(candidate)),
            Self::Object(map) => map
                .values()
                .any(|item| item.as_attr_string().as_deref() == Some(candidate)),
            other => other.as_attr_string().as_deref() == Some(candidate),
        }
    }

    /// Returns whether the value counts as empty for validation.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Str(s) => s.trim().is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Object(map) => map.is_empty(),
            Self::Bool(_) | Self::Int(_) | Self::Float(_) => false,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Null),
            Value::String(s) => Self::Str(s),
            Value::Array(items) => Self::List(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_string() {
        assert_eq!(
            FieldValue::from(true).as_attr_string().as_deref(),
            Some("1")
        );
        assert_eq!(FieldValue::from(15).as_attr_string().as_deref(), Some("15"));
        assert_eq!(
            FieldValue::from(1.5).as_attr_string().as_deref(),
            Some("1.5")
        );
        assert_eq!(FieldValue::Null.as_attr_string(), None);
        assert_eq!(FieldValue::from(vec![1, 2]).as_attr_string(), None);
    }

    #[test]
    fn test_domains() {
        assert!(FieldValue::from("12.5").matches(ValueDomain::NumericOrNull));
        assert!(!FieldValue::from("abc").matches(ValueDomain::NumericOrNull));
        assert!(!FieldValue::from(1).matches(ValueDomain::StringOrNull));
        assert!(FieldValue::Null.matches(ValueDomain::StringOrNull));
        let list = FieldValue::from(vec!["a"]);
        assert!(!list.matches(ValueDomain::NotIterable));
        assert!(list.matches(ValueDomain::IterableOrNull));
        assert!(!FieldValue::from("a").matches(ValueDomain::IterableOrNull));
    }

    #[test]
    fn test_contains() {
        let list = FieldValue::from(vec![1, 3]);
        assert!(list.contains("1"));
        assert!(!list.contains("2"));
        assert!(FieldValue::from(15).contains("15"));
        assert!(!FieldValue::Null.contains(""));
    }

    #[test]
    fn test_from_json() {
        let value = FieldValue::from(serde_json::json!({"a": [1, "x"], "b": null}));
        let FieldValue::Object(map) = value else {
            panic!("expected object");
        };
        let expected = FieldValue::List(vec![FieldValue::Int(1), FieldValue::from("x")]);
        assert_eq!(map.get("a"), Some(&expected));
        assert_eq!(map.get("b"), Some(&FieldValue::Null));
    }
}
