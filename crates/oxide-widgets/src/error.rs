//! Error types for widget rendering.

use std::fmt;

use thiserror::Error;

/// The set of values a widget accepts for its bound attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueDomain {
    /// A string or null.
    StringOrNull,
    /// An integer, a float, a numeric string or null.
    NumericOrNull,
    /// Any scalar or null.
    ScalarOrNull,
    /// Anything except a list or an object.
    NotIterable,
    /// A list or null.
    IterableOrNull,
}

impl fmt::Display for ValueDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::StringOrNull => "must be a string or null value",
            Self::NumericOrNull => "must be a numeric or null value",
            Self::ScalarOrNull => "must be a scalar or null value",
            Self::NotIterable => "value can not be an iterable or an object",
            Self::IterableOrNull => "must be an iterable or null value",
        };
        f.write_str(text)
    }
}

/// Widget rendering errors.
///
/// Every variant is raised before any HTML is produced, so a failed
/// render never yields partial output.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// The bound value is outside the widget's accepted domain.
    #[error("{widget} widget {domain}.")]
    ValueTypeMismatch {
        widget: &'static str,
        domain: ValueDomain,
    },

    /// A configured tag name is empty.
    #[error("tag name cannot be empty")]
    EmptyTagName,

    /// The `dirname` option was set to an empty string.
    #[error("dirname cannot be empty")]
    EmptyDirname,

    /// The textarea `wrap` option is not `hard` or `soft`.
    #[error("invalid wrap value \"{0}\": expected \"hard\" or \"soft\"")]
    InvalidWrap(String),

    /// The `type` attribute conflicts with the widget's input type.
    #[error("{widget} widget renders type \"{expected}\", got \"{actual}\"")]
    InputTypeMismatch {
        widget: &'static str,
        expected: &'static str,
        actual: String,
    },

    /// The attribute expression could not be parsed.
    #[error("invalid attribute expression: {0}")]
    InvalidAttributeExpression(String),

    /// The bound form has no such attribute.
    #[error("attribute \"{attribute}\" is not defined on form \"{form}\"")]
    UnknownAttribute { form: String, attribute: String },

    /// The requested theme is not registered.
    #[error("theme not found: {0}")]
    ThemeNotFound(String),

    /// Theme or form data could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
}

impl WidgetError {
    /// Returns whether the error comes from structurally invalid
    /// configuration rather than from the bound value.
    pub fn is_configuration_error(&self) -> bool {
        !matches!(self, Self::ValueTypeMismatch { .. })
    }
}

/// Result type alias for widget operations.
pub type Result<T> = std::result::Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_mismatch_message() {
        let err = WidgetError::ValueTypeMismatch {
            widget: "Checkbox",
            domain: ValueDomain::NotIterable,
        };
        assert_eq!(
            err.to_string(),
            "Checkbox widget value can not be an iterable or an object."
        );
        assert!(!err.is_configuration_error());
    }

    #[test]
    fn test_configuration_errors() {
        assert!(WidgetError::EmptyTagName.is_configuration_error());
        let wrap = WidgetError::InvalidWrap("nowrap".to_string());
        assert!(wrap.is_configuration_error());
        assert_eq!(
            WidgetError::ThemeNotFound("dark".to_string()).to_string(),
            "theme not found: dark"
        );
    }
}
