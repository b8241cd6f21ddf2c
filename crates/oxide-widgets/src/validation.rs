//! Attribute validators used by [`FormData`](crate::FormData).
//!
//! Empty values pass every validator except [`RequiredValidator`], so
//! optional attributes only need the rules that apply when filled in.

use std::sync::LazyLock;

use regex::Regex;

use crate::value::FieldValue;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

/// Trait for attribute validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &FieldValue) -> Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;

    /// Returns whether this rule makes the attribute required.
    fn marks_required(&self) -> bool {
        false
    }
}

fn text_of(value: &FieldValue) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        value.as_attr_string()
    }
}

/// Validator that requires a non-empty value.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
    message: String,
}

impl RequiredValidator {
    /// Creates a new RequiredValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "Value cannot be blank.".to_string(),
        }
    }

    /// Creates a new RequiredValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for RequiredValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, value: &FieldValue) -> Result<(), String> {
        if value.is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn marks_required(&self) -> bool {
        true
    }
}

/// Validator that enforces a maximum length in characters.
#[derive(Debug, Clone)]
pub struct MaxLengthValidator {
    max_length: usize,
    message: String,
}

impl MaxLengthValidator {
    /// Creates a new MaxLengthValidator.
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            message: format!("This value must contain at most {max_length} characters."),
        }
    }

    /// Creates a new MaxLengthValidator with custom message.
    pub fn with_message(max_length: usize, message: impl Into<String>) -> Self {
        Self {
            max_length,
            message: message.into(),
        }
    }
}

impl Validator for MaxLengthValidator {
    fn validate(&self, value: &FieldValue) -> Result<(), String> {
        match text_of(value) {
            Some(text) if text.chars().count() > self.max_length => Err(self.message.clone()),
            _ => Ok(()),
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator that enforces a minimum length in characters.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    min_length: usize,
    message: String,
}

impl MinLengthValidator {
    /// Creates a new MinLengthValidator.
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            message: format!("This value must contain at least {min_length} characters."),
        }
    }

    /// Creates a new MinLengthValidator with custom message.
    pub fn with_message(min_length: usize, message: impl Into<String>) -> Self {
        Self {
            min_length,
            message: message.into(),
        }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &FieldValue) -> Result<(), String> {
        match text_of(value) {
            Some(text) if text.chars().count() < self.min_length => Err(self.message.clone()),
            _ => Ok(()),
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for email addresses.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    message: String,
}

impl EmailValidator {
    /// Creates a new EmailValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "This value is not a valid email address.".to_string(),
        }
    }

    /// Creates a new EmailValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for EmailValidator {
    fn validate(&self, value: &FieldValue) -> Result<(), String> {
        match text_of(value) {
            Some(text) if !EMAIL_RE.is_match(&text) => Err(self.message.clone()),
            _ => Ok(()),
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for URL values.
#[derive(Debug, Clone)]
pub struct UrlValidator {
    message: String,
}

impl UrlValidator {
    /// Creates a new UrlValidator with default message.
    pub fn new() -> Self {
        Self {
            message: "This value is not a valid URL.".to_string(),
        }
    }

    /// Creates a new UrlValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for UrlValidator {
    fn validate(&self, value: &FieldValue) -> Result<(), String> {
        match text_of(value) {
            Some(text) if !(text.starts_with("http://") || text.starts_with("https://")) => {
                Err(self.message.clone())
            }
            _ => Ok(()),
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator using a custom regex pattern.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: Regex,
    message: String,
}

impl RegexValidator {
    /// Creates a new RegexValidator.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }
}

impl Validator for RegexValidator {
    fn validate(&self, value: &FieldValue) -> Result<(), String> {
        match text_of(value) {
            Some(text) if !self.pattern.is_match(&text) => Err(self.message.clone()),
            _ => Ok(()),
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator for numeric range.
#[derive(Debug, Clone)]
pub struct RangeValidator {
    min: Option<f64>,
    max: Option<f64>,
    message: String,
}

impl RangeValidator {
    /// Creates a new RangeValidator with min and max bounds.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        let message = match (min, max) {
            (Some(min), Some(max)) => format!("Value must be between {min} and {max}."),
            (Some(min), None) => format!("Value must be at least {min}."),
            (None, Some(max)) => format!("Value must be at most {max}."),
            (None, None) => "Invalid value.".to_string(),
        };
        Self { min, max, message }
    }

    /// Creates a new RangeValidator with custom message.
    pub fn with_message(min: Option<f64>, max: Option<f64>, message: impl Into<String>) -> Self {
        Self {
            min,
            max,
            message: message.into(),
        }
    }
}

impl Validator for RangeValidator {
    fn validate(&self, value: &FieldValue) -> Result<(), String> {
        let Some(text) = text_of(value) else {
            return Ok(());
        };
        let num: f64 = text
            .trim()
            .parse()
            .map_err(|_| "Value must be a number.".to_string())?;

        if self.min.is_some_and(|min| num < min) || self.max.is_some_and(|max| num > max) {
            return Err(self.message.clone());
        }

        Ok(())
    }

    fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_validator() {
        let v = RequiredValidator::new();
        assert!(v.validate(&"hello".into()).is_ok());
        assert!(v.validate(&"".into()).is_err());
        assert!(v.validate(&"   ".into()).is_err());
        assert!(v.validate(&FieldValue::Null).is_err());
        assert!(v.validate(&FieldValue::List(vec![])).is_err());
        assert!(v.marks_required());
    }

    #[test]
    fn test_length_validators_skip_empty() {
        let max = MaxLengthValidator::new(5);
        assert!(max.validate(&"hello".into()).is_ok());
        assert!(max.validate(&"hello world".into()).is_err());
        assert!(max.validate(&FieldValue::Null).is_ok());

        let min = MinLengthValidator::new(5);
        assert!(min.validate(&"hi".into()).is_err());
        assert!(min.validate(&"".into()).is_ok());
        assert!(!min.marks_required());
    }

    #[test]
    fn test_email_validator() {
        let v = EmailValidator::new();
        assert!(v.validate(&"user@example.com".into()).is_ok());
        assert!(v.validate(&"user.name@domain.co.uk".into()).is_ok());
        assert!(v.validate(&"invalid".into()).is_err());
        assert!(v.validate(&"@example.com".into()).is_err());
    }

    #[test]
    fn test_url_validator() {
        let v = UrlValidator::new();
        assert!(v.validate(&"https://example.com".into()).is_ok());
        assert!(v.validate(&"example.com".into()).is_err());
    }

    #[test]
    fn test_regex_validator() {
        let v = RegexValidator::new(r"^\d{4}-\d{2}-\d{2}$", "Enter a valid date.").unwrap();
        assert!(v.validate(&"2024-01-15".into()).is_ok());
        assert!(v.validate(&"not a date".into()).is_err());
    }

    #[test]
    fn test_range_validator() {
        let v = RangeValidator::new(Some(0.0), Some(100.0));
        assert!(v.validate(&50.into()).is_ok());
        assert!(v.validate(&"100".into()).is_ok());
        assert!(v.validate(&(-1).into()).is_err());
        assert!(v.validate(&101.5.into()).is_err());
        assert!(v.validate(&"abc".into()).is_err());
    }
}
