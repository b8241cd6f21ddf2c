//! Map-backed form model.

use std::collections::HashMap;

use tracing::debug;

use super::{FormErrors, FormModel};
use crate::error::{Result, WidgetError};
use crate::validation::Validator;
use crate::value::FieldValue;

/// A form model holding its attributes in insertion order.
#[derive(Default)]
pub struct FormData {
    form_name: String,
    values: Vec<(String, FieldValue)>,
    labels: HashMap<String, String>,
    hints: HashMap<String, String>,
    placeholders: HashMap<String, String>,
    rules: Vec<(String, Box<dyn Validator>)>,
    errors: Option<FormErrors>,
}

impl std::fmt::Debug for FormData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormData")
            .field("form_name", &self.form_name)
            .field("values", &self.values)
            .field("labels", &self.labels)
            .field("hints", &self.hints)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl FormData {
    /// Creates an empty form model.
    pub fn new(form_name: impl Into<String>) -> Self {
        Self {
            form_name: form_name.into(),
            ..Default::default()
        }
    }

    /// Creates a form model from a JSON object of attribute values.
    pub fn from_json(form_name: impl Into<String>, json: &str) -> Result<Self> {
        let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut form = Self::new(form_name);
        for (attribute, value) in map {
            form.set_value(&attribute, FieldValue::from(value));
        }
        Ok(form)
    }

    /// Adds an attribute with its initial value.
    #[must_use]
    pub fn attribute(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.set_value(name, value);
        self
    }

    /// Sets the label of an attribute.
    #[must_use]
    pub fn with_label(mut self, attribute: &str, label: impl Into<String>) -> Self {
        self.labels.insert(attribute.to_string(), label.into());
        self
    }

    /// Sets the hint of an attribute.
    #[must_use]
    pub fn with_hint(mut self, attribute: &str, hint: impl Into<String>) -> Self {
        self.hints.insert(attribute.to_string(), hint.into());
        self
    }

    /// Sets the placeholder of an attribute.
    #[must_use]
    pub fn with_placeholder(mut self, attribute: &str, placeholder: impl Into<String>) -> Self {
        self.placeholders
            .insert(attribute.to_string(), placeholder.into());
        self
    }

    /// Adds a validation rule for an attribute.
    #[must_use]
    pub fn rule(mut self, attribute: &str, validator: impl Validator + 'static) -> Self {
        let validator: Box<dyn Validator> = Box::new(validator);
        self.rules.push((attribute.to_string(), validator));
        self
    }

    /// Marks the model as validated with the given errors.
    #[must_use]
    pub fn with_errors(mut self, errors: FormErrors) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Sets an attribute value, adding the attribute if needed.
    pub fn set_value(&mut self, name: &str, value: impl Into<FieldValue>) {
        let value = value.into();
        match self.values.iter_mut().find(|(n, _)| n == name) {
            Some(entry) => entry.1 = value,
            None => self.values.push((name.to_string(), value)),
        }
    }

    /// Records an error and marks the model as validated.
    pub fn add_error(&mut self, attribute: &str, message: impl Into<String>) -> Result<()> {
        if !self.has_attribute(attribute) {
            return Err(WidgetError::UnknownAttribute {
                form: self.form_name.clone(),
                attribute: attribute.to_string(),
            });
        }
        self.errors
            .get_or_insert_with(FormErrors::new)
            .add(attribute, message);
        Ok(())
    }

    /// Returns whether the attribute exists.
    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.values.iter().any(|(n, _)| n == attribute)
    }

    /// Runs every rule against the current values, replacing previous
    /// errors. Returns whether the model is valid.
    pub fn validate(&mut self) -> bool {
        let mut errors = FormErrors::new();
        let null = FieldValue::Null;
        for (attribute, validator) in &self.rules {
            let value = self
                .values
                .iter()
                .find(|(n, _)| n == attribute)
                .map(|(_, v)| v)
                .unwrap_or(&null);
            if let Err(message) = validator.validate(value) {
                errors.add(attribute, message);
            }
        }
        debug!(
            form = %self.form_name,
            invalid_attributes = errors.len(),
            "Validated form"
        );
        let valid = errors.is_empty();
        self.errors = Some(errors);
        valid
    }
}

impl FormModel for FormData {
    fn form_name(&self) -> &str {
        &self.form_name
    }

    fn value(&self, attribute: &str) -> Option<FieldValue> {
        self.values
            .iter()
            .find(|(n, _)| n == attribute)
            .map(|(_, v)| v.clone())
    }

    fn label(&self, attribute: &str) -> String {
        self.labels
            .get(attribute)
            .cloned()
            .unwrap_or_else(|| super::humanize(attribute))
    }

    fn hint(&self, attribute: &str) -> Option<String> {
        self.hints.get(attribute).cloned()
    }

    fn placeholder(&self, attribute: &str) -> Option<String> {
        self.placeholders.get(attribute).cloned()
    }

    fn is_required(&self, attribute: &str) -> bool {
        self.rules
            .iter()
            .any(|(a, validator)| a == attribute && validator.marks_required())
    }

    fn errors(&self) -> Option<&FormErrors> {
        self.errors.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{EmailValidator, RequiredValidator};

    #[test]
    fn test_form_data_values() {
        let form = FormData::new("LoginForm")
            .attribute("login", "admin")
            .with_label("login", "Your login");
        assert_eq!(form.value("login"), Some(FieldValue::from("admin")));
        assert_eq!(form.value("missing"), None);
        assert_eq!(form.label("login"), "Your login");
        assert_eq!(form.label("password_hash"), "Password Hash");
        assert!(form.errors().is_none());
    }

    #[test]
    fn test_validate() {
        let mut form = FormData::new("LoginForm")
            .attribute("login", "")
            .attribute("email", "nope")
            .rule("login", RequiredValidator::new())
            .rule("email", EmailValidator::new());

        assert!(form.is_required("login"));
        assert!(!form.is_required("email"));
        assert!(!form.validate());

        let errors = form.errors().unwrap();
        assert_eq!(errors.first("login"), Some("Value cannot be blank."));
        assert_eq!(
            errors.first("email"),
            Some("This value is not a valid email address.")
        );

        form.set_value("login", "admin");
        form.set_value("email", "admin@example.com");
        assert!(form.validate());
        assert!(form.errors().unwrap().is_empty());
    }

    #[test]
    fn test_add_error_unknown_attribute() {
        let mut form = FormData::new("LoginForm").attribute("login", "");
        assert!(form.add_error("login", "Taken.").is_ok());
        assert!(form.add_error("nope", "Taken.").is_err());
        assert_eq!(form.errors().unwrap().first("login"), Some("Taken."));
    }

    #[test]
    fn test_from_json() {
        let form = FormData::from_json("TypeForm", r#"{"count": 15, "tags": ["a", "b"]}"#).unwrap();
        assert_eq!(form.value("count"), Some(FieldValue::Int(15)));
        assert!(form.value("tags").unwrap().contains("b"));
        assert!(FormData::from_json("TypeForm", "[1]").is_err());
    }
}
