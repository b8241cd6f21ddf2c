//! Form models: the data source a field is bound to.
//!
//! A field bound to a model derives its `name`, `id` and `value`
//! attributes, its label, hint, placeholder and validation errors from
//! the model. [`FormData`] is a ready-made map-backed implementation.

mod data;

pub use data::FormData;

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, WidgetError};
use crate::value::FieldValue;

static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^((?:\[\w*\])*)(\w+)((?:\[\w*\])*)$").expect("valid attribute regex")
});

static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("valid id regex"));

/// A form model exposing attribute data to widgets.
pub trait FormModel {
    /// Short model name used as the `name` attribute prefix.
    fn form_name(&self) -> &str;

    /// Current value of an attribute, `None` when the attribute does
    /// not exist.
    fn value(&self, attribute: &str) -> Option<FieldValue>;

    /// Display label of an attribute.
    fn label(&self, attribute: &str) -> String {
        humanize(attribute)
    }

    /// Hint text of an attribute.
    fn hint(&self, _attribute: &str) -> Option<String> {
        None
    }

    /// Placeholder text of an attribute.
    fn placeholder(&self, _attribute: &str) -> Option<String> {
        None
    }

    /// Whether a value is required for the attribute.
    fn is_required(&self, _attribute: &str) -> bool {
        false
    }

    /// Validation errors, `None` until the model has been validated.
    fn errors(&self) -> Option<&FormErrors>;
}

/// Validation errors by attribute, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    errors: Vec<(String, Vec<String>)>,
}

impl FormErrors {
    /// Creates a new empty FormErrors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error for an attribute.
    pub fn add(&mut self, attribute: &str, message: impl Into<String>) {
        let message = message.into();
        match self.errors.iter_mut().find(|(a, _)| a == attribute) {
            Some((_, messages)) => messages.push(message),
            None => self.errors.push((attribute.to_string(), vec![message])),
        }
    }

    /// Builder method to add an error.
    #[must_use]
    pub fn with(mut self, attribute: &str, message: impl Into<String>) -> Self {
        self.add(attribute, message);
        self
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of attributes with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns errors for a specific attribute.
    pub fn get(&self, attribute: &str) -> Option<&[String]> {
        self.errors
            .iter()
            .find(|(a, _)| a == attribute)
            .map(|(_, messages)| messages.as_slice())
    }

    /// Returns the first error of an attribute.
    pub fn first(&self, attribute: &str) -> Option<&str> {
        self.get(attribute)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// Iterates over attributes and their messages.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(a, messages)| (a.as_str(), messages.as_slice()))
    }

    /// Returns all errors as a flat list.
    pub fn all_errors(&self) -> Vec<(&str, &str)> {
        self.iter()
            .flat_map(|(attribute, messages)| {
                messages.iter().map(move |msg| (attribute, msg.as_str()))
            })
            .collect()
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (attribute, messages) in &self.errors {
            for message in messages {
                writeln!(f, "{attribute}: {message}")?;
            }
        }
        Ok(())
    }
}

/// A parsed attribute expression such as `[0]tags[]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributePath {
    /// Tabular prefix, e.g. `[0]`.
    pub prefix: String,
    /// Attribute name.
    pub name: String,
    /// Suffix, e.g. `[]`.
    pub suffix: String,
}

impl AttributePath {
    /// Parses an attribute expression.
    pub fn parse(expression: &str) -> Result<Self> {
        let caps = ATTRIBUTE_RE
            .captures(expression)
            .ok_or_else(|| WidgetError::InvalidAttributeExpression(expression.to_string()))?;
        Ok(Self {
            prefix: caps[1].to_string(),
            name: caps[2].to_string(),
            suffix: caps[3].to_string(),
        })
    }
}

/// Association of a field with a model attribute.
#[derive(Clone)]
pub struct ModelBinding<'a> {
    model: &'a dyn FormModel,
    expression: String,
}

impl fmt::Debug for ModelBinding<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelBinding")
            .field("form", &self.model.form_name())
            .field("expression", &self.expression)
            .finish()
    }
}

impl<'a> ModelBinding<'a> {
    /// Binds a model attribute expression.
    pub fn new(model: &'a dyn FormModel, expression: impl Into<String>) -> Self {
        Self {
            model,
            expression: expression.into(),
        }
    }

    /// The bound model.
    pub fn model(&self) -> &'a dyn FormModel {
        self.model
    }

    /// The attribute name without tabular prefix or suffix.
    pub fn attribute(&self) -> Result<String> {
        AttributePath::parse(&self.expression).map(|path| path.name)
    }

    /// Derives the `name` attribute, e.g. `TypeForm[string]`.
    pub fn input_name(&self) -> Result<String> {
        input_name(self.model.form_name(), &self.expression)
    }

    /// Derives the `id` attribute, e.g. `typeform-string`.
    pub fn input_id(&self) -> Result<String> {
        self.input_name().map(|name| input_id(&name))
    }

    /// The current attribute value.
    pub fn value(&self) -> Result<FieldValue> {
        let attribute = self.attribute()?;
        self.model
            .value(&attribute)
            .ok_or_else(|| WidgetError::UnknownAttribute {
                form: self.model.form_name().to_string(),
                attribute,
            })
    }

    /// Errors of the bound attribute, `None` when the model has not been
    /// validated.
    pub fn errors(&self) -> Result<Option<Vec<String>>> {
        let attribute = self.attribute()?;
        Ok(self.model.errors().map(|errors| {
            errors
                .get(&attribute)
                .map(<[String]>::to_vec)
                .unwrap_or_default()
        }))
    }
}

/// Builds the `name` attribute for an attribute expression.
pub fn input_name(form_name: &str, expression: &str) -> Result<String> {
    let path = AttributePath::parse(expression)?;
    if form_name.is_empty() {
        if path.prefix.is_empty() {
            return Ok(format!("{}{}", path.name, path.suffix));
        }
        return Err(WidgetError::InvalidAttributeExpression(format!(
            "{expression}: tabular inputs require a form name"
        )));
    }
    Ok(format!(
        "{form_name}{}[{}]{}",
        path.prefix, path.name, path.suffix
    ))
}

/// Builds an `id` from an input name: lower-cased, with every run of
/// non-alphanumeric characters replaced by `-`.
pub fn input_id(name: &str) -> String {
    let lower = name.to_lowercase();
    ID_RE
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}

/// Generates a label from an attribute name: `first_name` and
/// `firstName` both become `First Name`.
pub fn humanize(attribute: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in attribute.chars() {
        if c == '_' || c == '-' || c == '.' || c.is_whitespace() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }

    words
        .iter()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
