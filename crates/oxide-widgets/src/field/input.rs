//! `<input>` based fields.

use super::FieldContext;
use crate::error::{Result, ValueDomain, WidgetError};
use crate::html::Attributes;
use crate::theme::FieldType;

/// The `type` of an `<input>` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Password,
    Url,
    Telephone,
    Search,
    Number,
    Range,
    Date,
    Time,
    DatetimeLocal,
    Color,
    Hidden,
    File,
}

impl InputType {
    /// The HTML `type` attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Url => "url",
            Self::Telephone => "tel",
            Self::Search => "search",
            Self::Number => "number",
            Self::Range => "range",
            Self::Date => "date",
            Self::Time => "time",
            Self::DatetimeLocal => "datetime-local",
            Self::Color => "color",
            Self::Hidden => "hidden",
            Self::File => "file",
        }
    }

    pub fn field_type(self) -> FieldType {
        match self {
            Self::Text => FieldType::Text,
            Self::Email => FieldType::Email,
            Self::Password => FieldType::Password,
            Self::Url => FieldType::Url,
            Self::Telephone => FieldType::Telephone,
            Self::Search => FieldType::Search,
            Self::Number => FieldType::Number,
            Self::Range => FieldType::Range,
            Self::Date => FieldType::Date,
            Self::Time => FieldType::Time,
            Self::DatetimeLocal => FieldType::DatetimeLocal,
            Self::Color => FieldType::Color,
            Self::Hidden => FieldType::Hidden,
            Self::File => FieldType::File,
        }
    }

    pub(crate) fn value_domain(self) -> Option<ValueDomain> {
        match self {
            Self::Number | Self::Range => Some(ValueDomain::NumericOrNull),
            Self::Hidden => Some(ValueDomain::ScalarOrNull),
            Self::File => None,
            _ => Some(ValueDomain::StringOrNull),
        }
    }

    pub(crate) fn supports_placeholder(self) -> bool {
        matches!(
            self,
            Self::Text
                | Self::Email
                | Self::Password
                | Self::Url
                | Self::Telephone
                | Self::Search
                | Self::Number
        )
    }

    fn supports_dirname(self) -> bool {
        matches!(self, Self::Text | Self::Search)
    }
}

/// Options of an `<input>` field.
#[derive(Debug, Clone)]
pub struct InputOptions {
    input_type: InputType,
    dirname: Option<String>,
    accept: Option<String>,
    multiple: bool,
    uncheck_value: Option<String>,
}

impl InputOptions {
    pub fn new(input_type: InputType) -> Self {
        Self {
            input_type,
            dirname: None,
            accept: None,
            multiple: false,
            uncheck_value: None,
        }
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    /// Submits the text direction under this name (text and search
    /// inputs).
    #[must_use]
    pub fn dirname(mut self, dirname: impl Into<String>) -> Self {
        self.dirname = Some(dirname.into());
        self
    }

    /// Accepted file types of a file input.
    #[must_use]
    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    /// Allows several files; the name gets a `[]` suffix.
    #[must_use]
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Value submitted by a file input when no file is chosen.
    #[must_use]
    pub fn uncheck_value(mut self, value: impl Into<String>) -> Self {
        self.uncheck_value = Some(value.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.dirname.as_deref().is_some_and(|d| d.trim().is_empty()) {
            return Err(WidgetError::EmptyDirname);
        }
        Ok(())
    }

    pub(crate) fn render(&self, ctx: &FieldContext) -> Result<String> {
        let mut computed = Attributes::new();
        if self.input_type != InputType::File {
            if let Some(value) = ctx.value.as_attr_string() {
                computed.set("value", value);
            }
        }
        if self.input_type.supports_dirname() {
            if let Some(dirname) = &self.dirname {
                computed.set("dirname", dirname.as_str());
            }
        }
        if self.input_type == InputType::File {
            if let Some(accept) = &self.accept {
                computed.set("accept", accept.as_str());
            }
            if self.multiple {
                computed.set("multiple", true);
                if let Some(name) = ctx.name.as_deref().filter(|n| !n.ends_with("[]")) {
                    computed.set("name", format!("{name}[]"));
                }
            }
        }

        let input = ctx
            .input_tag("input", Some(self.input_type.as_str()), &computed)?
            .render();
        match (&self.uncheck_value, self.input_type) {
            (Some(uncheck), InputType::File) => {
                Ok(format!("{}{input}", ctx.hidden_companion(uncheck)?))
            }
            _ => Ok(input),
        }
    }
}
