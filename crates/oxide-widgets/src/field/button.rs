//! `<button>` fields.

use super::FieldContext;
use crate::error::Result;
use crate::html::Attributes;
use crate::theme::FieldType;

/// The `type` of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonType {
    Submit,
    Reset,
    Button,
}

impl ButtonType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::Reset => "reset",
            Self::Button => "button",
        }
    }

    pub fn field_type(self) -> FieldType {
        match self {
            Self::Submit => FieldType::SubmitButton,
            Self::Reset => FieldType::ResetButton,
            Self::Button => FieldType::Button,
        }
    }
}

/// Options of a button field.
#[derive(Debug, Clone)]
pub struct ButtonOptions {
    button_type: ButtonType,
    content: String,
    encode: bool,
}

impl ButtonOptions {
    pub fn new(button_type: ButtonType, content: impl Into<String>) -> Self {
        Self {
            button_type,
            content: content.into(),
            encode: true,
        }
    }

    pub fn button_type(&self) -> ButtonType {
        self.button_type
    }

    /// Whether the content is HTML-escaped. Enabled by default.
    #[must_use]
    pub fn encode(mut self, encode: bool) -> Self {
        self.encode = encode;
        self
    }

    pub(crate) fn render(&self, ctx: &FieldContext) -> Result<String> {
        let tag = ctx.input_tag(
            "button",
            Some(self.button_type.as_str()),
            &Attributes::new(),
        )?;
        let tag = if self.encode {
            tag.text(&self.content)
        } else {
            tag.raw(&self.content)
        };
        Ok(tag.render())
    }
}
