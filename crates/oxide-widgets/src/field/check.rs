//! Single checkbox and radio fields.

use super::FieldContext;
use crate::error::Result;
use crate::html::{Attributes, Tag};

/// Options of a checkbox or radio field.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    input_value: String,
    uncheck_value: Option<String>,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            input_value: "1".to_string(),
            uncheck_value: None,
        }
    }
}

impl CheckOptions {
    /// Input value `"1"`, no uncheck value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value submitted when checked.
    #[must_use]
    pub fn input_value(mut self, value: impl Into<String>) -> Self {
        self.input_value = value.into();
        self
    }

    /// Value submitted through a hidden input when unchecked.
    #[must_use]
    pub fn uncheck_value(mut self, value: impl Into<String>) -> Self {
        self.uncheck_value = Some(value.into());
        self
    }

    pub(crate) fn render(&self, ctx: &FieldContext, input_type: &'static str) -> Result<String> {
        // An explicit `value` attribute replaces the configured input value.
        let input_value = ctx
            .input_attributes
            .get_str("value")
            .unwrap_or(self.input_value.as_str());
        let checked = ctx.value.as_attr_string().as_deref() == Some(input_value);
        let computed = Attributes::new()
            .with("value", input_value)
            .with("checked", checked);
        let tag = ctx.input_tag("input", Some(input_type), &computed)?;
        let input = tag.render();
        let hidden = match &self.uncheck_value {
            Some(uncheck) => ctx.hidden_companion(uncheck)?,
            None => String::new(),
        };

        let label_class = ctx.config.input_label_class.as_deref().unwrap_or("");
        let html = match ctx.visible_label() {
            Some(label) if ctx.config.enclosed_by_label != Some(false) => Tag::new("label")?
                .class(label_class)
                .raw(&hidden)
                .raw(&input)
                .raw(" ")
                .text(label)
                .render(),
            Some(label) => {
                let mut tag = Tag::new("label")?.class(label_class);
                if let Some(id) = &ctx.id {
                    tag = tag.attr("for", id.as_str());
                }
                format!("{hidden}{input}\n{}", tag.text(label).render())
            }
            None => format!("{hidden}{input}"),
        };
        ctx.wrap_input_container(&html)
    }
}
