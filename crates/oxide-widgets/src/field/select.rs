//! `<select>` field with options, option groups and a prompt.

use super::FieldContext;
use crate::error::{Result, ValueDomain};
use crate::html::{Attributes, Tag};
use crate::value::FieldValue;

/// An entry of a select: a single option or a group of options.
#[derive(Debug, Clone)]
pub enum SelectItem {
    Option {
        value: String,
        label: String,
        attributes: Attributes,
    },
    Group {
        label: String,
        options: Vec<(String, String)>,
        attributes: Attributes,
    },
}

/// Options of a select field.
#[derive(Debug, Clone, Default)]
pub struct SelectOptions {
    items: Vec<SelectItem>,
    prompt: Option<(String, String)>,
    multiple: bool,
    size: Option<u32>,
    unselect_value: Option<String>,
}

impl SelectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends options from `(value, label)` pairs.
    #[must_use]
    pub fn options_data<V, L>(mut self, data: impl IntoIterator<Item = (V, L)>) -> Self
    where
        V: ToString,
        L: Into<String>,
    {
        for (value, label) in data {
            self = self.option(value, label, Attributes::new());
        }
        self
    }

    /// Appends a single option.
    #[must_use]
    pub fn option(
        mut self,
        value: impl ToString,
        label: impl Into<String>,
        attributes: Attributes,
    ) -> Self {
        self.items.push(SelectItem::Option {
            value: value.to_string(),
            label: label.into(),
            attributes,
        });
        self
    }

    /// Appends an option group.
    #[must_use]
    pub fn group<V, L>(
        mut self,
        label: impl Into<String>,
        options: impl IntoIterator<Item = (V, L)>,
    ) -> Self
    where
        V: ToString,
        L: Into<String>,
    {
        self.items.push(SelectItem::Group {
            label: label.into(),
            options: options
                .into_iter()
                .map(|(value, label)| (value.to_string(), label.into()))
                .collect(),
            attributes: Attributes::new(),
        });
        self
    }

    /// Adds a first option with an empty value.
    #[must_use]
    pub fn prompt(self, text: impl Into<String>) -> Self {
        self.prompt_with_value("", text)
    }

    /// Adds a first option with the given value.
    #[must_use]
    pub fn prompt_with_value(mut self, value: impl Into<String>, text: impl Into<String>) -> Self {
        self.prompt = Some((value.into(), text.into()));
        self
    }

    /// Allows several selected options; the name gets a `[]` suffix.
    #[must_use]
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    #[must_use]
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Value submitted through a hidden input when nothing is selected.
    #[must_use]
    pub fn unselect_value(mut self, value: impl Into<String>) -> Self {
        self.unselect_value = Some(value.into());
        self
    }

    pub(crate) fn value_domain(&self) -> ValueDomain {
        if self.multiple {
            ValueDomain::IterableOrNull
        } else {
            ValueDomain::NotIterable
        }
    }

    pub(crate) fn render(&self, ctx: &FieldContext) -> Result<String> {
        let mut computed = Attributes::new();
        if self.multiple {
            computed.set("multiple", true);
            if let Some(name) = ctx.name.as_deref().filter(|n| !n.ends_with("[]")) {
                computed.set("name", format!("{name}[]"));
            }
        }
        if let Some(size) = self.size {
            computed.set("size", size.to_string());
        }

        let mut lines = Vec::new();
        if let Some((value, text)) = &self.prompt {
            lines.push(render_option(value, text, &Attributes::new(), &FieldValue::Null)?);
        }
        for item in &self.items {
            match item {
                SelectItem::Option {
                    value,
                    label,
                    attributes,
                } => lines.push(render_option(value, label, attributes, &ctx.value)?),
                SelectItem::Group {
                    label,
                    options,
                    attributes,
                } => {
                    let group = Tag::new("optgroup")?
                        .attr("label", label.as_str())
                        .attributes(attributes);
                    lines.push(group.open());
                    for (value, label) in options {
                        lines.push(render_option(value, label, &Attributes::new(), &ctx.value)?);
                    }
                    lines.push(group.close());
                }
            }
        }

        let content = if lines.is_empty() {
            String::new()
        } else {
            format!("\n{}\n", lines.join("\n"))
        };
        let tag = ctx.input_tag("select", None, &computed)?;
        let select = tag.raw(&content).render();
        match &self.unselect_value {
            Some(unselect) => Ok(format!("{}\n{select}", ctx.hidden_companion(unselect)?)),
            None => Ok(select),
        }
    }
}

fn render_option(
    value: &str,
    label: &str,
    attributes: &Attributes,
    selected: &FieldValue,
) -> Result<String> {
    Ok(Tag::new("option")?
        .attr("value", value)
        .attr("selected", selected.contains(value))
        .attributes(attributes)
        .text(label)
        .render())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_option() {
        let html =
            render_option("15", "Fifteen", &Attributes::new(), &FieldValue::from(15)).unwrap();
        assert_eq!(html, r#"<option value="15" selected>Fifteen</option>"#);
        let html = render_option("2", "Two", &Attributes::new(), &FieldValue::from(15)).unwrap();
        assert_eq!(html, r#"<option value="2">Two</option>"#);
    }

    #[test]
    fn test_value_domain() {
        assert_eq!(
            SelectOptions::new().value_domain(),
            ValueDomain::NotIterable
        );
        assert_eq!(
            SelectOptions::new().multiple(true).value_domain(),
            ValueDomain::IterableOrNull
        );
    }
}
