//! Checkbox and radio lists.

use std::collections::HashMap;

use super::FieldContext;
use crate::error::Result;
use crate::html::{Attributes, Tag};

/// Items and options of a checkbox or radio list.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    items: Vec<(String, String)>,
    uncheck_value: Option<String>,
    items_attributes: Attributes,
    individual_items_attributes: HashMap<String, Attributes>,
}

impl ListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the items as `(value, label)` pairs, rendered in order.
    #[must_use]
    pub fn items<V, L>(mut self, items: impl IntoIterator<Item = (V, L)>) -> Self
    where
        V: ToString,
        L: Into<String>,
    {
        self.items = items
            .into_iter()
            .map(|(value, label)| (value.to_string(), label.into()))
            .collect();
        self
    }

    /// Sets items whose value doubles as label.
    #[must_use]
    pub fn items_from_values<V: ToString>(mut self, values: impl IntoIterator<Item = V>) -> Self {
        self.items = values
            .into_iter()
            .map(|value| {
                let value = value.to_string();
                (value.clone(), value)
            })
            .collect();
        self
    }

    /// Value submitted through a hidden input when nothing is checked.
    #[must_use]
    pub fn uncheck_value(mut self, value: impl Into<String>) -> Self {
        self.uncheck_value = Some(value.into());
        self
    }

    /// Attributes applied to every item input.
    #[must_use]
    pub fn items_attributes(mut self, attrs: &Attributes) -> Self {
        self.items_attributes.merge(attrs);
        self
    }

    /// Attributes applied to the item with the given value, after the
    /// common item attributes.
    #[must_use]
    pub fn item_attributes(mut self, value: impl ToString, attrs: &Attributes) -> Self {
        self.individual_items_attributes
            .entry(value.to_string())
            .or_default()
            .merge(attrs);
        self
    }

    pub(crate) fn render(&self, ctx: &FieldContext, input_type: &'static str) -> Result<String> {
        ctx.check_input_type(input_type)?;
        let name = ctx.name.as_deref().map(|name| {
            if input_type == "checkbox" && !name.ends_with("[]") {
                format!("{name}[]")
            } else {
                name.to_string()
            }
        });
        let label_class = ctx.config.input_label_class.as_deref().unwrap_or("");
        let enclosed = ctx.config.enclosed_by_label != Some(false);

        let mut rendered = Vec::with_capacity(self.items.len());
        for (value, label) in &self.items {
            let mut attrs = Attributes::new().with("type", input_type);
            if let Some(name) = &name {
                attrs.set("name", name.as_str());
            }
            attrs.set("value", value.as_str());
            attrs.set("checked", ctx.value.contains(value));
            attrs.merge(&ctx.input_attributes);
            attrs.merge(&self.items_attributes);
            if let Some(individual) = self.individual_items_attributes.get(value) {
                attrs.merge(individual);
            }
            let input = Tag::new("input")?.attributes(&attrs).render();

            let item = if enclosed {
                Tag::new("label")?
                    .class(label_class)
                    .raw(&input)
                    .raw(" ")
                    .text(label)
                    .render()
            } else {
                let label = Tag::new("label")?.class(label_class).text(label).render();
                format!("{input}\n{label}")
            };
            rendered.push(ctx.wrap_input_container(&item)?);
        }

        let separator = ctx.config.separator.as_deref().unwrap_or("\n");
        let mut wrapper = Tag::new("div")?;
        if let Some(id) = &ctx.id {
            wrapper = wrapper.attr("id", id.as_str());
        }
        let list = format!(
            "{}\n{}\n{}",
            wrapper.open(),
            rendered.join(separator),
            wrapper.close()
        );

        match &self.uncheck_value {
            Some(uncheck) => Ok(format!("{}\n{list}", ctx.hidden_companion(uncheck)?)),
            None => Ok(list),
        }
    }
}
