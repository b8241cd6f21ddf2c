//! Error summary across one or more form models.

use ironhtml::html;
use ironhtml::typed::Element;
use ironhtml_elements::Li;
use tracing::debug;

use crate::error::Result;
use crate::field::parts::class_and_attributes;
use crate::html::{Attributes, Tag};
use crate::model::FormModel;
use crate::theme::FieldConfig;

/// A list of the validation errors of one or more models.
///
/// Renders nothing until at least one model has been validated. A
/// validated model without errors renders a hidden, empty container so
/// client-side validation can fill it in.
pub struct ErrorSummary<'a> {
    models: Vec<&'a dyn FormModel>,
    only_attributes: Vec<String>,
    encode: bool,
    config: FieldConfig,
}

impl std::fmt::Debug for ErrorSummary<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let forms: Vec<&str> = self.models.iter().map(|m| m.form_name()).collect();
        f.debug_struct("ErrorSummary")
            .field("models", &forms)
            .field("only_attributes", &self.only_attributes)
            .field("encode", &self.encode)
            .field("config", &self.config)
            .finish()
    }
}

impl<'a> ErrorSummary<'a> {
    pub fn new(models: impl IntoIterator<Item = &'a dyn FormModel>) -> Self {
        Self {
            models: models.into_iter().collect(),
            only_attributes: Vec::new(),
            encode: true,
            config: FieldConfig::default(),
        }
    }

    /// Restricts the summary to these attributes.
    #[must_use]
    pub fn only_attributes<S: Into<String>>(
        mut self,
        attributes: impl IntoIterator<Item = S>,
    ) -> Self {
        self.only_attributes = attributes.into_iter().map(Into::into).collect();
        self
    }

    /// Lists every error of an attribute instead of the first one.
    #[must_use]
    pub fn show_all_errors(mut self, show: bool) -> Self {
        self.config.show_all_errors = Some(show);
        self
    }

    /// HTML rendered above the list.
    #[must_use]
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.config.header = Some(header.into());
        self
    }

    /// HTML rendered below the list.
    #[must_use]
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.config.footer = Some(footer.into());
        self
    }

    /// Whether messages are HTML-escaped. Enabled by default.
    #[must_use]
    pub fn encode(mut self, encode: bool) -> Self {
        self.encode = encode;
        self
    }

    #[must_use]
    pub fn container_class(mut self, class: impl Into<String>) -> Self {
        self.config.container_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn container_attributes(mut self, attrs: &Attributes) -> Self {
        self.config
            .container_attributes
            .get_or_insert_with(Attributes::new)
            .merge(attrs);
        self
    }

    #[must_use]
    pub fn list_class(mut self, class: impl Into<String>) -> Self {
        self.config.list_class = Some(class.into());
        self
    }

    pub(crate) fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Unique messages in first-seen order, `None` when no model has
    /// been validated.
    pub fn messages(&self, show_all_errors: bool) -> Option<Vec<String>> {
        let validated: Vec<_> = self.models.iter().filter_map(|m| m.errors()).collect();
        if validated.is_empty() {
            return None;
        }
        let mut messages: Vec<String> = Vec::new();
        for errors in validated {
            for (attribute, attribute_messages) in errors.iter() {
                if !self.only_attributes.is_empty()
                    && !self.only_attributes.iter().any(|a| a == attribute)
                {
                    continue;
                }
                let take = if show_all_errors { attribute_messages.len() } else { 1 };
                for message in attribute_messages.iter().take(take) {
                    if !messages.contains(message) {
                        messages.push(message.clone());
                    }
                }
            }
        }
        Some(messages)
    }

    /// Renders with a resolved configuration.
    pub(crate) fn render(&self, config: &FieldConfig) -> Result<String> {
        let Some(messages) = self.messages(config.show_all_errors == Some(true)) else {
            debug!(
                models = self.models.len(),
                "No validated model, skipping error summary"
            );
            return Ok(String::new());
        };
        debug!(messages = messages.len(), "Rendering error summary");

        let mut attrs = class_and_attributes(
            config.container_class.as_deref(),
            config.container_attributes.as_ref(),
        );
        if messages.is_empty() {
            attrs.set("style", "display:none");
        }
        let tag_name = config.container_tag.as_deref().unwrap_or("div");
        let container = Tag::new(tag_name)?.attributes(&attrs);

        let list_class = config.list_class.as_deref().unwrap_or("");
        let encode = self.encode;
        let list = html! { ul }
            .when(!list_class.is_empty(), |ul| ul.class(list_class))
            .children(messages.iter(), |message, li: Element<Li>| {
                if encode {
                    li.text(message)
                } else {
                    li.raw(message)
                }
            })
            .render();

        let body: Vec<&str> = [
            config.header.as_deref(),
            Some(list.as_str()),
            config.footer.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();
        Ok(format!(
            "{}\n{}\n{}",
            container.open(),
            body.join("\n"),
            container.close()
        ))
    }
}
