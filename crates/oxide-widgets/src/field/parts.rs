//! Label, hint and error parts, template composition and the container.

use super::FieldContext;
use crate::error::Result;
use crate::html::{AttrValue, Attributes, Tag};

/// Combines a class option with an attribute map. Classes from both
/// accumulate; other attributes are copied as is.
pub(crate) fn class_and_attributes(
    class: Option<&str>,
    attributes: Option<&Attributes>,
) -> Attributes {
    let mut attrs = Attributes::new();
    if let Some(class) = class {
        attrs.add_class(class);
    }
    if let Some(extra) = attributes {
        for (key, value) in extra.iter() {
            match (key, value) {
                ("class", AttrValue::Str(class)) => attrs.add_class(class),
                _ => attrs.set(key, value.clone()),
            }
        }
    }
    attrs
}

/// Renders the field label. `with_for` links it to the input id.
pub(crate) fn render_label(ctx: &FieldContext, with_for: bool) -> Result<String> {
    let Some(text) = ctx.visible_label() else {
        return Ok(String::new());
    };
    let config = &ctx.config;
    let mut attrs = class_and_attributes(
        config.label_class.as_deref(),
        config.label_attributes.as_ref(),
    );
    if with_for {
        if let Some(id) = &ctx.id {
            attrs.set_if_absent("for", id.as_str());
        }
    }
    let tag = Tag::new(config.label_tag.as_deref().unwrap_or("label"))?
        .attributes(&attrs)
        .text(text);
    Ok(tag.render())
}

pub(crate) fn render_hint(ctx: &FieldContext) -> Result<String> {
    let Some(text) = ctx.hint.as_deref().filter(|hint| !hint.is_empty()) else {
        return Ok(String::new());
    };
    let config = &ctx.config;
    let tag = Tag::new(config.hint_tag.as_deref().unwrap_or("div"))?
        .attributes(&class_and_attributes(
            config.hint_class.as_deref(),
            config.hint_attributes.as_ref(),
        ))
        .text(text);
    Ok(tag.render())
}

/// Renders one error tag per message, joined by newlines.
pub(crate) fn render_error(ctx: &FieldContext) -> Result<String> {
    if ctx.errors.is_empty() {
        return Ok(String::new());
    }
    let config = &ctx.config;
    let attrs = class_and_attributes(
        config.error_class.as_deref(),
        config.error_attributes.as_ref(),
    );
    let tag_name = config.error_tag.as_deref().unwrap_or("div");
    let tag = Tag::new(tag_name)?.attributes(&attrs);
    let rendered: Vec<String> = ctx
        .errors
        .iter()
        .map(|message| tag.clone().text(message).render())
        .collect();
    Ok(rendered.join("\n"))
}

/// Substitutes placeholders line by line and drops the template lines
/// left blank. Unknown placeholders stay as written.
pub(crate) fn render_template(template: &str, parts: &[(&str, &str)]) -> String {
    template
        .lines()
        .filter_map(|line| {
            let rendered = substitute(line, parts);
            (!rendered.trim().is_empty()).then_some(rendered)
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn substitute(line: &str, parts: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match parts.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Wraps the composed content in the container tag when enabled.
pub(crate) fn wrap_container(ctx: &FieldContext, content: &str) -> Result<String> {
    let config = &ctx.config;
    if config.use_container == Some(false) {
        return Ok(content.to_string());
    }
    let mut attrs = class_and_attributes(
        config.container_class.as_deref(),
        config.container_attributes.as_ref(),
    );
    if let Some(class) = &ctx.container_state_class {
        attrs.add_class(class);
    }
    let tag_name = config.container_tag.as_deref().unwrap_or("div");
    let tag = Tag::new(tag_name)?.attributes(&attrs);
    Ok(format!("{}\n{}\n{}", tag.open(), content, tag.close()))
}
