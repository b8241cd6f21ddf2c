#![allow(dead_code)]

use std::sync::LazyLock;

use oxide_widgets::{Field, FieldRenderer, FieldValue, FormData, ThemeRegistry, WidgetError};
use regex::Regex;

static CLASS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#" class="[^"]*""#).unwrap());

/// A model with one attribute per value kind.
pub fn type_form() -> FormData {
    FormData::new("TypeForm")
        .attribute("array", Vec::<FieldValue>::new())
        .attribute("bool", false)
        .attribute("float", 0.0)
        .attribute("int", 0)
        .attribute("number", FieldValue::Null)
        .attribute("string", "")
        .attribute("toNull", FieldValue::Null)
        .attribute("tags", vec!["a", "c"])
}

pub fn select_form() -> FormData {
    FormData::new("SelectForm")
        .attribute("count", 15)
        .attribute("cities", vec![1, 3])
}

/// Renders without any theme.
pub fn render(field: &Field<'_>) -> String {
    let registry = ThemeRegistry::new();
    FieldRenderer::new(&registry)
        .render(field)
        .unwrap_or_else(|e| panic!("Failed to render {:?}\nError: {e}", field.field_type()))
}

/// Renders with a Bootstrap 5 preset.
pub fn render_themed(field: &Field<'_>, theme: &str) -> String {
    let registry = ThemeRegistry::bootstrap5();
    let field_type = field.field_type();
    FieldRenderer::new(&registry)
        .with_theme(theme)
        .render(field)
        .unwrap_or_else(|e| panic!("Failed to render {field_type:?} with {theme}\nError: {e}"))
}

pub fn render_err(field: &Field<'_>) -> WidgetError {
    let registry = ThemeRegistry::new();
    FieldRenderer::new(&registry)
        .render(field)
        .expect_err(&format!("Expected render error for {:?}", field.field_type()))
}

/// Drops every class attribute.
pub fn strip_classes(html: &str) -> String {
    CLASS_RE.replace_all(html, "").into_owned()
}
