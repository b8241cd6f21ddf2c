//! Tests for rejected values and invalid configuration.

mod common;
use common::*;

use oxide_widgets::{
    CheckOptions, Field, FieldRenderer, InputOptions, InputType, ListOptions, SelectOptions,
    TextareaOptions, ThemeRegistry, WidgetError,
};

#[test]
fn error_checkbox_iterable_value() {
    let form = type_form();
    let err = render_err(&Field::checkbox(CheckOptions::new()).bind(&form, "array"));
    assert!(matches!(err, WidgetError::ValueTypeMismatch { .. }));
    assert_eq!(
        err.to_string(),
        "Checkbox widget value can not be an iterable or an object."
    );
    assert!(!err.is_configuration_error());
}

#[test]
fn error_radio_and_select_iterable_value() {
    let form = type_form();
    let err = render_err(&Field::radio(CheckOptions::new()).bind(&form, "array"));
    assert_eq!(
        err.to_string(),
        "Radio widget value can not be an iterable or an object."
    );

    let err = render_err(&Field::select(SelectOptions::new()).bind(&form, "tags"));
    assert_eq!(
        err.to_string(),
        "Select widget value can not be an iterable or an object."
    );

    let err = render_err(&Field::radio_list(ListOptions::new()).bind(&form, "tags"));
    assert_eq!(
        err.to_string(),
        "RadioList widget value can not be an iterable or an object."
    );
}

#[test]
fn error_string_widgets() {
    let form = type_form();
    let err = render_err(&Field::text().bind(&form, "int"));
    assert_eq!(
        err.to_string(),
        "Text widget must be a string or null value."
    );

    let err = render_err(&Field::datetime_local().bind(&form, "bool"));
    assert_eq!(
        err.to_string(),
        "DateTimeLocal widget must be a string or null value."
    );

    let err = render_err(&Field::textarea(TextareaOptions::new()).bind(&form, "array"));
    assert_eq!(
        err.to_string(),
        "Textarea widget must be a string or null value."
    );
}

#[test]
fn error_numeric_widgets() {
    let form = type_form();
    let err = render_err(&Field::number().bind(&form, "string").value("abc"));
    assert_eq!(
        err.to_string(),
        "Number widget must be a numeric or null value."
    );

    let err = render_err(&Field::range().bind(&form, "tags"));
    assert_eq!(
        err.to_string(),
        "Range widget must be a numeric or null value."
    );
}

#[test]
fn error_hidden_iterable() {
    let form = type_form();
    let err = render_err(&Field::hidden().bind(&form, "tags"));
    assert_eq!(
        err.to_string(),
        "Hidden widget must be a scalar or null value."
    );
}

#[test]
fn error_iterable_widgets() {
    let form = type_form();
    let err = render_err(&Field::checkbox_list(ListOptions::new()).bind(&form, "string"));
    assert_eq!(
        err.to_string(),
        "CheckboxList widget must be an iterable or null value."
    );

    let err = render_err(&Field::select(SelectOptions::new().multiple(true)).bind(&form, "int"));
    assert_eq!(
        err.to_string(),
        "Select widget must be an iterable or null value."
    );
}

#[test]
fn error_unknown_attribute() {
    let form = type_form();
    let err = render_err(&Field::text().bind(&form, "missing"));
    assert!(matches!(
        err,
        WidgetError::UnknownAttribute { ref form, ref attribute }
            if form == "TypeForm" && attribute == "missing"
    ));
    assert!(err.is_configuration_error());
}

#[test]
fn error_invalid_attribute_expression() {
    let form = type_form();
    let err = render_err(&Field::text().bind(&form, "not valid"));
    assert!(matches!(err, WidgetError::InvalidAttributeExpression(_)));
}

#[test]
fn error_empty_tag_names() {
    let form = type_form();
    let err = render_err(&Field::text().bind(&form, "string").container_tag(""));
    assert!(matches!(err, WidgetError::EmptyTagName));

    let err = render_err(
        &Field::text()
            .bind(&form, "string")
            .config(&oxide_widgets::FieldConfig {
                label_tag: Some(String::new()),
                ..Default::default()
            }),
    );
    assert!(matches!(err, WidgetError::EmptyTagName));
}

#[test]
fn error_textarea_options() {
    let form = type_form();
    let err =
        render_err(&Field::textarea(TextareaOptions::new().wrap("off")).bind(&form, "string"));
    assert!(matches!(err, WidgetError::InvalidWrap(_)));

    let err =
        render_err(&Field::textarea(TextareaOptions::new().dirname("")).bind(&form, "string"));
    assert!(matches!(err, WidgetError::EmptyDirname));
}

#[test]
fn error_input_type_mismatch() {
    let form = type_form();
    let err = render_err(&Field::text().bind(&form, "string").attr("type", "email"));
    assert!(matches!(
        err,
        WidgetError::InputTypeMismatch { widget: "Text", expected: "text", ref actual }
            if actual == "email"
    ));

    let html = render(&Field::text().bind(&form, "string").attr("type", "text"));
    assert!(html.contains(r#"type="text""#));

    let list = ListOptions::new().items([("a", "A")]);
    let err = render_err(
        &Field::checkbox_list(list.clone())
            .bind(&form, "tags")
            .attr("type", "radio"),
    );
    assert!(matches!(
        err,
        WidgetError::InputTypeMismatch { widget: "CheckboxList", expected: "checkbox", .. }
    ));

    let err = render_err(
        &Field::radio_list(list)
            .bind(&form, "string")
            .attr("type", "checkbox"),
    );
    assert!(matches!(
        err,
        WidgetError::InputTypeMismatch { widget: "RadioList", expected: "radio", .. }
    ));
}

#[test]
fn error_empty_dirname() {
    let form = type_form();
    let field = Field::input(InputOptions::new(InputType::Search).dirname(" "));
    let err = render_err(&field.bind(&form, "string"));
    assert!(matches!(err, WidgetError::EmptyDirname));
}

#[test]
fn error_unknown_theme() {
    let form = type_form();
    let registry = ThemeRegistry::bootstrap5();
    let err = FieldRenderer::new(&registry)
        .with_theme("material")
        .render(&Field::text().bind(&form, "string"))
        .unwrap_err();
    assert!(matches!(err, WidgetError::ThemeNotFound(ref name) if name == "material"));
}
