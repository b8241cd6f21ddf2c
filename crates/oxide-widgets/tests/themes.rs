//! Tests for theme resolution and the Bootstrap 5 presets.

mod common;
use common::*;

use oxide_widgets::theme::{BOOTSTRAP5_HORIZONTAL, BOOTSTRAP5_VERTICAL};
use oxide_widgets::{
    CheckOptions, Field, FieldConfig, FieldRenderer, FieldType, FormErrors, SelectOptions,
    ThemeRegistry,
};

const THEME_JSON: &str = r#"{
    "defaultTheme": "definitions",
    "themes": {
        "definitions": {
            "containerClass": "container-class-definitions",
            "inputClass": "input-class-definitions",
            "fieldConfigs": {
                "checkbox": {"inputClass": "check-definitions", "enclosedByLabel": false},
                "select": {"inputAttributes": {"data-theme": "yes", "autofocus": true}}
            }
        }
    }
}"#;

#[test]
fn call_options_override_theme() {
    let registry = ThemeRegistry::from_json(THEME_JSON).unwrap();
    let renderer = FieldRenderer::new(&registry);
    let form = type_form();

    let html = renderer
        .render(&Field::text().bind(&form, "string"))
        .unwrap();
    assert!(html.starts_with(r#"<div class="container-class-definitions">"#));

    let field = Field::text()
        .bind(&form, "string")
        .container_class("container-class-widget");
    let html = renderer.render(&field).unwrap();
    assert!(html.starts_with(r#"<div class="container-class-widget">"#));
    assert!(!html.contains("container-class-definitions"));
}

#[test]
fn renderer_defaults_sit_between_theme_and_call() {
    let registry = ThemeRegistry::from_json(THEME_JSON).unwrap();
    let renderer = FieldRenderer::new(&registry).with_defaults(
        FieldType::Text,
        FieldConfig {
            container_class: Some("container-class-renderer".to_string()),
            ..FieldConfig::default()
        },
    );
    let form = type_form();

    let html = renderer
        .render(&Field::text().bind(&form, "string"))
        .unwrap();
    assert!(html.starts_with(r#"<div class="container-class-renderer">"#));

    let html = renderer
        .render(&Field::text().bind(&form, "string").container_class("call"))
        .unwrap();
    assert!(html.starts_with(r#"<div class="call">"#));

    let html = renderer
        .render(&Field::email().bind(&form, "string"))
        .unwrap();
    assert!(html.starts_with(r#"<div class="container-class-definitions">"#));
}

#[test]
fn field_type_overrides() {
    let registry = ThemeRegistry::from_json(THEME_JSON).unwrap();
    let renderer = FieldRenderer::new(&registry);
    let form = type_form();

    let html = renderer
        .render(&Field::checkbox(CheckOptions::new()).bind(&form, "bool"))
        .unwrap();
    assert!(
        html.contains(r#"<input type="checkbox" id="typeform-bool" class="check-definitions""#)
    );
    assert!(html.contains(r#"<label for="typeform-bool">Bool</label>"#));

    let html = renderer
        .render(&Field::select(SelectOptions::new()).bind(&form, "int"))
        .unwrap();
    assert!(html.contains(r#"class="input-class-definitions""#));
    assert!(html.contains(r#" data-theme="yes""#));
    assert!(html.contains(" autofocus"));

    let html = renderer
        .render(
            &Field::select(SelectOptions::new())
                .bind(&form, "int")
                .autofocus(false)
                .input_class("picked"),
        )
        .unwrap();
    assert!(!html.contains("autofocus"));
    assert!(html.contains(r#"class="picked""#));
}

#[test]
fn bootstrap5_vertical_text() {
    let form = type_form();
    let html = render_themed(&Field::text().bind(&form, "string"), BOOTSTRAP5_VERTICAL);
    assert_eq!(
        html,
        "<div class=\"mb-3\">\n\
         <label class=\"form-label\" for=\"typeform-string\">String</label>\n\
         <input type=\"text\" id=\"typeform-string\" class=\"form-control\" name=\"TypeForm[string]\" value=\"\">\n\
         </div>"
    );
}

#[test]
fn bootstrap5_horizontal_text() {
    let form = type_form().with_hint("string", "Any text.");
    let html = render_themed(&Field::text().bind(&form, "string"), BOOTSTRAP5_HORIZONTAL);
    assert_eq!(
        html,
        "<div class=\"mb-3 row\">\n\
         <label class=\"col-sm-2 col-form-label\" for=\"typeform-string\">String</label>\n\
         <div class=\"col-sm-10\">\n\
         <input type=\"text\" id=\"typeform-string\" class=\"form-control\" name=\"TypeForm[string]\" value=\"\">\n\
         <div class=\"form-text\">Any text.</div>\n\
         </div>\n\
         </div>"
    );
}

#[test]
fn bootstrap5_checkbox() {
    let form = type_form();
    let field = Field::checkbox(CheckOptions::new().uncheck_value("0")).bind(&form, "bool");
    let html = render_themed(&field, BOOTSTRAP5_VERTICAL);
    assert_eq!(
        html,
        "<div class=\"mb-3\">\n\
         <div class=\"form-check\">\n\
         <label class=\"form-check-label\"><input type=\"hidden\" name=\"TypeForm[bool]\" value=\"0\"><input type=\"checkbox\" id=\"typeform-bool\" class=\"form-check-input\" name=\"TypeForm[bool]\" value=\"1\"> Bool</label>\n\
         </div>\n\
         </div>"
    );
}

#[test]
fn theme_switch_keeps_checkbox_structure() {
    let form = type_form();
    let field = Field::checkbox(CheckOptions::new().uncheck_value("0")).bind(&form, "bool");

    let vertical = render_themed(&field, BOOTSTRAP5_VERTICAL);
    let horizontal = render_themed(&field, BOOTSTRAP5_HORIZONTAL);

    assert_ne!(vertical, horizontal);
    assert!(horizontal.contains("form-check col-sm-10 offset-sm-2"));
    assert_eq!(strip_classes(&vertical), strip_classes(&horizontal));
}

#[test]
fn bootstrap5_hidden_has_no_class() {
    let form = type_form();
    let bare = r#"<input type="hidden" id="typeform-int" name="TypeForm[int]" value="0">"#;
    let field = Field::hidden().bind(&form, "int");
    assert_eq!(render_themed(&field, BOOTSTRAP5_VERTICAL), bare);
    assert_eq!(render_themed(&field, BOOTSTRAP5_HORIZONTAL), bare);
}

#[test]
fn bootstrap5_buttons() {
    let html = render_themed(&Field::submit_button("Save"), BOOTSTRAP5_VERTICAL);
    assert_eq!(
        html,
        "<div class=\"mb-3\">\n<button type=\"submit\" class=\"btn btn-primary\">Save</button>\n</div>"
    );

    let html = render_themed(&Field::reset_button("Reset"), BOOTSTRAP5_HORIZONTAL);
    assert_eq!(
        html,
        "<div class=\"mb-3 row\">\n\
         <div class=\"col-sm-10 offset-sm-2\">\n\
         <button type=\"reset\" class=\"btn btn-secondary\">Reset</button>\n\
         </div>\n\
         </div>"
    );
}

#[test]
fn bootstrap5_validation_classes() {
    let form = type_form().with_errors(FormErrors::new().with("string", "Wrong."));

    let html = render_themed(&Field::text().bind(&form, "string"), BOOTSTRAP5_VERTICAL);
    assert!(html.contains(r#"class="form-control is-invalid""#));
    assert!(html.contains(r#"<div class="invalid-feedback">Wrong.</div>"#));

    let html = render_themed(
        &Field::text().bind(&form, "int").value("ok"),
        BOOTSTRAP5_VERTICAL,
    );
    assert!(html.contains(r#"class="form-control is-valid""#));
}

#[test]
fn bootstrap5_select_class() {
    let form = select_form();
    let options = SelectOptions::new().options_data([(15, "Fifteen")]);
    let html = render_themed(
        &Field::select(options).bind(&form, "count"),
        BOOTSTRAP5_VERTICAL,
    );
    assert!(html.contains(
        r#"<select id="selectform-count" class="form-select" name="SelectForm[count]">"#
    ));
    assert!(html.contains(r#"<option value="15" selected>Fifteen</option>"#));
}

#[test]
fn default_theme_is_vertical() {
    let registry = ThemeRegistry::bootstrap5();
    assert_eq!(registry.default_theme(), Some(BOOTSTRAP5_VERTICAL));

    let form = type_form();
    let html = FieldRenderer::new(&registry)
        .render(&Field::text().bind(&form, "string"))
        .unwrap();
    assert_eq!(
        html,
        render_themed(&Field::text().bind(&form, "string"), BOOTSTRAP5_VERTICAL)
    );
}
