//! Bootstrap 5 theme presets.

use super::{FieldConfig, FieldType, Theme};

/// Name of the vertical (stacked label) preset.
pub const BOOTSTRAP5_VERTICAL: &str = "bootstrap5-vertical";

/// Name of the horizontal (label column) preset.
pub const BOOTSTRAP5_HORIZONTAL: &str = "bootstrap5-horizontal";

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn check_config() -> FieldConfig {
    FieldConfig {
        template: some("{input}\n{hint}\n{error}"),
        input_container_tag: some("div"),
        input_container_class: some("form-check"),
        input_class: some("form-check-input"),
        input_label_class: some("form-check-label"),
        ..FieldConfig::default()
    }
}

fn list_config() -> FieldConfig {
    FieldConfig {
        input_container_tag: some("div"),
        input_container_class: some("form-check"),
        input_class: some("form-check-input"),
        input_label_class: some("form-check-label"),
        ..FieldConfig::default()
    }
}

fn button_config(class: &str) -> FieldConfig {
    FieldConfig {
        button_class: some(class),
        ..FieldConfig::default()
    }
}

fn with_common_fields(theme: Theme) -> Theme {
    theme
        .field_config(
            FieldType::Select,
            FieldConfig {
                input_class: some("form-select"),
                ..FieldConfig::default()
            },
        )
        .field_config(
            FieldType::Range,
            FieldConfig {
                input_class: some("form-range"),
                ..FieldConfig::default()
            },
        )
        .field_config(
            FieldType::Color,
            FieldConfig {
                input_class: some("form-control form-control-color"),
                ..FieldConfig::default()
            },
        )
        .field_config(
            FieldType::Hidden,
            FieldConfig {
                input_class: some(""),
                ..FieldConfig::default()
            },
        )
        .field_config(
            FieldType::ErrorSummary,
            FieldConfig {
                container_class: some("alert alert-danger"),
                list_class: some("mb-0"),
                ..FieldConfig::default()
            },
        )
}

/// Stacked layout: label above the input.
pub fn bootstrap5_vertical() -> Theme {
    let theme = Theme {
        template: some("{label}\n{input}\n{hint}\n{error}"),
        container_class: some("mb-3"),
        label_class: some("form-label"),
        input_class: some("form-control"),
        hint_class: some("form-text"),
        error_class: some("invalid-feedback"),
        input_valid_class: some("is-valid"),
        input_invalid_class: some("is-invalid"),
        ..Theme::default()
    };

    with_common_fields(theme)
        .field_config(FieldType::Checkbox, check_config())
        .field_config(FieldType::Radio, check_config())
        .field_config(FieldType::CheckboxList, list_config())
        .field_config(FieldType::RadioList, list_config())
        .field_config(FieldType::SubmitButton, button_config("btn btn-primary"))
        .field_config(FieldType::ResetButton, button_config("btn btn-secondary"))
        .field_config(FieldType::Button, button_config("btn btn-secondary"))
}

/// Horizontal layout: label in a `col-sm-2` column, input in `col-sm-10`.
pub fn bootstrap5_horizontal() -> Theme {
    let theme = Theme {
        template: some("{label}\n<div class=\"col-sm-10\">\n{input}\n{hint}\n{error}\n</div>"),
        container_class: some("mb-3 row"),
        label_class: some("col-sm-2 col-form-label"),
        input_class: some("form-control"),
        hint_class: some("form-text"),
        error_class: some("invalid-feedback"),
        input_valid_class: some("is-valid"),
        input_invalid_class: some("is-invalid"),
        ..Theme::default()
    };

    let horizontal_check = FieldConfig {
        input_container_class: some("form-check col-sm-10 offset-sm-2"),
        ..check_config()
    };
    let horizontal_list = FieldConfig {
        label_class: some("col-sm-2 col-form-label pt-0"),
        ..list_config()
    };
    let offset_button = |class: &str| FieldConfig {
        template: some("<div class=\"col-sm-10 offset-sm-2\">\n{input}\n</div>"),
        ..button_config(class)
    };

    with_common_fields(theme)
        .field_config(FieldType::Checkbox, horizontal_check.clone())
        .field_config(FieldType::Radio, horizontal_check)
        .field_config(FieldType::CheckboxList, horizontal_list.clone())
        .field_config(FieldType::RadioList, horizontal_list)
        .field_config(FieldType::SubmitButton, offset_button("btn btn-primary"))
        .field_config(FieldType::ResetButton, offset_button("btn btn-secondary"))
        .field_config(FieldType::Button, offset_button("btn btn-secondary"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_share_field_types() {
        let vertical = bootstrap5_vertical();
        let horizontal = bootstrap5_horizontal();
        let mut v: Vec<_> = vertical.field_configs.keys().copied().collect();
        let mut h: Vec<_> = horizontal.field_configs.keys().copied().collect();
        v.sort_by_key(|t| t.widget_name());
        h.sort_by_key(|t| t.widget_name());
        assert_eq!(v, h);
    }

    #[test]
    fn test_checkbox_overrides() {
        let config = bootstrap5_vertical().config_for(FieldType::Checkbox);
        assert_eq!(config.input_class.as_deref(), Some("form-check-input"));
        assert_eq!(config.container_class.as_deref(), Some("mb-3"));
        assert_eq!(config.template.as_deref(), Some("{input}\n{hint}\n{error}"));

        let config = bootstrap5_horizontal().config_for(FieldType::Checkbox);
        assert_eq!(config.container_class.as_deref(), Some("mb-3 row"));
        assert_eq!(
            config.input_container_class.as_deref(),
            Some("form-check col-sm-10 offset-sm-2")
        );
    }
}
