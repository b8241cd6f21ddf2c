//! Themes: named bundles of templates, CSS classes and per-field-type
//! defaults.
//!
//! A [`ThemeRegistry`] is built once at application start and lent to
//! every [`FieldRenderer`](crate::FieldRenderer). Configuration is
//! layered through [`FieldConfig`], whose options are all optional so
//! that a higher level only overrides what it sets.

mod bootstrap;

pub use bootstrap::{
    bootstrap5_horizontal, bootstrap5_vertical, BOOTSTRAP5_HORIZONTAL, BOOTSTRAP5_VERTICAL,
};

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, WidgetError};
use crate::html::Attributes;

/// Discriminant selecting which control a field renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Text,
    Email,
    Password,
    Url,
    Telephone,
    Search,
    Number,
    Range,
    Date,
    Time,
    DatetimeLocal,
    Color,
    Hidden,
    File,
    Textarea,
    Checkbox,
    Radio,
    CheckboxList,
    RadioList,
    Select,
    SubmitButton,
    ResetButton,
    Button,
    ErrorSummary,
}

impl FieldType {
    /// Widget name used in error messages.
    pub fn widget_name(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::Url => "Url",
            Self::Telephone => "Telephone",
            Self::Search => "Search",
            Self::Number => "Number",
            Self::Range => "Range",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::DatetimeLocal => "DateTimeLocal",
            Self::Color => "Color",
            Self::Hidden => "Hidden",
            Self::File => "File",
            Self::Textarea => "Textarea",
            Self::Checkbox => "Checkbox",
            Self::Radio => "Radio",
            Self::CheckboxList => "CheckboxList",
            Self::RadioList => "RadioList",
            Self::Select => "Select",
            Self::SubmitButton => "SubmitButton",
            Self::ResetButton => "ResetButton",
            Self::Button => "Button",
            Self::ErrorSummary => "ErrorSummary",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.widget_name())
    }
}

/// Layered field options. `None` means "not set at this level".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct FieldConfig {
    pub template: Option<String>,
    pub use_container: Option<bool>,
    pub container_tag: Option<String>,
    pub container_class: Option<String>,
    pub container_attributes: Option<Attributes>,
    pub hide_label: Option<bool>,
    pub label_tag: Option<String>,
    pub label_class: Option<String>,
    pub label_attributes: Option<Attributes>,
    pub input_class: Option<String>,
    pub input_attributes: Option<Attributes>,
    /// Wrapper around a checkbox/radio input and its label.
    pub input_container_tag: Option<String>,
    pub input_container_class: Option<String>,
    /// Class of the label next to a checkbox/radio input.
    pub input_label_class: Option<String>,
    pub enclosed_by_label: Option<bool>,
    pub hint_tag: Option<String>,
    pub hint_class: Option<String>,
    pub hint_attributes: Option<Attributes>,
    pub error_tag: Option<String>,
    pub error_class: Option<String>,
    pub error_attributes: Option<Attributes>,
    pub show_all_errors: Option<bool>,
    pub input_valid_class: Option<String>,
    pub input_invalid_class: Option<String>,
    pub container_valid_class: Option<String>,
    pub container_invalid_class: Option<String>,
    /// Joins list items.
    pub separator: Option<String>,
    pub button_class: Option<String>,
    pub header: Option<String>,
    pub footer: Option<String>,
    pub list_class: Option<String>,
}

macro_rules! merge_options {
    ($target:expr, $over:expr; $($field:ident),* $(,)?) => {
        $(
            if let Some(value) = &$over.$field {
                $target.$field = Some(value.clone());
            }
        )*
    };
}

macro_rules! merge_attributes {
    ($target:expr, $over:expr; $($field:ident),* $(,)?) => {
        $(
            if let Some(attrs) = &$over.$field {
                $target.$field.get_or_insert_with(Attributes::new).merge(attrs);
            }
        )*
    };
}

impl FieldConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Layers `over` on top of this configuration: every option set in
    /// `over` wins, attribute maps merge key by key.
    pub fn merge(&mut self, over: &Self) {
        merge_options!(self, over;
            template, use_container, container_tag, container_class, hide_label,
            label_tag, label_class, input_class, input_container_tag,
            input_container_class, input_label_class, enclosed_by_label, hint_tag,
            hint_class, error_tag, error_class, show_all_errors, input_valid_class,
            input_invalid_class, container_valid_class, container_invalid_class,
            separator, button_class, header, footer, list_class,
        );
        merge_attributes!(self, over;
            container_attributes, label_attributes, input_attributes, hint_attributes,
            error_attributes,
        );
    }

    /// Returns this configuration with `over` layered on top.
    #[must_use]
    pub fn merged(mut self, over: &Self) -> Self {
        self.merge(over);
        self
    }
}

/// A named bundle of theme-wide keys and per-field-type overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Theme {
    pub template: Option<String>,
    pub container_class: Option<String>,
    pub label_class: Option<String>,
    pub input_class: Option<String>,
    pub hint_class: Option<String>,
    pub error_class: Option<String>,
    pub input_valid_class: Option<String>,
    pub input_invalid_class: Option<String>,
    pub container_valid_class: Option<String>,
    pub container_invalid_class: Option<String>,
    pub field_configs: HashMap<FieldType, FieldConfig>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the per-field-type override for `field_type`.
    #[must_use]
    pub fn field_config(mut self, field_type: FieldType, config: FieldConfig) -> Self {
        self.field_configs.insert(field_type, config);
        self
    }

    /// The theme-wide keys as a field configuration.
    pub fn base_config(&self) -> FieldConfig {
        FieldConfig {
            template: self.template.clone(),
            container_class: self.container_class.clone(),
            label_class: self.label_class.clone(),
            input_class: self.input_class.clone(),
            hint_class: self.hint_class.clone(),
            error_class: self.error_class.clone(),
            input_valid_class: self.input_valid_class.clone(),
            input_invalid_class: self.input_invalid_class.clone(),
            container_valid_class: self.container_valid_class.clone(),
            container_invalid_class: self.container_invalid_class.clone(),
            ..FieldConfig::default()
        }
    }

    /// Theme-wide keys with the override for `field_type` layered on top.
    pub fn config_for(&self, field_type: FieldType) -> FieldConfig {
        let mut config = self.base_config();
        if let Some(over) = self.field_configs.get(&field_type) {
            config.merge(over);
        }
        config
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RegistryFile {
    #[serde(default)]
    default_theme: Option<String>,
    themes: HashMap<String, Theme>,
}

/// Registry of named themes with an optional default.
#[derive(Debug, Clone, Default)]
pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    default_theme: Option<String>,
}

impl ThemeRegistry {
    /// Creates an empty registry; every field renders with its built-in
    /// defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with both Bootstrap 5 presets, vertical by default.
    pub fn bootstrap5() -> Self {
        Self {
            themes: HashMap::from([
                (BOOTSTRAP5_VERTICAL.to_string(), bootstrap5_vertical()),
                (BOOTSTRAP5_HORIZONTAL.to_string(), bootstrap5_horizontal()),
            ]),
            default_theme: Some(BOOTSTRAP5_VERTICAL.to_string()),
        }
    }

    /// Loads a registry from JSON:
    /// `{"defaultTheme": "name", "themes": {"name": {...}}}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: RegistryFile = serde_json::from_str(json)?;
        let mut registry = Self::new();
        registry.initialize(file.themes, file.default_theme.as_deref())?;
        Ok(registry)
    }

    /// Replaces the whole registry. On error the previous state is kept.
    pub fn initialize(
        &mut self,
        themes: impl IntoIterator<Item = (String, Theme)>,
        default_theme: Option<&str>,
    ) -> Result<()> {
        let themes: HashMap<String, Theme> = themes.into_iter().collect();
        if let Some(name) = default_theme {
            if !themes.contains_key(name) {
                return Err(WidgetError::ThemeNotFound(name.to_string()));
            }
        }
        info!(
            themes = themes.len(),
            default_theme = ?default_theme,
            "Initialized theme registry"
        );
        self.themes = themes;
        self.default_theme = default_theme.map(str::to_string);
        Ok(())
    }

    /// Adds or replaces a single theme.
    pub fn register(&mut self, name: impl Into<String>, theme: Theme) {
        self.themes.insert(name.into(), theme);
    }

    /// Name of the default theme.
    pub fn default_theme(&self) -> Option<&str> {
        self.default_theme.as_deref()
    }

    /// Looks up a theme by name.
    pub fn theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Returns the merged configuration for a theme and field type.
    ///
    /// `None` selects the default theme. Without any theme the empty
    /// baseline is returned; an unknown theme name is an error.
    pub fn config_for(&self, theme: Option<&str>, field_type: FieldType) -> Result<FieldConfig> {
        let Some(name) = theme.or(self.default_theme.as_deref()) else {
            debug!(%field_type, "No theme configured, using baseline configuration");
            return Ok(FieldConfig::default());
        };
        self.themes
            .get(name)
            .map(|t| t.config_for(field_type))
            .ok_or_else(|| WidgetError::ThemeNotFound(name.to_string()))
    }
}
