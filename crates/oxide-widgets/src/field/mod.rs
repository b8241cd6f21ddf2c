//! Field rendering: configuration resolution and HTML composition.
//!
//! A [`Field`] describes one control: its kind, an optional model
//! binding and call-time options. [`FieldRenderer::render`] resolves the
//! final configuration in this order, lowest precedence first:
//!
//! 1. built-in defaults of the field type,
//! 2. the theme (theme-wide keys, then its per-field-type override),
//! 3. renderer defaults set with [`FieldRenderer::with_defaults`],
//! 4. options set on the [`Field`] itself,
//!
//! then fills remaining gaps (`name`, `id`, `value`, label, hint,
//! placeholder, `required`) from the bound model.

mod button;
mod check;
mod input;
mod list;
pub(crate) mod parts;
mod select;
mod textarea;

pub use button::{ButtonOptions, ButtonType};
pub use check::CheckOptions;
pub use input::{InputOptions, InputType};
pub use list::ListOptions;
pub use select::{SelectItem, SelectOptions};
pub use textarea::TextareaOptions;

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Result, ValueDomain, WidgetError};
use crate::html::{AttrValue, Attributes, Tag};
use crate::model::{FormModel, ModelBinding};
use crate::summary::ErrorSummary;
use crate::theme::{FieldConfig, FieldType, ThemeRegistry};
use crate::value::FieldValue;

/// The control a field renders, with its kind-specific options.
#[derive(Debug, Clone)]
pub enum FieldKind {
    Input(InputOptions),
    Textarea(TextareaOptions),
    Checkbox(CheckOptions),
    Radio(CheckOptions),
    CheckboxList(ListOptions),
    RadioList(ListOptions),
    Select(SelectOptions),
    Button(ButtonOptions),
}

impl FieldKind {
    /// The field type used for theme lookup.
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Input(options) => options.input_type().field_type(),
            Self::Textarea(_) => FieldType::Textarea,
            Self::Checkbox(_) => FieldType::Checkbox,
            Self::Radio(_) => FieldType::Radio,
            Self::CheckboxList(_) => FieldType::CheckboxList,
            Self::RadioList(_) => FieldType::RadioList,
            Self::Select(_) => FieldType::Select,
            Self::Button(options) => options.button_type().field_type(),
        }
    }

    fn value_domain(&self) -> Option<ValueDomain> {
        match self {
            Self::Input(options) => options.input_type().value_domain(),
            Self::Textarea(_) => Some(ValueDomain::StringOrNull),
            Self::Checkbox(_) | Self::Radio(_) | Self::RadioList(_) => {
                Some(ValueDomain::NotIterable)
            }
            Self::CheckboxList(_) => Some(ValueDomain::IterableOrNull),
            Self::Select(options) => Some(options.value_domain()),
            Self::Button(_) => None,
        }
    }

    fn validate_options(&self) -> Result<()> {
        match self {
            Self::Input(options) => options.validate(),
            Self::Textarea(options) => options.validate(),
            _ => Ok(()),
        }
    }

    /// Hidden inputs render without template or container.
    fn is_hidden(&self) -> bool {
        matches!(self, Self::Input(o) if o.input_type() == InputType::Hidden)
    }

    /// Hidden inputs and buttons render the input only.
    fn has_parts(&self) -> bool {
        !matches!(self, Self::Button(_)) && !self.is_hidden()
    }

    /// Checkboxes and radios render their label next to the input.
    fn has_label_part(&self) -> bool {
        self.has_parts() && !matches!(self, Self::Checkbox(_) | Self::Radio(_))
    }

    fn supports_placeholder(&self) -> bool {
        match self {
            Self::Input(options) => options.input_type().supports_placeholder(),
            Self::Textarea(_) => true,
            _ => false,
        }
    }

    fn supports_required(&self) -> bool {
        self.has_parts() && !matches!(self, Self::CheckboxList(_))
    }

    fn render_input(&self, ctx: &FieldContext) -> Result<String> {
        match self {
            Self::Input(options) => options.render(ctx),
            Self::Textarea(options) => options.render(ctx),
            Self::Checkbox(options) => options.render(ctx, "checkbox"),
            Self::Radio(options) => options.render(ctx, "radio"),
            Self::CheckboxList(options) => options.render(ctx, "checkbox"),
            Self::RadioList(options) => options.render(ctx, "radio"),
            Self::Select(options) => options.render(ctx),
            Self::Button(options) => options.render(ctx),
        }
    }
}

/// Built-in defaults, the lowest configuration level.
fn builtin_config(field_type: FieldType) -> FieldConfig {
    let mut config = FieldConfig {
        template: Some("{label}\n{input}\n{hint}\n{error}".to_string()),
        use_container: Some(true),
        container_tag: Some("div".to_string()),
        hide_label: Some(false),
        label_tag: Some("label".to_string()),
        enclosed_by_label: Some(true),
        hint_tag: Some("div".to_string()),
        error_tag: Some("div".to_string()),
        show_all_errors: Some(false),
        separator: Some("\n".to_string()),
        ..FieldConfig::default()
    };
    match field_type {
        FieldType::Checkbox | FieldType::Radio => {
            config.template = Some("{input}\n{hint}\n{error}".to_string());
        }
        FieldType::Hidden => {
            config.template = Some("{input}".to_string());
            config.use_container = Some(false);
        }
        FieldType::SubmitButton | FieldType::ResetButton | FieldType::Button => {
            config.template = Some("{input}".to_string());
        }
        _ => {}
    }
    config
}

/// One field to render: kind, optional model binding and call options.
#[derive(Debug, Clone)]
pub struct Field<'a> {
    kind: FieldKind,
    binding: Option<ModelBinding<'a>>,
    config: FieldConfig,
    name: Option<Option<String>>,
    id: Option<Option<String>>,
    value: Option<FieldValue>,
    label: Option<String>,
    hint: Option<Option<String>>,
    error: Option<Option<String>>,
    placeholder: Option<String>,
}

impl<'a> Field<'a> {
    /// Creates a field of the given kind.
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            binding: None,
            config: FieldConfig::default(),
            name: None,
            id: None,
            value: None,
            label: None,
            hint: None,
            error: None,
            placeholder: None,
        }
    }

    /// Creates an `<input>` field.
    pub fn input(options: InputOptions) -> Self {
        Self::new(FieldKind::Input(options))
    }

    /// Creates a text input.
    pub fn text() -> Self {
        Self::input(InputOptions::new(InputType::Text))
    }

    /// Creates an email input.
    pub fn email() -> Self {
        Self::input(InputOptions::new(InputType::Email))
    }

    /// Creates a password input.
    pub fn password() -> Self {
        Self::input(InputOptions::new(InputType::Password))
    }

    /// Creates a URL input.
    pub fn url() -> Self {
        Self::input(InputOptions::new(InputType::Url))
    }

    /// Creates a telephone input.
    pub fn telephone() -> Self {
        Self::input(InputOptions::new(InputType::Telephone))
    }

    /// Creates a search input.
    pub fn search() -> Self {
        Self::input(InputOptions::new(InputType::Search))
    }

    /// Creates a number input.
    pub fn number() -> Self {
        Self::input(InputOptions::new(InputType::Number))
    }

    /// Creates a range input.
    pub fn range() -> Self {
        Self::input(InputOptions::new(InputType::Range))
    }

    /// Creates a date input.
    pub fn date() -> Self {
        Self::input(InputOptions::new(InputType::Date))
    }

    /// Creates a time input.
    pub fn time() -> Self {
        Self::input(InputOptions::new(InputType::Time))
    }

    /// Creates a local date-time input.
    pub fn datetime_local() -> Self {
        Self::input(InputOptions::new(InputType::DatetimeLocal))
    }

    /// Creates a color input.
    pub fn color() -> Self {
        Self::input(InputOptions::new(InputType::Color))
    }

    /// Creates a hidden input.
    pub fn hidden() -> Self {
        Self::input(InputOptions::new(InputType::Hidden))
    }

    /// Creates a file input.
    pub fn file() -> Self {
        Self::input(InputOptions::new(InputType::File))
    }

    /// Creates a textarea.
    pub fn textarea(options: TextareaOptions) -> Self {
        Self::new(FieldKind::Textarea(options))
    }

    /// Creates a single checkbox.
    pub fn checkbox(options: CheckOptions) -> Self {
        Self::new(FieldKind::Checkbox(options))
    }

    /// Creates a single radio button.
    pub fn radio(options: CheckOptions) -> Self {
        Self::new(FieldKind::Radio(options))
    }

    /// Creates a list of checkboxes.
    pub fn checkbox_list(options: ListOptions) -> Self {
        Self::new(FieldKind::CheckboxList(options))
    }

    /// Creates a list of radio buttons.
    pub fn radio_list(options: ListOptions) -> Self {
        Self::new(FieldKind::RadioList(options))
    }

    /// Creates a select.
    pub fn select(options: SelectOptions) -> Self {
        Self::new(FieldKind::Select(options))
    }

    /// Creates a submit button.
    pub fn submit_button(content: impl Into<String>) -> Self {
        Self::new(FieldKind::Button(ButtonOptions::new(ButtonType::Submit, content)))
    }

    /// Creates a reset button.
    pub fn reset_button(content: impl Into<String>) -> Self {
        Self::new(FieldKind::Button(ButtonOptions::new(ButtonType::Reset, content)))
    }

    /// Creates a plain button.
    pub fn button(content: impl Into<String>) -> Self {
        Self::new(FieldKind::Button(ButtonOptions::new(ButtonType::Button, content)))
    }

    /// The field type used for theme lookup.
    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    /// Binds the field to a model attribute.
    #[must_use]
    pub fn bind(mut self, model: &'a dyn FormModel, attribute: impl Into<String>) -> Self {
        self.binding = Some(ModelBinding::new(model, attribute));
        self
    }

    /// Sets the `name` attribute, overriding the derived one.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(Some(name.into()));
        self
    }

    /// Renders no `name` attribute.
    #[must_use]
    pub fn no_name(mut self) -> Self {
        self.name = Some(None);
        self
    }

    /// Sets the `id` attribute, overriding the derived one.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(Some(id.into()));
        self
    }

    /// Renders no `id` attribute.
    #[must_use]
    pub fn no_id(mut self) -> Self {
        self.id = Some(None);
        self
    }

    /// Sets the value, overriding the model value.
    #[must_use]
    pub fn value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the label text.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Hides the label.
    #[must_use]
    pub fn hide_label(mut self) -> Self {
        self.config.hide_label = Some(true);
        self
    }

    /// Sets the hint text.
    #[must_use]
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(Some(hint.into()));
        self
    }

    /// Renders no hint, even when the model provides one.
    #[must_use]
    pub fn no_hint(mut self) -> Self {
        self.hint = Some(None);
        self
    }

    /// Sets the error message, overriding model errors.
    #[must_use]
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(Some(message.into()));
        self
    }

    /// Renders no error, even when the model has errors.
    #[must_use]
    pub fn no_error(mut self) -> Self {
        self.error = Some(None);
        self
    }

    /// Shows every error of the attribute instead of the first one.
    #[must_use]
    pub fn show_all_errors(mut self, show: bool) -> Self {
        self.config.show_all_errors = Some(show);
        self
    }

    /// Sets the placeholder, overriding the model placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Layers a whole configuration bag on top of the call options.
    #[must_use]
    pub fn config(mut self, config: &FieldConfig) -> Self {
        self.config.merge(config);
        self
    }

    /// Sets the template.
    #[must_use]
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.config.template = Some(template.into());
        self
    }

    /// Enables or disables the container tag.
    #[must_use]
    pub fn use_container(mut self, use_container: bool) -> Self {
        self.config.use_container = Some(use_container);
        self
    }

    /// Sets the container tag name.
    #[must_use]
    pub fn container_tag(mut self, tag: impl Into<String>) -> Self {
        self.config.container_tag = Some(tag.into());
        self
    }

    /// Sets the container class.
    #[must_use]
    pub fn container_class(mut self, class: impl Into<String>) -> Self {
        self.config.container_class = Some(class.into());
        self
    }

    /// Sets container attributes.
    #[must_use]
    pub fn container_attributes(mut self, attrs: &Attributes) -> Self {
        self.config
            .container_attributes
            .get_or_insert_with(Attributes::new)
            .merge(attrs);
        self
    }

    /// Sets the label class.
    #[must_use]
    pub fn label_class(mut self, class: impl Into<String>) -> Self {
        self.config.label_class = Some(class.into());
        self
    }

    /// Sets label attributes.
    #[must_use]
    pub fn label_attributes(mut self, attrs: &Attributes) -> Self {
        self.config
            .label_attributes
            .get_or_insert_with(Attributes::new)
            .merge(attrs);
        self
    }

    /// Sets the input class.
    #[must_use]
    pub fn input_class(mut self, class: impl Into<String>) -> Self {
        self.config.input_class = Some(class.into());
        self
    }

    /// Sets input attributes.
    #[must_use]
    pub fn input_attributes(mut self, attrs: &Attributes) -> Self {
        self.input_attrs().merge(attrs);
        self
    }

    /// Sets the wrapper around checkbox and radio inputs.
    #[must_use]
    pub fn input_container(mut self, tag: impl Into<String>, class: impl Into<String>) -> Self {
        self.config.input_container_tag = Some(tag.into());
        self.config.input_container_class = Some(class.into());
        self
    }

    /// Sets the class of the label next to checkbox and radio inputs.
    #[must_use]
    pub fn input_label_class(mut self, class: impl Into<String>) -> Self {
        self.config.input_label_class = Some(class.into());
        self
    }

    /// Whether checkbox and radio labels enclose the input.
    #[must_use]
    pub fn enclosed_by_label(mut self, enclosed: bool) -> Self {
        self.config.enclosed_by_label = Some(enclosed);
        self
    }

    /// Sets the hint class.
    #[must_use]
    pub fn hint_class(mut self, class: impl Into<String>) -> Self {
        self.config.hint_class = Some(class.into());
        self
    }

    /// Sets hint attributes.
    #[must_use]
    pub fn hint_attributes(mut self, attrs: &Attributes) -> Self {
        self.config
            .hint_attributes
            .get_or_insert_with(Attributes::new)
            .merge(attrs);
        self
    }

    /// Sets the error class.
    #[must_use]
    pub fn error_class(mut self, class: impl Into<String>) -> Self {
        self.config.error_class = Some(class.into());
        self
    }

    /// Sets error attributes.
    #[must_use]
    pub fn error_attributes(mut self, attrs: &Attributes) -> Self {
        self.config
            .error_attributes
            .get_or_insert_with(Attributes::new)
            .merge(attrs);
        self
    }

    /// Sets the input classes applied after successful validation.
    #[must_use]
    pub fn valid_class(mut self, class: impl Into<String>) -> Self {
        self.config.input_valid_class = Some(class.into());
        self
    }

    /// Sets the input classes applied after failed validation.
    #[must_use]
    pub fn invalid_class(mut self, class: impl Into<String>) -> Self {
        self.config.input_invalid_class = Some(class.into());
        self
    }

    /// Sets the container classes applied after successful validation.
    #[must_use]
    pub fn container_valid_class(mut self, class: impl Into<String>) -> Self {
        self.config.container_valid_class = Some(class.into());
        self
    }

    /// Sets the container classes applied after failed validation.
    #[must_use]
    pub fn container_invalid_class(mut self, class: impl Into<String>) -> Self {
        self.config.container_invalid_class = Some(class.into());
        self
    }

    /// Sets an input attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.input_attrs().set(key, value);
        self
    }

    /// Sets the `disabled` attribute.
    #[must_use]
    pub fn disabled(self, disabled: bool) -> Self {
        self.attr("disabled", disabled)
    }

    /// Sets the `required` attribute.
    #[must_use]
    pub fn required(self, required: bool) -> Self {
        self.attr("required", required)
    }

    /// Sets the `readonly` attribute.
    #[must_use]
    pub fn readonly(self, readonly: bool) -> Self {
        self.attr("readonly", readonly)
    }

    /// Sets the `autofocus` attribute.
    #[must_use]
    pub fn autofocus(self, autofocus: bool) -> Self {
        self.attr("autofocus", autofocus)
    }

    /// Sets the `tabindex` attribute.
    #[must_use]
    pub fn tab_index(self, index: i64) -> Self {
        self.attr("tabindex", index)
    }

    /// Associates the control with a form element by id.
    #[must_use]
    pub fn form(self, form_id: impl Into<String>) -> Self {
        self.attr("form", form_id.into())
    }

    fn input_attrs(&mut self) -> &mut Attributes {
        self.config
            .input_attributes
            .get_or_insert_with(Attributes::new)
    }
}

/// Everything resolved for one render call.
#[derive(Debug)]
pub(crate) struct FieldContext {
    pub field_type: FieldType,
    pub config: FieldConfig,
    pub name: Option<String>,
    pub id: Option<String>,
    pub value: FieldValue,
    /// Input attributes without `type`, `id` and `name`.
    pub input_attributes: Attributes,
    pub label: Option<String>,
    pub hint: Option<String>,
    pub errors: Vec<String>,
    /// Validation state class for the container.
    pub container_state_class: Option<String>,
}

impl FieldContext {
    fn new(field: &Field<'_>, config: FieldConfig) -> Result<Self> {
        let field_type = field.kind.field_type();
        let binding = field.binding.as_ref();

        let value = match (&field.value, binding) {
            (Some(value), _) => value.clone(),
            (None, Some(binding)) => binding.value()?,
            (None, None) => FieldValue::Null,
        };
        if let Some(domain) = field.kind.value_domain() {
            if !value.matches(domain) {
                return Err(WidgetError::ValueTypeMismatch {
                    widget: field_type.widget_name(),
                    domain,
                });
            }
        }

        let name = match &field.name {
            Some(name) => name.clone(),
            None => binding.map(ModelBinding::input_name).transpose()?,
        };
        let id = match &field.id {
            Some(id) => id.clone(),
            None => binding.map(ModelBinding::input_id).transpose()?,
        };

        let attribute = binding.map(ModelBinding::attribute).transpose()?;
        let model_attr = binding.zip(attribute.as_deref());

        let label = field
            .label
            .clone()
            .or_else(|| model_attr.map(|(b, attr)| b.model().label(attr)));
        let hint = match &field.hint {
            Some(hint) => hint.clone(),
            None => model_attr.and_then(|(b, attr)| b.model().hint(attr)),
        };

        let model_errors = binding.map(ModelBinding::errors).transpose()?.flatten();
        let errors = match &field.error {
            Some(Some(message)) => vec![message.clone()],
            Some(None) => Vec::new(),
            None => {
                let mut errors = model_errors.clone().unwrap_or_default();
                if config.show_all_errors != Some(true) {
                    errors.truncate(1);
                }
                errors
            }
        };

        let input_class = match field.kind {
            FieldKind::Button(_) => config.button_class.as_deref(),
            _ => config.input_class.as_deref(),
        };
        let mut input_attributes =
            parts::class_and_attributes(input_class, config.input_attributes.as_ref());

        if field.kind.supports_placeholder() {
            match &field.placeholder {
                Some(placeholder) => input_attributes.set("placeholder", placeholder.as_str()),
                None => {
                    if let Some(placeholder) =
                        model_attr.and_then(|(b, attr)| b.model().placeholder(attr))
                    {
                        input_attributes.set_if_absent("placeholder", placeholder);
                    }
                }
            }
        }
        if field.kind.supports_required()
            && model_attr.is_some_and(|(b, attr)| b.model().is_required(attr))
        {
            input_attributes.set_if_absent("required", true);
        }

        // An explicit message marks the field invalid; `no_error` only hides
        // the message and keeps the model state.
        let validity = match &field.error {
            Some(Some(_)) => Some(false),
            _ => model_errors.as_ref().map(Vec::is_empty),
        };
        let mut container_state_class = None;
        if let Some(valid) = validity {
            let (input_state, container_state) = if valid {
                (&config.input_valid_class, &config.container_valid_class)
            } else {
                (&config.input_invalid_class, &config.container_invalid_class)
            };
            match input_state.as_deref().filter(|c| !c.is_empty()) {
                Some(class) => input_attributes.add_class(class),
                None => container_state_class = container_state.clone(),
            }
        }

        Ok(Self {
            field_type,
            config,
            name,
            id,
            value,
            input_attributes,
            label,
            hint,
            errors,
            container_state_class,
        })
    }

    /// Builds the primary control tag.
    ///
    /// `computed` holds attributes derived by the field kind (type,
    /// value, checked...); explicit input attributes override them
    /// except for `type`, which must agree.
    pub fn input_tag(
        &self,
        tag: &str,
        input_type: Option<&'static str>,
        computed: &Attributes,
    ) -> Result<Tag> {
        if let Some(expected) = input_type {
            self.check_input_type(expected)?;
        }

        let mut tag = Tag::new(tag)?;
        if let Some(input_type) = input_type {
            tag = tag.attr("type", input_type);
        }
        if let Some(id) = &self.id {
            tag = tag.attr("id", id.as_str());
        }
        if let Some(name) = &self.name {
            tag = tag.attr("name", name.as_str());
        }
        Ok(tag.attributes(computed).attributes(&self.input_attributes))
    }

    /// Fails when an explicit `type` attribute differs from `expected`.
    pub fn check_input_type(&self, expected: &'static str) -> Result<()> {
        match self.input_attributes.get_str("type") {
            Some(actual) if actual != expected => Err(WidgetError::InputTypeMismatch {
                widget: self.field_type.widget_name(),
                expected,
                actual: actual.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Hidden input submitted in place of an unchecked or unselected
    /// control. Copies only `disabled` and `form` from the control.
    pub fn hidden_companion(&self, value: &str) -> Result<String> {
        let mut tag = Tag::new("input")?.attr("type", "hidden");
        if let Some(name) = &self.name {
            tag = tag.attr("name", name.strip_suffix("[]").unwrap_or(name));
        }
        tag = tag.attr("value", value);
        for key in ["disabled", "form"] {
            if let Some(attr) = self.input_attributes.get(key) {
                tag = tag.attr(key, attr.clone());
            }
        }
        Ok(tag.render())
    }

    /// Wraps `html` in the configured input container, if any.
    pub fn wrap_input_container(&self, html: &str) -> Result<String> {
        match self.config.input_container_tag.as_deref() {
            Some(tag) => {
                let tag = Tag::new(tag)?
                    .class(self.config.input_container_class.as_deref().unwrap_or(""));
                Ok(format!("{}\n{}\n{}", tag.open(), html, tag.close()))
            }
            None => Ok(html.to_string()),
        }
    }

    /// Label text unless hidden or empty.
    pub fn visible_label(&self) -> Option<&str> {
        if self.config.hide_label == Some(true) {
            return None;
        }
        self.label.as_deref().filter(|label| !label.is_empty())
    }
}

/// Renders fields with a theme registry lent at construction.
#[derive(Debug, Clone)]
pub struct FieldRenderer<'r> {
    registry: &'r ThemeRegistry,
    theme: Option<String>,
    defaults: HashMap<FieldType, FieldConfig>,
}

impl<'r> FieldRenderer<'r> {
    /// Creates a renderer using the registry's default theme.
    pub fn new(registry: &'r ThemeRegistry) -> Self {
        Self {
            registry,
            theme: None,
            defaults: HashMap::new(),
        }
    }

    /// Selects a named theme.
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }

    /// Adds defaults for a field type, above the theme and below call
    /// options.
    #[must_use]
    pub fn with_defaults(mut self, field_type: FieldType, config: FieldConfig) -> Self {
        self.defaults.entry(field_type).or_default().merge(&config);
        self
    }

    /// Resolves the configuration for a field type and call options.
    pub fn resolve_config(&self, field_type: FieldType, call: &FieldConfig) -> Result<FieldConfig> {
        let mut config = builtin_config(field_type);
        let theme_config = self.registry.config_for(self.theme.as_deref(), field_type)?;
        config.merge(&theme_config);
        if let Some(defaults) = self.defaults.get(&field_type) {
            config.merge(defaults);
        }
        config.merge(call);
        Ok(config)
    }

    /// Renders one field.
    pub fn render(&self, field: &Field<'_>) -> Result<String> {
        let field_type = field.field_type();
        debug!(%field_type, theme = ?self.theme, "Rendering field");

        field.kind.validate_options()?;
        let config = self.resolve_config(field_type, &field.config)?;
        let ctx = FieldContext::new(field, config)?;

        let input = field.kind.render_input(&ctx)?;
        if field.kind.is_hidden() {
            return Ok(input);
        }

        let (label, hint, error) = if field.kind.has_parts() {
            let label = if field.kind.has_label_part() {
                let with_for = !matches!(
                    field.kind,
                    FieldKind::CheckboxList(_) | FieldKind::RadioList(_)
                );
                parts::render_label(&ctx, with_for)?
            } else {
                String::new()
            };
            (label, parts::render_hint(&ctx)?, parts::render_error(&ctx)?)
        } else {
            (String::new(), String::new(), String::new())
        };

        let template = ctx.config.template.as_deref().unwrap_or("{input}");
        let content = parts::render_template(
            template,
            &[
                ("{label}", &label),
                ("{input}", &input),
                ("{hint}", &hint),
                ("{error}", &error),
            ],
        );
        parts::wrap_container(&ctx, &content)
    }

    /// Renders an error summary.
    pub fn error_summary(&self, summary: &ErrorSummary<'_>) -> Result<String> {
        let config = self.resolve_config(FieldType::ErrorSummary, summary.config())?;
        summary.render(&config)
    }
}
