//! # oxide-widgets
//!
//! Themeable HTML form field widgets bound to form models, with
//! Bootstrap 5 presets.
//!
//! This crate provides:
//! - Field widgets for every HTML input kind, textareas, checkboxes,
//!   radios, lists, selects and buttons
//! - Form models deriving names, ids, values, labels and errors
//! - Layered configuration through named themes
//! - An error summary across several models
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_widgets::{Field, FieldRenderer, FormData, ThemeRegistry};
//!
//! let registry = ThemeRegistry::bootstrap5();
//! let renderer = FieldRenderer::new(&registry);
//!
//! let form = FormData::new("LoginForm").attribute("login", "admin");
//! let html = renderer.render(&Field::text().bind(&form, "login")).unwrap();
//!
//! assert!(html.starts_with(r#"<div class="mb-3">"#));
//! assert!(html.contains(r#"<label class="form-label" for="loginform-login">Login</label>"#));
//! assert!(html.contains(r#"name="LoginForm[login]" value="admin""#));
//! ```
//!
//! ## Themes
//!
//! Themes are loaded once and lent to renderers. Options set on a field
//! always win over the theme.
//!
//! ```rust
//! use oxide_widgets::{Field, FieldRenderer, FormData, ThemeRegistry};
//!
//! let registry = ThemeRegistry::from_json(
//!     r#"{"defaultTheme": "plain", "themes": {"plain": {"containerClass": "field"}}}"#,
//! )
//! .unwrap();
//! let form = FormData::new("LoginForm").attribute("login", "");
//! let renderer = FieldRenderer::new(&registry);
//!
//! let themed = renderer.render(&Field::text().bind(&form, "login")).unwrap();
//! assert!(themed.starts_with(r#"<div class="field">"#));
//!
//! let field = Field::text().bind(&form, "login").container_class("custom");
//! assert!(renderer.render(&field).unwrap().starts_with(r#"<div class="custom">"#));
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use oxide_widgets::validation::RequiredValidator;
//! use oxide_widgets::{ErrorSummary, Field, FieldRenderer, FormData, FormModel, ThemeRegistry};
//!
//! let registry = ThemeRegistry::bootstrap5();
//! let renderer = FieldRenderer::new(&registry);
//!
//! let mut form = FormData::new("LoginForm")
//!     .attribute("login", "")
//!     .rule("login", RequiredValidator::new());
//! assert!(!form.validate());
//!
//! let html = renderer.render(&Field::text().bind(&form, "login")).unwrap();
//! assert!(html.contains("is-invalid"));
//! assert!(html.contains(r#"<div class="invalid-feedback">Value cannot be blank.</div>"#));
//!
//! let summary = ErrorSummary::new([&form as &dyn FormModel]);
//! assert!(renderer.error_summary(&summary).unwrap().contains("<li>Value cannot be blank.</li>"));
//! ```

pub mod error;
pub mod field;
pub mod html;
pub mod model;
pub mod summary;
pub mod theme;
pub mod validation;
pub mod value;

pub use error::{Result, ValueDomain, WidgetError};
pub use field::{
    ButtonOptions, ButtonType, CheckOptions, Field, FieldKind, FieldRenderer, InputOptions,
    InputType, ListOptions, SelectItem, SelectOptions, TextareaOptions,
};
pub use html::{html_escape, AttrValue, Attributes, Tag};
pub use model::{FormData, FormErrors, FormModel, ModelBinding};
pub use summary::ErrorSummary;
pub use theme::{FieldConfig, FieldType, Theme, ThemeRegistry};
pub use value::FieldValue;
