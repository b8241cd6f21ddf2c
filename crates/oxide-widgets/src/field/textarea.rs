//! `<textarea>` field.

use super::FieldContext;
use crate::error::{Result, WidgetError};
use crate::html::Attributes;

/// Options of a textarea field.
#[derive(Debug, Clone, Default)]
pub struct TextareaOptions {
    rows: Option<u32>,
    cols: Option<u32>,
    wrap: Option<String>,
    dirname: Option<String>,
}

impl TextareaOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = Some(rows);
        self
    }

    #[must_use]
    pub fn cols(mut self, cols: u32) -> Self {
        self.cols = Some(cols);
        self
    }

    /// Wrapping mode, `hard` or `soft`.
    #[must_use]
    pub fn wrap(mut self, wrap: impl Into<String>) -> Self {
        self.wrap = Some(wrap.into());
        self
    }

    #[must_use]
    pub fn dirname(mut self, dirname: impl Into<String>) -> Self {
        self.dirname = Some(dirname.into());
        self
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(wrap) = &self.wrap {
            if wrap != "hard" && wrap != "soft" {
                return Err(WidgetError::InvalidWrap(wrap.clone()));
            }
        }
        if self.dirname.as_deref().is_some_and(|d| d.trim().is_empty()) {
            return Err(WidgetError::EmptyDirname);
        }
        Ok(())
    }

    pub(crate) fn render(&self, ctx: &FieldContext) -> Result<String> {
        let mut computed = Attributes::new();
        if let Some(rows) = self.rows {
            computed.set("rows", rows.to_string());
        }
        if let Some(cols) = self.cols {
            computed.set("cols", cols.to_string());
        }
        if let Some(wrap) = &self.wrap {
            computed.set("wrap", wrap.as_str());
        }
        if let Some(dirname) = &self.dirname {
            computed.set("dirname", dirname.as_str());
        }
        let content = ctx.value.as_attr_string().unwrap_or_default();
        Ok(ctx
            .input_tag("textarea", None, &computed)?
            .text(&content)
            .render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_validation() {
        assert!(TextareaOptions::new().wrap("hard").validate().is_ok());
        assert!(TextareaOptions::new().wrap("soft").validate().is_ok());
        assert!(matches!(
            TextareaOptions::new().wrap("off").validate(),
            Err(WidgetError::InvalidWrap(w)) if w == "off"
        ));
        assert!(matches!(
            TextareaOptions::new().dirname("").validate(),
            Err(WidgetError::EmptyDirname)
        ));
    }
}
