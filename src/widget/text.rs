//! Text widget: a static block of text.

use super::traits::{RenderResult, Rendered, Widget};
use crate::error::RenderError;
use crate::text::split_lines;

/// Static text. Each line break starts a new line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Text {
    value: String,
}

impl Text {
    /// Create a text widget.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Get the text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Render to lines. Never has a caret.
    pub fn render(&self) -> RenderResult {
        RenderResult::from_lines(split_lines(&self.value))
    }
}

impl Widget for Text {
    fn render(&self) -> Result<Rendered, RenderError> {
        Ok(Self::render(self).into())
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Text {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
