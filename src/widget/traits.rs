//! Widget trait and render output types.

use crate::error::RenderError;

/// A logical cursor position inside a render result (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Caret {
    /// Line index.
    pub row: usize,
    /// Visual column on that line.
    pub col: usize,
}

impl Caret {
    /// Create a new caret.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shift the caret down and right.
    #[inline]
    #[must_use]
    pub const fn offset(self, rows: usize, cols: usize) -> Self {
        Self::new(self.row + rows, self.col + cols)
    }
}

/// Lines of text plus an optional caret pointing into them.
///
/// Lines never contain line breaks. When present, `caret.row < lines.len()`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderResult {
    /// Rendered lines, top to bottom.
    pub lines: Vec<String>,
    /// Where the terminal cursor belongs, if anywhere.
    pub caret: Option<Caret>,
}

impl RenderResult {
    /// A result without a caret.
    pub const fn from_lines(lines: Vec<String>) -> Self {
        Self { lines, caret: None }
    }

    /// A result with a caret.
    pub const fn with_caret(lines: Vec<String>, caret: Caret) -> Self {
        Self {
            lines,
            caret: Some(caret),
        }
    }
}

/// What a widget's render produced: bare lines or a full result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Lines only; the widget has no caret.
    Lines(Vec<String>),
    /// Lines with an optional caret.
    Result(RenderResult),
}

impl Rendered {
    /// Normalize into a [`RenderResult`].
    pub fn into_result(self) -> RenderResult {
        match self {
            Self::Lines(lines) => RenderResult::from_lines(lines),
            Self::Result(result) => result,
        }
    }
}

impl From<Vec<String>> for Rendered {
    fn from(lines: Vec<String>) -> Self {
        Self::Lines(lines)
    }
}

impl From<RenderResult> for Rendered {
    fn from(result: RenderResult) -> Self {
        Self::Result(result)
    }
}

/// A UI component that can render itself to lines.
///
/// Rendering takes `&self`: widgets must not change their own state while
/// being drawn. A widget that doesn't override `render` cannot be drawn, and
/// flattening a tree that contains one fails with
/// [`RenderError::Unrenderable`].
pub trait Widget {
    /// Render this widget.
    fn render(&self) -> Result<Rendered, RenderError> {
        Err(RenderError::unrenderable(std::any::type_name::<Self>()))
    }
}

impl<T: Widget + ?Sized> Widget for &T {
    fn render(&self) -> Result<Rendered, RenderError> {
        (**self).render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    impl Widget for Marker {}

    #[test]
    fn test_default_render_is_unrenderable() {
        let err = Marker.render().unwrap_err();
        let RenderError::Unrenderable { node } = err;
        assert!(node.ends_with("Marker"));
    }

    #[test]
    fn test_rendered_lines_have_no_caret() {
        let rendered = Rendered::from(vec!["a".to_string()]);
        assert_eq!(rendered.into_result(), RenderResult::from_lines(vec!["a".into()]));
    }

    #[test]
    fn test_caret_offset() {
        assert_eq!(Caret::new(1, 2).offset(3, 4), Caret::new(4, 6));
    }
}
