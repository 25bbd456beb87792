//! Panel widget: draws an ASCII box around a child, with an optional title.
//!
//! ```text
//! + T -+
//! |    |
//! | a  |
//! | bb |
//! |    |
//! +----+
//! ```

use super::node::{render_to_lines_in, Node};
use super::traits::{RenderResult, Rendered, Widget};
use crate::error::RenderError;
use crate::terminal::{self, TermSize};
use crate::text::{pad_to_width, text_width};

/// A bordered box around a child node.
#[derive(Debug)]
pub struct Panel<'a> {
    child: Node<'a>,
    title: Option<String>,
    padding: usize,
}

impl<'a> Panel<'a> {
    /// Create an untitled panel with no padding.
    pub fn new(child: impl Into<Node<'a>>) -> Self {
        Self {
            child: child.into(),
            title: None,
            padding: 0,
        }
    }

    /// Set the title shown in the top border.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the blank space between the border and the child, on every side.
    #[must_use]
    pub const fn padding(mut self, padding: usize) -> Self {
        self.padding = padding;
        self
    }

    /// Render the child and box it.
    ///
    /// The child's caret, if any, is shifted past the border and padding.
    pub fn render(&self) -> Result<RenderResult, RenderError> {
        self.render_in(terminal::size())
    }

    /// Render against a known terminal size instead of querying it.
    pub fn render_in(&self, size: TermSize) -> Result<RenderResult, RenderError> {
        let child = render_to_lines_in(&self.child, size)?;
        let pad = self.padding;

        let inner_width = child.lines.iter().map(|l| text_width(l)).max().unwrap_or(0);
        let label = match self.title.as_deref() {
            Some(title) if !title.is_empty() => format!(" {title} "),
            _ => String::new(),
        };
        let content_width = (inner_width + pad * 2).max(text_width(&label));

        let top_bar = fill_to_width(&label, content_width, '-');
        let bottom_bar = "-".repeat(content_width);
        let empty_row = format!("|{}|", " ".repeat(content_width));
        let side = " ".repeat(pad);

        let mut lines = Vec::with_capacity(child.lines.len() + pad * 2 + 2);
        lines.push(format!("+{top_bar}+"));
        lines.extend(std::iter::repeat_n(empty_row.clone(), pad));
        for line in &child.lines {
            let body = format!("{side}{}{side}", pad_to_width(line, inner_width));
            lines.push(format!("|{}|", pad_to_width(&body, content_width)));
        }
        lines.extend(std::iter::repeat_n(empty_row, pad));
        lines.push(format!("+{bottom_bar}+"));

        let caret = child.caret.map(|c| c.offset(1 + pad, 1 + pad));
        Ok(RenderResult { lines, caret })
    }
}

impl Widget for Panel<'_> {
    fn render(&self) -> Result<Rendered, RenderError> {
        Panel::render(self).map(Rendered::from)
    }
}

/// Pad `s` to `width` columns with `fill`.
fn fill_to_width(s: &str, width: usize, fill: char) -> String {
    let extra = width.saturating_sub(text_width(s));
    let mut out = String::from(s);
    out.extend(std::iter::repeat_n(fill, extra));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{Caret, Input, Text};

    #[test]
    fn test_titled_panel_with_padding() {
        let panel = Panel::new(vec![Node::from(Text::new("a")), Node::from(Text::new("bb"))])
            .title("T")
            .padding(1);
        let result = panel.render().unwrap();
        assert_eq!(
            result.lines,
            vec!["+ T -+", "|    |", "| a  |", "| bb |", "|    |", "+----+"]
        );
        assert_eq!(result.caret, None);
    }

    #[test]
    fn test_untitled_panel() {
        let result = Panel::new("hi").render().unwrap();
        assert_eq!(result.lines, vec!["+--+", "|hi|", "+--+"]);
    }

    #[test]
    fn test_title_wider_than_content() {
        let result = Panel::new("x").title("long").render().unwrap();
        assert_eq!(result.lines, vec!["+ long +", "|x     |", "+------+"]);
    }

    #[test]
    fn test_empty_title_draws_plain_border() {
        let result = Panel::new("ab").title("").render().unwrap();
        assert_eq!(result.lines[0], "+--+");
    }

    #[test]
    fn test_wide_chars_use_visual_width() {
        let result = Panel::new(vec![Node::from("日本"), Node::from("a")]).render().unwrap();
        assert_eq!(result.lines, vec!["+----+", "|日本|", "|a   |", "+----+"]);
    }

    #[test]
    fn test_caret_offset_by_border_and_padding() {
        let input = Input::new().width(6).bordered(false).inner_padding(0);
        let result = Panel::new(&input).padding(2).render().unwrap();
        assert_eq!(result.caret, Some(Caret::new(3, 3)));
        assert_eq!(result.lines[3], format!("|{}|", " ".repeat(10)));
    }

    #[test]
    fn test_empty_child_sequence() {
        let result = Panel::new(Vec::<Node>::new()).render().unwrap();
        assert_eq!(result.lines, vec!["++", "++"]);
    }
}
