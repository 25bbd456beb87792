//! Node tree and flattening.
//!
//! A [`Node`] is anything that can appear in a view: built-in widgets, raw
//! text, an ordered sequence of nodes, or a custom [`Widget`].
//! [`render_to_lines`] reduces any node to a single [`RenderResult`].

use super::panel::Panel;
use super::text::Text;
use super::text_input::Input;
use super::traits::{Caret, RenderResult, Widget};
use crate::error::RenderError;
use crate::terminal::{self, TermSize};
use crate::text::split_lines;
use std::borrow::Cow;
use std::fmt;

/// A renderable view tree.
///
/// Trees are cheap to rebuild every frame. Stateful widgets such as
/// [`Input`] are borrowed, so their state outlives the tree.
pub enum Node<'a> {
    /// Static text widget.
    Text(Text),
    /// Raw text, split on line breaks.
    Raw(Cow<'a, str>),
    /// Boxed child with optional title.
    Panel(Box<Panel<'a>>),
    /// Editable text field.
    Input(&'a Input),
    /// Children stacked top to bottom.
    Sequence(Vec<Node<'a>>),
    /// A custom widget.
    Widget(Box<dyn Widget + 'a>),
}

impl<'a> Node<'a> {
    /// Wrap a custom widget.
    pub fn widget(widget: impl Widget + 'a) -> Self {
        Self::Widget(Box::new(widget))
    }

    /// Stack nodes top to bottom.
    pub fn sequence(children: impl IntoIterator<Item = Node<'a>>) -> Self {
        Self::Sequence(children.into_iter().collect())
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Raw(raw) => f.debug_tuple("Raw").field(raw).finish(),
            Self::Panel(panel) => f.debug_tuple("Panel").field(panel).finish(),
            Self::Input(input) => f.debug_tuple("Input").field(input).finish(),
            Self::Sequence(children) => f.debug_tuple("Sequence").field(children).finish(),
            Self::Widget(_) => f.write_str("Widget(..)"),
        }
    }
}

impl From<Text> for Node<'_> {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a str> for Node<'a> {
    fn from(raw: &'a str) -> Self {
        Self::Raw(Cow::Borrowed(raw))
    }
}

impl From<String> for Node<'_> {
    fn from(raw: String) -> Self {
        Self::Raw(Cow::Owned(raw))
    }
}

impl<'a> From<Panel<'a>> for Node<'a> {
    fn from(panel: Panel<'a>) -> Self {
        Self::Panel(Box::new(panel))
    }
}

impl<'a> From<&'a Input> for Node<'a> {
    fn from(input: &'a Input) -> Self {
        Self::Input(input)
    }
}

impl<'a> From<Vec<Node<'a>>> for Node<'a> {
    fn from(children: Vec<Node<'a>>) -> Self {
        Self::Sequence(children)
    }
}

impl<'a> FromIterator<Node<'a>> for Node<'a> {
    fn from_iter<I: IntoIterator<Item = Node<'a>>>(iter: I) -> Self {
        Self::sequence(iter)
    }
}

/// Flatten a node tree into lines plus an optional caret.
///
/// In a sequence, each child's lines are appended in order. The caret comes
/// from the *last* child that reports one, shifted down by the number of
/// lines above that child; carets from earlier children are discarded.
///
/// Inputs without a fixed width take theirs from the current terminal size.
///
/// # Errors
///
/// Returns [`RenderError::Unrenderable`] if any node in the tree cannot be
/// rendered. Nothing partial is returned.
pub fn render_to_lines(node: &Node<'_>) -> Result<RenderResult, RenderError> {
    render_to_lines_in(node, terminal::size())
}

/// Flatten a node tree as if the terminal had the given size.
///
/// Same as [`render_to_lines`], but inputs without a fixed width are laid
/// out against `size` instead of querying the terminal.
///
/// # Errors
///
/// Returns [`RenderError::Unrenderable`] if any node in the tree cannot be
/// rendered.
pub fn render_to_lines_in(node: &Node<'_>, size: TermSize) -> Result<RenderResult, RenderError> {
    match node {
        Node::Text(text) => Ok(Text::render(text)),
        Node::Raw(raw) => Ok(RenderResult::from_lines(split_lines(raw))),
        Node::Panel(panel) => Panel::render_in(panel, size),
        Node::Input(input) => Ok(Input::render_in(input, size)),
        Node::Widget(widget) => widget.render().map(super::Rendered::into_result),
        Node::Sequence(children) => {
            let mut lines = Vec::new();
            let mut caret = None;
            for child in children {
                let result = render_to_lines_in(child, size)?;
                let base_row = lines.len();
                if let Some(c) = result.caret {
                    caret = Some(Caret::new(base_row + c.row, c.col));
                }
                lines.extend(result.lines);
            }
            Ok(RenderResult { lines, caret })
        }
    }
}
