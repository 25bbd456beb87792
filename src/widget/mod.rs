//! Widgets and tree flattening.
//!
//! Views are trees of [`Node`]s. Built-in widgets cover static text
//! ([`Text`]), boxes ([`Panel`]) and a single-line editor ([`Input`]);
//! anything else can implement [`Widget`]. [`render_to_lines`] flattens a
//! tree into a [`RenderResult`]: plain lines plus the caret of the field
//! being edited, ready for the [`Presenter`](crate::Presenter).
//!
//! # Example
//!
//! ```rust,ignore
//! use pink::{render_to_lines, Input, Node, Panel, Text};
//!
//! let input = Input::new().width(20);
//! let tree = Node::sequence([
//!     Node::from(Panel::new(Text::new("Hello")).title("greeting")),
//!     Node::from(&input),
//! ]);
//! let result = render_to_lines(&tree)?;
//! ```

mod node;
mod panel;
mod text;
mod text_input;
mod traits;

pub use node::{render_to_lines, render_to_lines_in, Node};
pub use panel::Panel;
pub use text::Text;
pub use text_input::Input;
pub use traits::{Caret, RenderResult, Rendered, Widget};
