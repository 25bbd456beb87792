//! # Pink
//!
//! A minimal terminal renderer for text widgets.
//!
//! Pink turns a declarative tree of widgets into plain lines of text and
//! redraws them in the terminal, keeping the terminal cursor on the caret of
//! the field being edited.
//!
//! ## Core Concepts
//!
//! - **Flattening**: [`render_to_lines`] reduces any [`Node`] tree to lines
//!   plus an optional caret, measuring text in terminal columns
//! - **Inline redraw**: the [`Presenter`] rewrites only its own block and
//!   leaves scrollback alone, until a frame no longer fits
//! - **Fullscreen fallback**: frames taller than the terminal switch the
//!   presenter to clear-and-redraw, permanently
//! - **Edit events**: input decoding produces [`EditEvent`]s that an
//!   [`Input`] applies to itself
//!
//! ## Example
//!
//! ```rust,ignore
//! use pink::{App, Input, Node, Panel, Text, View};
//!
//! struct Prompt {
//!     input: Input,
//! }
//!
//! impl View for Prompt {
//!     fn compose(&self) -> Node<'_> {
//!         Node::sequence([
//!             Node::from(Panel::new(Text::new("Type something")).title("pink")),
//!             Node::from(&self.input),
//!         ])
//!     }
//! }
//!
//! let mut app = App::new(Prompt { input: Input::new() });
//! app.refresh()?;
//! app.stop()?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod actor;
pub mod app;
pub mod error;
pub mod render;
pub mod terminal;
pub mod text;
pub mod widget;

// Re-exports for convenience
pub use actor::{EditEvent, EditOutcome, InputActor};
pub use app::{App, View};
pub use error::{Error, RenderError};
pub use render::{Mode, Presenter, PresenterConfig};
pub use terminal::{RawModeGuard, TermSize};
pub use text::{char_width, text_width};
pub use widget::{
    render_to_lines, render_to_lines_in, Caret, Input, Node, Panel, RenderResult, Rendered, Text,
    Widget,
};
