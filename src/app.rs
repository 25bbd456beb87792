//! Application shell: compose a view, flatten it, present it.

use crate::error::Error;
use crate::render::Presenter;
use crate::widget::{render_to_lines_in, Caret, Node};
use std::io::{self, Stdout, Write};

/// Something that can describe its UI as a node tree.
///
/// `compose` is called once per frame; build the tree fresh each time and
/// borrow long-lived state (like an [`Input`](crate::Input)) from `self`.
pub trait View {
    /// Build the tree for the current frame.
    fn compose(&self) -> Node<'_>;
}

/// Drives a [`View`] through a [`Presenter`].
pub struct App<V, W: Write = Stdout> {
    view: V,
    presenter: Presenter<W>,
}

impl<V: View> App<V, Stdout> {
    /// Create an app drawing to stdout.
    pub fn new(view: V) -> Self {
        Self::with_presenter(view, Presenter::new())
    }
}

impl<V: View, W: Write> App<V, W> {
    /// Create an app with a custom presenter.
    pub const fn with_presenter(view: V, presenter: Presenter<W>) -> Self {
        Self { view, presenter }
    }

    /// Get the view.
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Get the view mutably, e.g. to apply edit events between frames.
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Get the presenter.
    pub const fn presenter(&self) -> &Presenter<W> {
        &self.presenter
    }

    /// Get the presenter mutably.
    pub fn presenter_mut(&mut self) -> &mut Presenter<W> {
        &mut self.presenter
    }

    /// Compose, flatten and present one frame.
    ///
    /// `caret` overrides the caret found in the tree. The tree is flattened
    /// completely before anything is written, so a render error leaves the
    /// terminal untouched. Inputs without a fixed width are laid out against
    /// the presenter's terminal size.
    pub fn render(&mut self, caret: Option<Caret>, place_cursor_after: bool) -> Result<(), Error> {
        let size = self.presenter.terminal_size();
        let result = render_to_lines_in(&self.view.compose(), size)?;
        let caret = caret.or(result.caret);
        self.presenter.present(&result.lines, caret, place_cursor_after)?;
        Ok(())
    }

    /// Present a frame using the tree's own caret.
    pub fn refresh(&mut self) -> Result<(), Error> {
        self.render(None, false)
    }

    /// Finish drawing: restore the cursor.
    pub fn stop(&mut self) -> io::Result<()> {
        self.presenter.close()
    }
}
