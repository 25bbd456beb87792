//! Presentation: turning rendered lines into terminal output.
//!
//! The [`Presenter`] owns all per-terminal state (cursor visibility, redraw
//! mode, where the cursor was left). Create one per terminal; independent
//! presenters never share state.

mod config;
mod presenter;

pub use config::PresenterConfig;
pub use presenter::{Mode, Presenter};
