//! Presenter configuration.

use crate::terminal::TermSize;

/// Configuration for the [`Presenter`](super::Presenter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresenterConfig {
    /// Size assumed when the terminal can't be queried.
    pub fallback_size: TermSize,
    /// Use this size instead of querying the terminal.
    pub size_override: Option<TermSize>,
}

impl Default for PresenterConfig {
    fn default() -> Self {
        Self {
            fallback_size: TermSize::FALLBACK,
            size_override: None,
        }
    }
}

impl PresenterConfig {
    /// Pin the terminal size instead of querying it.
    ///
    /// Useful when output isn't a tty, and in tests.
    pub const fn fixed(size: TermSize) -> Self {
        Self {
            fallback_size: size,
            size_override: Some(size),
        }
    }
}
