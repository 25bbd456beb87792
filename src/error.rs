//! Error types.
//!
//! Flattening has a single failure mode ([`RenderError::Unrenderable`]).
//! Terminal writes surface as plain [`std::io::Error`] from the presenter;
//! [`Error`] joins both for the application shell.

use std::io;
use thiserror::Error;

/// Failure while flattening a node tree into lines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The node has no way to render itself.
    #[error("cannot render node: {node}")]
    Unrenderable {
        /// Type name of the offending node.
        node: String,
    },
}

impl RenderError {
    /// Build an [`RenderError::Unrenderable`] for the given node name.
    pub fn unrenderable(node: impl Into<String>) -> Self {
        Self::Unrenderable { node: node.into() }
    }
}

/// Error returned by [`App`](crate::App) operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The view tree could not be flattened.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Writing to the terminal failed.
    #[error("terminal write failed: {0}")]
    Io(#[from] io::Error),
}
