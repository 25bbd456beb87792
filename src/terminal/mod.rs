//! Terminal plumbing: output buffering, size queries and raw mode.

mod output;
mod raw;
mod size;

pub use output::OutputBuffer;
pub use raw::RawModeGuard;
pub use size::{size, size_or, TermSize};
