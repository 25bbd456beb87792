//! Terminal size lookup with a fixed fallback.

use crossterm::terminal;

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermSize {
    /// Width in columns.
    pub cols: u16,
    /// Height in rows.
    pub rows: u16,
}

impl TermSize {
    /// Size assumed when the OS can't tell us (not a tty, query failed).
    pub const FALLBACK: Self = Self::new(80, 24);

    /// Create a new size.
    #[inline]
    pub const fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }
}

impl Default for TermSize {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Query the terminal size, using `fallback` if the query fails.
///
/// A reported size with zero rows or columns is treated as a failure.
pub fn size_or(fallback: TermSize) -> TermSize {
    match terminal::size() {
        Ok((cols, rows)) if cols > 0 && rows > 0 => TermSize::new(cols, rows),
        Ok((cols, rows)) => {
            log::debug!("terminal reported {cols}x{rows}, using fallback {fallback:?}");
            fallback
        }
        Err(e) => {
            log::debug!("terminal size query failed ({e}), using fallback {fallback:?}");
            fallback
        }
    }
}

/// Query the terminal size, falling back to 80x24.
#[inline]
pub fn size() -> TermSize {
    size_or(TermSize::FALLBACK)
}
