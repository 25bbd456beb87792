//! Scoped raw-mode acquisition.

use crossterm::terminal;
use std::io;

/// Keeps the terminal in raw mode for as long as it is alive.
///
/// Raw mode is disabled again when the guard is dropped, including on early
/// returns and panics that unwind through the owner.
#[derive(Debug)]
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Enable raw mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal refuses raw mode (e.g. stdin is not a tty).
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        log::debug!("raw mode enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("failed to disable raw mode: {e}");
        } else {
            log::debug!("raw mode disabled");
        }
    }
}
