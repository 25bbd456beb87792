//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.

use std::io::Write;

/// Pre-allocated buffer for building one frame of terminal output.
///
/// All output is accumulated here, then flushed in a single `write_all()`
/// so the terminal never shows a half-drawn frame.
#[derive(Debug)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical terminal (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write lines separated by `\r\n`, leaving the cursor after the last line.
    pub fn write_lines<S: AsRef<str>>(&mut self, lines: &[S]) {
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                self.data.extend_from_slice(b"\r\n");
            }
            self.write_str(line.as_ref());
        }
    }

    /// Move cursor to a 0-based (row, col) screen position.
    #[inline]
    pub fn cursor_to(&mut self, row: usize, col: usize) {
        // CSI row ; col H
        let _ = write!(self.data, "\x1b[{};{}H", row + 1, col + 1);
    }

    /// Move cursor up `n` rows. No-op for zero.
    #[inline]
    pub fn cursor_up(&mut self, n: usize) {
        if n > 0 {
            let _ = write!(self.data, "\x1b[{n}A");
        }
    }

    /// Move cursor down `n` rows. No-op for zero.
    #[inline]
    pub fn cursor_down(&mut self, n: usize) {
        if n > 0 {
            let _ = write!(self.data, "\x1b[{n}B");
        }
    }

    /// Move cursor to a 0-based column on the current row.
    #[inline]
    pub fn cursor_column(&mut self, col: usize) {
        let _ = write!(self.data, "\x1b[{}G", col + 1);
    }

    /// Hide cursor.
    #[inline]
    pub fn cursor_hide(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25l");
    }

    /// Show cursor.
    #[inline]
    pub fn cursor_show(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25h");
    }

    /// Erase from the cursor to the end of the screen.
    #[inline]
    pub fn erase_below(&mut self) {
        self.data.extend_from_slice(b"\x1b[0J");
    }

    /// Clear the screen and the scrollback, then home the cursor.
    #[inline]
    pub fn clear_terminal(&mut self) {
        self.data.extend_from_slice(b"\x1b[2J\x1b[3J\x1b[H");
    }

    /// Flush to a writer in a single write.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}
