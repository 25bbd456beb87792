//! Presenter: redraws a block of lines and places the terminal cursor.
//!
//! Frames are drawn *inline* by default: the presenter remembers where it
//! left the cursor inside its own block, climbs back to the block's top,
//! erases downwards and writes the new frame. Scrollback above the block is
//! left alone.
//!
//! The first time a frame is taller than the terminal, inline drawing can no
//! longer reach the top of the block, so the presenter switches to
//! *fullscreen*: clear screen and scrollback, then draw from the home
//! position. The switch is permanent for that presenter.

use super::config::PresenterConfig;
use crate::terminal::{self, OutputBuffer, TermSize};
use crate::widget::Caret;
use std::io::{self, Stdout, Write};

/// Redraw strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Erase and rewrite only our own block.
    Inline {
        /// Row (from the top of the last block) where the cursor was left.
        /// `None` until the first frame has been drawn.
        anchor_row: Option<usize>,
    },
    /// Clear everything and draw from the top of the screen.
    Fullscreen,
}

impl Mode {
    /// Check if this is the fullscreen strategy.
    pub const fn is_fullscreen(&self) -> bool {
        matches!(self, Self::Fullscreen)
    }
}

/// Stateful redraw driver bound to one terminal writer.
///
/// Calls to [`present`](Self::present) must come from a single owner, in
/// order; the cursor bookkeeping assumes nothing else writes to the
/// terminal in between.
pub struct Presenter<W: Write = Stdout> {
    /// Terminal output.
    out: W,
    /// Configuration.
    config: PresenterConfig,
    /// Frame under construction.
    output: OutputBuffer,
    /// Whether we have hidden the cursor.
    cursor_hidden: bool,
    /// Current redraw strategy.
    mode: Mode,
    /// Frames presented so far.
    frames: u64,
}

impl Presenter<Stdout> {
    /// Create a presenter on stdout with default configuration.
    pub fn new() -> Self {
        Self::with_config(PresenterConfig::default())
    }

    /// Create a presenter on stdout with custom configuration.
    pub fn with_config(config: PresenterConfig) -> Self {
        Self::with_writer(io::stdout(), config)
    }
}

impl Default for Presenter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Presenter<W> {
    /// Create a presenter that writes to `out`.
    pub fn with_writer(out: W, config: PresenterConfig) -> Self {
        Self {
            out,
            config,
            output: OutputBuffer::new(),
            cursor_hidden: false,
            mode: Mode::Inline { anchor_row: None },
            frames: 0,
        }
    }

    /// Current redraw strategy.
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the cursor is currently hidden by us.
    pub const fn is_cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }

    /// Number of frames presented.
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Get a reference to the writer.
    pub const fn writer(&self) -> &W {
        &self.out
    }

    /// Get a mutable reference to the writer.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Terminal size used for layout decisions: the pinned size if the
    /// config has one, else the live terminal size.
    pub fn terminal_size(&self) -> TermSize {
        self.config
            .size_override
            .unwrap_or_else(|| terminal::size_or(self.config.fallback_size))
    }

    /// Draw a frame.
    ///
    /// `caret` is where the cursor should end up, relative to the top of
    /// `lines`; without one the cursor is hidden. With `place_cursor_after`
    /// the caret is ignored for positioning and the cursor goes to the start
    /// of the last line, ready for output that follows the UI.
    ///
    /// The whole frame is written with one `write_all` and flushed.
    ///
    /// # Errors
    ///
    /// Returns the writer's error unchanged if the write or flush fails.
    pub fn present<S: AsRef<str>>(
        &mut self,
        lines: &[S],
        caret: Option<Caret>,
        place_cursor_after: bool,
    ) -> io::Result<()> {
        let mut lines: Vec<&str> = lines.iter().map(AsRef::<str>::as_ref).collect();
        if lines.is_empty() {
            lines.push("");
        }

        let rows = usize::from(self.terminal_size().rows).max(1);
        if !self.mode.is_fullscreen() && lines.len() > rows {
            log::info!(
                "frame of {} lines exceeds {rows} terminal rows, switching to fullscreen",
                lines.len()
            );
            self.mode = Mode::Fullscreen;
        }

        log::trace!(
            "present frame {}: {} lines, caret {caret:?}, after {place_cursor_after}, {:?}",
            self.frames,
            lines.len(),
            self.mode
        );

        self.output.clear();
        self.update_cursor_visibility(caret.is_some());

        let mode = self.mode;
        match mode {
            Mode::Inline { anchor_row } => {
                let anchor = self.draw_inline(&lines, anchor_row, caret, place_cursor_after);
                self.mode = Mode::Inline {
                    anchor_row: Some(anchor),
                };
            }
            Mode::Fullscreen => self.draw_fullscreen(&lines, rows, caret, place_cursor_after),
        }

        self.frames += 1;
        self.output.flush_to(&mut self.out)
    }

    /// Restore the cursor if we hid it.
    ///
    /// # Errors
    ///
    /// Returns the writer's error unchanged.
    pub fn close(&mut self) -> io::Result<()> {
        if self.cursor_hidden {
            self.out.write_all(b"\x1b[?25h")?;
            self.out.flush()?;
            self.cursor_hidden = false;
        }
        Ok(())
    }

    fn update_cursor_visibility(&mut self, has_caret: bool) {
        if !has_caret && !self.cursor_hidden {
            self.output.cursor_hide();
            self.cursor_hidden = true;
        } else if has_caret && self.cursor_hidden {
            self.output.cursor_show();
            self.cursor_hidden = false;
        }
    }

    /// Rewrite our block in place. Returns the row the cursor was left on.
    fn draw_inline(
        &mut self,
        lines: &[&str],
        anchor_row: Option<usize>,
        caret: Option<Caret>,
        place_cursor_after: bool,
    ) -> usize {
        if let Some(anchor) = anchor_row {
            self.output.cursor_up(anchor);
            self.output.cursor_column(0);
            self.output.erase_below();
        }
        self.output.write_lines(lines);

        let last = lines.len() - 1;
        let target = match caret {
            Some(c) if !place_cursor_after => c,
            _ => Caret::new(last, 0),
        };

        // The cursor sits on the last written line.
        if target.row < last {
            self.output.cursor_up(last - target.row);
        } else {
            self.output.cursor_down(target.row - last);
        }
        self.output.cursor_column(target.col);
        target.row
    }

    /// Clear everything and draw from the home position.
    fn draw_fullscreen(
        &mut self,
        lines: &[&str],
        rows: usize,
        caret: Option<Caret>,
        place_cursor_after: bool,
    ) {
        self.output.clear_terminal();
        self.output.write_lines(lines);

        match caret {
            Some(c) if !place_cursor_after => {
                // Only the last `rows` lines are on screen.
                let visible_start = lines.len().saturating_sub(rows);
                let row = c.row.saturating_sub(visible_start).min(rows - 1);
                self.output.cursor_to(row, c.col);
            }
            _ if place_cursor_after => {
                let row = if lines.len() >= rows {
                    rows - 1
                } else {
                    lines.len() - 1
                };
                self.output.cursor_to(row, 0);
            }
            _ => {}
        }
    }
}

impl<W: Write> Drop for Presenter<W> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            log::warn!("failed to restore cursor visibility: {e}");
        }
    }
}
