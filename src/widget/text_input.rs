//! Input Widget: Single-line editable text field with caret.
//!
//! The cursor is a character index into the value. When the value is wider
//! than the field, the leftmost characters scroll out of view so the end of
//! the text stays visible.

use super::traits::{Caret, RenderResult, Rendered, Widget};
use crate::actor::{EditEvent, EditOutcome};
use crate::error::RenderError;
use crate::terminal::{self, TermSize};
use crate::text::{char_width, pad_to_width};

/// A single-line text input with cursor and editing support.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    /// Current text content.
    value: String,
    /// Cursor position in characters, `0..=value.chars().count()`.
    cursor: usize,
    /// Fixed field width; follows the terminal when unset.
    width: Option<usize>,
    /// Draw a box around the field.
    bordered: bool,
    /// Spaces on each side of the text, inside the border.
    inner_padding: usize,
}

impl Default for Input {
    fn default() -> Self {
        Self::new()
    }
}

impl Input {
    /// Create an empty, bordered input that spans the terminal width.
    pub const fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            width: None,
            bordered: true,
            inner_padding: 1,
        }
    }

    /// Fix the field width in columns (excluding the border).
    #[must_use]
    pub const fn width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Enable or disable the border.
    #[must_use]
    pub const fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }

    /// Set the spaces kept on each side of the text.
    #[must_use]
    pub const fn inner_padding(mut self, padding: usize) -> Self {
        self.inner_padding = padding;
        self
    }

    /// Get the current text content.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the cursor position in characters.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the content, moving the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.char_len();
    }

    /// Clear the content.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Insert text at the cursor and move the cursor past it.
    pub fn insert(&mut self, text: &str) {
        let at = self.byte_index(self.cursor);
        self.value.insert_str(at, text);
        self.cursor += text.chars().count();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_index(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
        }
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Move cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Apply a decoded edit event.
    ///
    /// Returns whether the edit session should go on.
    pub fn apply(&mut self, event: &EditEvent) -> EditOutcome {
        match event {
            EditEvent::Insert(text) => self.insert(text),
            EditEvent::Backspace => self.backspace(),
            EditEvent::Delete => self.delete(),
            EditEvent::Left => self.move_left(),
            EditEvent::Right => self.move_right(),
            EditEvent::Home => self.move_home(),
            EditEvent::End => self.move_end(),
            EditEvent::Submit => return EditOutcome::Submit,
            EditEvent::Cancel => return EditOutcome::Cancel,
        }
        EditOutcome::Continue
    }

    /// Render using the current terminal width when no width is fixed.
    pub fn render(&self) -> RenderResult {
        if self.width.is_some() {
            self.render_in(TermSize::FALLBACK)
        } else {
            self.render_in(terminal::size())
        }
    }

    /// Render as if the terminal had the given size.
    ///
    /// The size only matters when no fixed width is set.
    pub fn render_in(&self, size: TermSize) -> RenderResult {
        let target_width = self.width.unwrap_or_else(|| {
            let border = if self.bordered { 2 } else { 0 };
            usize::from(size.cols).saturating_sub(border).max(1)
        });
        let pad = self.inner_padding;
        let inner_width = target_width.saturating_sub(pad * 2).max(1);

        let (visible, cursor_width) = self.visible_window(inner_width);
        let side = " ".repeat(pad);
        let content = format!("{side}{visible}{side}");
        let column = cursor_width + pad;

        if self.bordered {
            let bar = format!("+{}+", "-".repeat(target_width));
            RenderResult::with_caret(
                vec![bar.clone(), format!("|{content}|"), bar],
                Caret::new(1, 1 + column),
            )
        } else {
            RenderResult::with_caret(vec![content], Caret::new(0, column))
        }
    }

    /// The part of the value that fits in `inner_width` columns, padded to
    /// exactly that width, and the cursor's visual column inside it.
    fn visible_window(&self, inner_width: usize) -> (String, usize) {
        let chars: Vec<char> = self.value.chars().collect();
        let widths: Vec<usize> = chars.iter().map(|&c| char_width(c)).collect();

        let mut total: usize = widths.iter().sum();
        let mut cursor_width: usize = widths[..self.cursor.min(widths.len())].iter().sum();
        let mut start = 0;

        // Scroll left until the rest fits.
        while total > inner_width {
            total -= widths[start];
            cursor_width = cursor_width.saturating_sub(widths[start]);
            start += 1;
        }

        let visible: String = chars[start..].iter().collect();
        (pad_to_width(&visible, inner_width), cursor_width)
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte offset of the character at `index` (or the end of the value).
    fn byte_index(&self, index: usize) -> usize {
        self.value
            .char_indices()
            .nth(index)
            .map_or(self.value.len(), |(i, _)| i)
    }
}

impl Widget for Input {
    fn render(&self) -> Result<Rendered, RenderError> {
        Ok(Input::render(self).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::text_width;
    use proptest::prelude::*;

    fn input_with(value: &str, cursor: usize) -> Input {
        let mut input = Input::new();
        input.set_value(value);
        input.cursor = cursor;
        input
    }

    #[test]
    fn test_input_basic() {
        let mut input = Input::new();
        input.insert("H");
        input.insert("i");
        assert_eq!(input.value(), "Hi");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_insert_in_middle_counts_chars() {
        let mut input = input_with("ad", 1);
        input.insert("日c");
        assert_eq!(input.value(), "a日cd");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_input_backspace() {
        let mut input = Input::new();
        input.set_value("Hello");
        input.backspace();
        assert_eq!(input.value(), "Hell");
        assert_eq!(input.cursor(), 4);

        let mut input = input_with("日本", 1);
        input.backspace();
        assert_eq!(input.value(), "本");
        assert_eq!(input.cursor(), 0);

        input.backspace();
        assert_eq!(input.value(), "本");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_input_cursor_movement() {
        let mut input = Input::new();
        input.set_value("Hello");

        input.move_left();
        assert_eq!(input.cursor(), 4);

        input.move_home();
        input.move_left();
        assert_eq!(input.cursor(), 0);

        input.move_end();
        input.move_right();
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = input_with("abc", 1);
        input.delete();
        assert_eq!(input.value(), "ac");
        assert_eq!(input.cursor(), 1);

        input.move_end();
        input.delete();
        assert_eq!(input.value(), "ac");
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let events = [
            EditEvent::Left,
            EditEvent::Backspace,
            EditEvent::Insert("héllo".into()),
            EditEvent::Right,
            EditEvent::Right,
            EditEvent::Left,
            EditEvent::Left,
            EditEvent::Delete,
            EditEvent::Backspace,
            EditEvent::Home,
            EditEvent::Backspace,
            EditEvent::Insert("日本".into()),
            EditEvent::End,
            EditEvent::Right,
            EditEvent::Backspace,
            EditEvent::Backspace,
            EditEvent::Backspace,
            EditEvent::Backspace,
            EditEvent::Backspace,
            EditEvent::Backspace,
            EditEvent::Backspace,
            EditEvent::Left,
        ];
        let mut input = Input::new();
        for event in &events {
            assert_eq!(input.apply(event), EditOutcome::Continue);
            assert!(input.cursor() <= input.value().chars().count());
        }
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_submit_and_cancel() {
        let mut input = input_with("x", 1);
        assert_eq!(input.apply(&EditEvent::Submit), EditOutcome::Submit);
        assert_eq!(input.apply(&EditEvent::Cancel), EditOutcome::Cancel);
        assert_eq!(input.value(), "x");
    }

    #[test]
    fn test_render_bordered_fixed_width() {
        let mut input = Input::new().width(10).bordered(true).inner_padding(1);
        input.insert("hello");
        let result = input.render();
        assert_eq!(result.lines, vec!["+----------+", "| hello    |", "+----------+"]);
        assert_eq!(result.caret, Some(Caret::new(1, 7)));
    }

    #[test]
    fn test_render_trims_from_the_left() {
        let mut input = Input::new().width(5).bordered(false).inner_padding(0);
        input.insert("hello world");
        assert_eq!(input.cursor(), 11);
        let result = input.render();
        assert_eq!(result.lines, vec!["world"]);
        assert_eq!(result.caret, Some(Caret::new(0, 5)));
    }

    #[test]
    fn test_render_trim_with_cursor_scrolled_out() {
        let mut input = Input::new().width(7).inner_padding(1);
        input.insert("hello world");
        input.move_home();
        let result = input.render();
        assert_eq!(result.lines[1], "| world |");
        // Cursor was in the dropped prefix; clamp to the window start.
        assert_eq!(result.caret, Some(Caret::new(1, 2)));
    }

    #[test]
    fn test_render_wide_chars() {
        let mut input = Input::new().width(5).bordered(false).inner_padding(0);
        input.insert("日本語");
        let result = input.render();
        // 6 columns don't fit in 5: the first ideograph scrolls out.
        assert_eq!(result.lines, vec!["本語 "]);
        assert_eq!(result.caret, Some(Caret::new(0, 4)));
    }

    #[test]
    fn test_render_unbordered_keeps_padding() {
        let mut input = Input::new().width(6).bordered(false).inner_padding(1);
        input.insert("ab");
        input.move_left();
        let result = input.render();
        assert_eq!(result.lines, vec![" ab   "]);
        assert_eq!(result.caret, Some(Caret::new(0, 2)));
    }

    #[test]
    fn test_render_follows_terminal_width() {
        let input = Input::new();
        let result = input.render_in(TermSize::new(20, 10));
        assert_eq!(result.lines[0].len(), 20);
        assert_eq!(result.lines[1], format!("|{}|", " ".repeat(18)));
        assert_eq!(result.caret, Some(Caret::new(1, 2)));

        let unbordered = Input::new().bordered(false).render_in(TermSize::new(20, 10));
        assert_eq!(unbordered.lines[0].len(), 20);
    }

    #[test]
    fn test_padding_wider_than_field() {
        let input = Input::new().width(2).bordered(false).inner_padding(3);
        let result = input.render();
        // Inner width never drops below one column.
        assert_eq!(result.lines, vec!["       "]);
        assert_eq!(result.caret, Some(Caret::new(0, 3)));
    }

    fn edit_event() -> impl Strategy<Value = EditEvent> {
        prop_oneof![
            "[a-zé日本🎉\u{301}]{0,4}".prop_map(EditEvent::Insert),
            Just(EditEvent::Backspace),
            Just(EditEvent::Delete),
            Just(EditEvent::Left),
            Just(EditEvent::Right),
            Just(EditEvent::Home),
            Just(EditEvent::End),
        ]
    }

    proptest! {
        #[test]
        fn prop_cursor_stays_in_bounds(events in prop::collection::vec(edit_event(), 0..40)) {
            let mut input = Input::new().width(10);
            for event in &events {
                prop_assert_eq!(input.apply(event), EditOutcome::Continue);
                prop_assert!(input.cursor() <= input.value().chars().count());

                let result = input.render();
                prop_assert_eq!(result.lines.len(), 3);
                for line in &result.lines {
                    prop_assert_eq!(text_width(line), 12);
                }
                let caret = result.caret.unwrap();
                prop_assert_eq!(caret.row, 1);
                prop_assert!((2..=10).contains(&caret.col));
            }
        }
    }
}
