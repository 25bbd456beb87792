//! Visual width of characters and strings in terminal columns.

use unicode_normalization::char::canonical_combining_class;
use unicode_width::UnicodeWidthChar;

/// Display width of a single character in terminal cells.
///
/// - `0` for combining marks (nonzero canonical combining class)
/// - `2` for East Asian Wide and Fullwidth characters
/// - `1` for everything else, including control and format characters
#[inline]
pub fn char_width(c: char) -> usize {
    if canonical_combining_class(c) != 0 {
        return 0;
    }
    match c.width() {
        Some(w) if w >= 2 => 2,
        _ => 1,
    }
}

/// Total display width of a string: the sum of [`char_width`] over its characters.
#[inline]
pub fn text_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

/// Pad `s` with trailing spaces until it is `width` columns wide.
///
/// Strings that are already at least `width` columns are returned unchanged;
/// this never truncates.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let extra = width.saturating_sub(text_width(s));
    let mut out = String::with_capacity(s.len() + extra);
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', extra));
    out
}

/// Split text into lines on `\n`, `\r\n` or a lone `\r`.
///
/// Text with `n` line breaks yields `n + 1` lines, so the empty string is a
/// single empty line and a trailing break produces a trailing empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            '\n' => lines.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    lines.push(current);
    lines
}
