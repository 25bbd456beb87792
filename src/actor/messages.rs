//! Message types between the input decoder and the application.

/// A discrete edit intent decoded from terminal input.
///
/// The decoder decides what bytes mean; widgets only ever see these.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EditEvent {
    /// Insert text at the cursor (a typed character or a paste).
    Insert(String),
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character at the cursor.
    Delete,
    /// Move the cursor one character left.
    Left,
    /// Move the cursor one character right.
    Right,
    /// Move the cursor to the start.
    Home,
    /// Move the cursor to the end.
    End,
    /// Finish the edit session, keeping the value.
    Submit,
    /// Abandon the edit session.
    Cancel,
}

/// What the edit session should do after an event was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOutcome {
    /// Keep editing.
    Continue,
    /// The user submitted the value.
    Submit,
    /// The user cancelled.
    Cancel,
}
