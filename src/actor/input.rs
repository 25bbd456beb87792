//! Input Actor: Dedicated thread for decoding terminal key events.
//!
//! This actor runs in its own thread and uses crossterm's event polling
//! to turn key presses into [`EditEvent`]s without blocking the
//! application's render loop.

use super::messages::EditEvent;
use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Input actor that polls terminal events.
pub struct InputActor {
    /// Handle to the input thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputActor {
    /// Spawn the input actor thread.
    ///
    /// # Arguments
    ///
    /// * `sender` - Channel to send edit events to the main loop.
    /// * `poll_timeout` - How long to wait for events before checking shutdown.
    pub fn spawn(sender: Sender<EditEvent>, poll_timeout: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("pink-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout);
            })
            .expect("Failed to spawn input thread");

        Self {
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signal the input thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the input thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main input polling loop.
    fn run_loop(sender: &Sender<EditEvent>, shutdown: &AtomicBool, poll_timeout: Duration) {
        while !shutdown.load(Ordering::Relaxed) {
            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if let Some(edit) = convert_event(event) {
                            if sender.send(edit).is_err() {
                                // Receiver dropped, exit
                                break;
                            }
                        }
                    }
                    Err(e) => log::debug!("failed to read terminal event: {e}"),
                },
                Ok(false) => {}
                Err(e) => {
                    log::debug!("terminal event poll failed: {e}");
                    break;
                }
            }
        }
    }
}

impl Drop for InputActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Convert a crossterm event into an edit event.
///
/// Returns `None` for events the edit session doesn't care about.
pub fn convert_event(event: Event) -> Option<EditEvent> {
    match event {
        Event::Key(key) => convert_key(key),
        Event::Paste(text) => Some(EditEvent::Insert(text)),
        other => {
            log::trace!("ignoring terminal event {other:?}");
            None
        }
    }
}

/// Convert a key press into an edit event.
pub fn convert_key(key: KeyEvent) -> Option<EditEvent> {
    // Only process key press events (not release or repeat)
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    Some(match key.code {
        KeyCode::Char('c') if control => EditEvent::Cancel,
        KeyCode::Char('h') if control => EditEvent::Backspace,
        KeyCode::Char(_) if control || key.modifiers.contains(KeyModifiers::ALT) => return None,
        KeyCode::Char(c) => EditEvent::Insert(c.to_string()),
        KeyCode::Backspace => EditEvent::Backspace,
        KeyCode::Delete => EditEvent::Delete,
        KeyCode::Left => EditEvent::Left,
        KeyCode::Right => EditEvent::Right,
        KeyCode::Home => EditEvent::Home,
        KeyCode::End => EditEvent::End,
        KeyCode::Enter => EditEvent::Submit,
        KeyCode::Esc => EditEvent::Cancel,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_printable_chars_insert() {
        let event = press(KeyCode::Char('x'), KeyModifiers::NONE);
        assert_eq!(convert_event(event), Some(EditEvent::Insert("x".into())));

        let event = press(KeyCode::Char('X'), KeyModifiers::SHIFT);
        assert_eq!(convert_event(event), Some(EditEvent::Insert("X".into())));
    }

    #[test]
    fn test_navigation_and_session_keys() {
        assert_eq!(convert_event(press(KeyCode::Left, KeyModifiers::NONE)), Some(EditEvent::Left));
        assert_eq!(convert_event(press(KeyCode::Right, KeyModifiers::NONE)), Some(EditEvent::Right));
        assert_eq!(convert_event(press(KeyCode::Backspace, KeyModifiers::NONE)), Some(EditEvent::Backspace));
        assert_eq!(convert_event(press(KeyCode::Enter, KeyModifiers::NONE)), Some(EditEvent::Submit));
        assert_eq!(convert_event(press(KeyCode::Esc, KeyModifiers::NONE)), Some(EditEvent::Cancel));
        assert_eq!(
            convert_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(EditEvent::Cancel)
        );
    }

    #[test]
    fn test_ignored_events() {
        assert_eq!(convert_event(press(KeyCode::Char('a'), KeyModifiers::CONTROL)), None);
        assert_eq!(convert_event(press(KeyCode::F(1), KeyModifiers::NONE)), None);
        assert_eq!(convert_event(Event::FocusGained), None);

        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(convert_event(release), None);
    }

    #[test]
    fn test_paste_inserts_text() {
        assert_eq!(
            convert_event(Event::Paste("hello".into())),
            Some(EditEvent::Insert("hello".into()))
        );
    }
}
