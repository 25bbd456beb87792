//! Pink demo: a growing panel above an editable input.
//!
//! Every keystroke redraws the view with one more line in the panel. Once
//! the panel outgrows the terminal the presenter switches to fullscreen.
//! Enter or Esc ends the session. When stdin is not a terminal, the panel
//! grows once per second instead.
//!
//! Run with `RUST_LOG=pink=trace` to see each presented frame.

use crossbeam_channel::{bounded, tick};
use pink::{App, EditOutcome, Input, InputActor, Node, Panel, RawModeGuard, Text, View};
use std::io::{self, IsTerminal};
use std::time::Duration;

/// Frames drawn when stdin is not interactive.
const TICKS: usize = 20;

struct Demo {
    lines: usize,
    input: Input,
}

impl View for Demo {
    fn compose(&self) -> Node<'_> {
        let body: Node = (1..=self.lines)
            .map(|i| Node::from(Text::new(format!("Line {i}"))))
            .collect();
        Node::sequence([
            Node::from(Panel::new(body).title("pink demo").padding(1)),
            Node::from(&self.input),
        ])
    }
}

fn run_interactive(app: &mut App<Demo>) -> Result<Option<String>, pink::Error> {
    let _raw = RawModeGuard::acquire()?;
    let (tx, rx) = bounded(64);
    let actor = InputActor::spawn(tx, Duration::from_millis(50));

    let mut submitted = None;
    for count in 1.. {
        app.view_mut().lines = count;
        app.refresh()?;

        let Ok(event) = rx.recv() else { break };
        match app.view_mut().input.apply(&event) {
            EditOutcome::Continue => {}
            EditOutcome::Submit => {
                submitted = Some(app.view().input.value().to_string());
                break;
            }
            EditOutcome::Cancel => break,
        }
    }

    actor.join();
    Ok(submitted)
}

fn run_ticking(app: &mut App<Demo>) -> Result<Option<String>, pink::Error> {
    let ticker = tick(Duration::from_secs(1));
    for count in 1..=TICKS {
        app.view_mut().lines = count;
        app.refresh()?;
        let _ = ticker.recv();
    }
    Ok(None)
}

fn main() -> Result<(), pink::Error> {
    env_logger::init();

    let mut app = App::new(Demo {
        lines: 1,
        input: Input::new(),
    });

    let outcome = if io::stdin().is_terminal() {
        run_interactive(&mut app)
    } else {
        run_ticking(&mut app)
    };

    app.render(None, true)?;
    app.stop()?;
    println!();

    if let Some(value) = outcome? {
        println!("submitted: {value}");
    }
    Ok(())
}
