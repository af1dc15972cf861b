//! Async event loop wiring terminal input to a listener.

mod terminal;

use std::time::Instant;

use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind,
};
use futures::StreamExt;
use log::{debug, trace};
use scrolldom::{Element, convert_mouse_event, hit_test_scrollable};
use tokio::time::sleep_until;

use crate::listener::ScrollListener;

pub use terminal::TerminalGuard;

/// Pump terminal input through the listener until the user quits
/// (`q` or `Ctrl+C`).
///
/// The loop waits on the next input event or the listener's pending
/// scroll-end deadline, whichever comes first.
pub async fn run(root: &Element, listener: &mut ScrollListener) -> std::io::Result<()> {
    let _guard = TerminalGuard::new()?;
    let mut events = EventStream::new();
    debug!("Event loop started for #{}", listener.element_id());

    loop {
        let deadline = listener.next_deadline();

        tokio::select! {
            maybe_event = events.next() => {
                let Some(event) = maybe_event else { break };
                let event = event?;
                if should_quit(&event) {
                    debug!("Quit requested");
                    break;
                }
                handle_event(event, root, listener);
            }
            _ = wait_for(deadline) => {
                listener.poll(Instant::now());
            }
        }
    }

    Ok(())
}

/// Sleep until the deadline, or forever when there is none (the select
/// arm then never wins).
async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline.into()).await,
        None => std::future::pending().await,
    }
}

fn handle_event(event: CrosstermEvent, root: &Element, listener: &mut ScrollListener) {
    let CrosstermEvent::Mouse(mouse) = event else {
        trace!("Ignoring event: {event:?}");
        return;
    };

    // Wheel input targets the scrollable under the cursor, the way
    // scroll events reach the element being scrolled.
    if matches!(
        mouse.kind,
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown
    ) {
        let over = hit_test_scrollable(root, f64::from(mouse.column), f64::from(mouse.row));
        if over.as_deref() != Some(listener.element_id()) {
            return;
        }
    }

    let now = Instant::now();
    for raw in convert_mouse_event(mouse, root) {
        listener.on_event(&raw, now);
    }
}

fn should_quit(event: &CrosstermEvent) -> bool {
    let CrosstermEvent::Key(key) = event else {
        return false;
    };
    if key.kind != KeyEventKind::Press {
        return false;
    }
    key.code == KeyCode::Char('q')
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
}
