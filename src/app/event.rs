//! Event abstraction for the demo loop.
//!
//! Terminal input, button phase changes and surfaced action failures all
//! arrive on one channel so the main loop can `recv()` in a single place.
//! Each source runs in its own background task.

use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind, MouseEvent};
use tokio::sync::{mpsc, watch};

use crate::core::{ActionError, AsyncPhase};

/// High-level events consumed by the demo.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    /// The button moved to a new phase; redraw.
    Phase(AsyncPhase),
    /// A click action rejected while the button was alive.
    ActionFailed(ActionError),
}

pub type EventSender = mpsc::UnboundedSender<AppEvent>;

/// Spawns a task that polls the terminal and forwards key presses, mouse
/// events and resizes.  Sends `Tick` when nothing happens within `tick_rate`
/// so the pending spinner keeps turning.
pub fn spawn_terminal_reader(tx: EventSender, tick_rate: Duration) {
    tokio::task::spawn_blocking(move || loop {
        let has_event = event::poll(tick_rate).unwrap_or(false);
        let app_event = if has_event {
            match event::read() {
                Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => AppEvent::Key(k),
                Ok(CtEvent::Mouse(m)) => AppEvent::Mouse(m),
                Ok(CtEvent::Resize(w, h)) => AppEvent::Resize(w, h),
                _ => continue,
            }
        } else {
            AppEvent::Tick
        };
        if tx.send(app_event).is_err() {
            break; // receiver dropped
        }
    });
}

/// Forwards every phase change of a button.  Ends when the button is gone.
pub fn spawn_phase_forwarder(tx: EventSender, mut phases: watch::Receiver<AsyncPhase>) {
    tokio::spawn(async move {
        while phases.changed().await.is_ok() {
            let phase = *phases.borrow_and_update();
            if tx.send(AppEvent::Phase(phase)).is_err() {
                break;
            }
        }
    });
}

/// Forwards failures reported by a button's `report_failures_to` channel.
pub fn spawn_failure_forwarder(tx: EventSender, mut failures: mpsc::UnboundedReceiver<ActionError>) {
    tokio::spawn(async move {
        while let Some(err) = failures.recv().await {
            if tx.send(AppEvent::ActionFailed(err)).is_err() {
                break;
            }
        }
    });
}
