//! Input handling: maps demo events to button calls and state mutations.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::core::{AsyncPhase, ClickEvent, ClickSource, Dispatch};

use super::event::AppEvent;
use super::state::AppState;

/// Process one event from the demo loop.
pub fn handle_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Key(k) => handle_key(state, k),
        AppEvent::Mouse(m) => handle_mouse(state, m),
        AppEvent::Resize(_, _) => {}
        AppEvent::Tick => state.tick = state.tick.wrapping_add(1),
        AppEvent::Phase(phase) => {
            tracing::debug!(%phase, "button phase changed");
            // Synchronous clicks pass through a transient pending phase;
            // only a pending phase that is still current clears the status.
            if phase == AsyncPhase::Pending && state.button.phase().is_pending() {
                state.status_message = None;
            }
        }
        AppEvent::ActionFailed(err) => {
            state.status_message = Some(format!("action failed: {err}"));
        }
    }
}

/// Process a key event.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ctrl+c always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Enter | KeyCode::Char(' ') => click(state, ClickSource::Key),
        KeyCode::Char('r') => {
            state.button.reset();
            state.status_message = None;
        }
        _ => {}
    }
}

/// Process a mouse event.  Only left presses inside the button count.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if !state
        .button_area
        .contains(Position::new(mouse.column, mouse.row))
    {
        return;
    }
    click(
        state,
        ClickSource::Mouse {
            column: mouse.column,
            row: mouse.row,
        },
    );
}

/// Deliver a click unless the rendered button is disabled.
fn click(state: &mut AppState, source: ClickSource) {
    if state.button.render().disabled {
        return;
    }
    state.clicks += 1;
    // Failures come back through the button's failure channel; the task
    // handle is not needed here.
    match state.button.trigger(ClickEvent::new(source)) {
        Dispatch::Ignored => tracing::debug!("click ignored"),
        Dispatch::Settled => state.status_message = Some("done (synchronous)".into()),
        Dispatch::Unscheduled => {
            state.status_message = Some("action could not be scheduled".into());
        }
        Dispatch::Tracking(_) => {}
    }
}
