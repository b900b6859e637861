//! Central demo state.
//!
//! All mutable state lives here so rendering is a pure function over
//! `&AppState` and event handling works on `&mut AppState`.

use ratatui::layout::Rect;

use crate::core::AsyncButton;

/// Top-level demo state.
#[derive(Debug)]
pub struct AppState {
    /// The button under demonstration.
    pub button: AsyncButton,
    /// Where the button was last drawn, for mouse hit-testing.
    pub button_area: Rect,
    /// Monotonic tick counter (drives the spinner).
    pub tick: u64,
    /// Number of clicks delivered to the button.
    pub clicks: u64,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    /// Controls the main event loop.
    pub should_quit: bool,
}

impl AppState {
    pub fn new(button: AsyncButton) -> Self {
        Self {
            button,
            button_area: Rect::default(),
            tick: 0,
            clicks: 0,
            status_message: None,
            should_quit: false,
        }
    }

    /// Status-bar text: the last message, or the key hint plus phase.
    pub fn status_line(&self) -> String {
        match &self.status_message {
            Some(msg) => msg.clone(),
            None => format!(
                "Enter/Space/click: run | r: reset | q: quit | phase: {} | clicks: {}",
                self.button.phase(),
                self.clicks
            ),
        }
    }
}
