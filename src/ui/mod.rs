//! UI / rendering layer: everything that touches Ratatui widgets.
//!
//! This layer takes a [`RenderedButton`](crate::core::RenderedButton) and
//! turns it into cells on the terminal.  No button state is mutated here.

pub mod button_widget;
pub mod layout;
pub mod spinner;
pub mod theme;
