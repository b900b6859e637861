//! A clickable control that reports on the async action it triggers.
//!
//! [`AsyncButton`] tracks one phase (`idle`, `pending`, `fulfilled`,
//! `rejected`) and derives its label, class list and disabled flag from it
//! through the pure [`render`] function.  The `ui` module draws the result
//! with ratatui; `app` and `config` back the terminal demo binary.

pub mod app;
pub mod config;
pub mod core;
pub mod ui;

pub use crate::core::{
    handler, render, ActionError, AsyncButton, AsyncPhase, ButtonProps, Children, ClickEvent,
    ClickHandler, ClickSource, Completion, Dispatch, RenderArgs, RenderedButton,
};
