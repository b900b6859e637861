//! Core of the async button – phase state machine and render decisions.
//!
//! Nothing in this module depends on any TUI or rendering crate.
//! Every type is `Send + Sync` so buttons can be shared across async tasks.

pub mod action;
pub mod machine;
pub mod phase;
pub mod props;
pub mod render;

pub use action::{handler, ActionError, ClickEvent, ClickHandler, ClickSource, Completion};
pub use machine::{AsyncButton, Dispatch};
pub use phase::AsyncPhase;
pub use props::{ButtonProps, Children, RenderArgs};
pub use render::{render, RenderedButton};
