//! Demo host: state, event plumbing, input handling and the demo action.

pub mod demo;
pub mod event;
pub mod handler;
pub mod state;
