//! Click handler calling convention.
//!
//! A handler receives the [`ClickEvent`] that triggered it and answers with a
//! [`Completion`]: either the work is already done, or here is a future that
//! settles later.  Only the deferred variant produces fulfilled / rejected
//! feedback.

use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};

/// Where a click came from.  Forwarded to the handler untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickSource {
    /// Mouse press at terminal cell `(column, row)`.
    Mouse { column: u16, row: u16 },
    /// Keyboard activation (Enter / Space).
    Key,
    /// Triggered from code rather than user input.
    Programmatic,
}

/// Arguments forwarded from the click entry point to the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    pub source: ClickSource,
}

impl ClickEvent {
    pub fn new(source: ClickSource) -> Self {
        Self { source }
    }

    pub fn programmatic() -> Self {
        Self::new(ClickSource::Programmatic)
    }
}

/// Failure reported by a deferred click result.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ActionError {
    #[error("{0}")]
    Failed(String),
    #[error("{0:#}")]
    Source(Arc<anyhow::Error>),
}

impl ActionError {
    pub fn msg(message: impl Into<String>) -> Self {
        ActionError::Failed(message.into())
    }
}

impl From<anyhow::Error> for ActionError {
    fn from(err: anyhow::Error) -> Self {
        ActionError::Source(Arc::new(err))
    }
}

/// What a click handler hands back.
pub enum Completion {
    /// Synchronous work (or nothing at all).  The button drops straight back
    /// to idle.
    Immediate,
    /// Work that settles later.  The button stays pending until it does.
    Deferred(BoxFuture<'static, Result<(), ActionError>>),
}

impl Completion {
    pub fn deferred<F>(future: F) -> Self
    where
        F: std::future::Future<Output = Result<(), ActionError>> + Send + 'static,
    {
        Completion::Deferred(future.boxed())
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Completion::Deferred(_))
    }
}

impl From<()> for Completion {
    fn from(_: ()) -> Self {
        Completion::Immediate
    }
}

impl std::fmt::Debug for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Completion::Immediate => f.write_str("Immediate"),
            Completion::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// Shared click handler.
pub type ClickHandler = Arc<dyn Fn(ClickEvent) -> Completion + Send + Sync>;

/// Wrap a closure as a [`ClickHandler`].
pub fn handler<F>(f: F) -> ClickHandler
where
    F: Fn(ClickEvent) -> Completion + Send + Sync + 'static,
{
    Arc::new(f)
}
