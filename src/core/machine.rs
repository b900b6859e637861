//! The async button state holder.
//!
//! An [`AsyncButton`] owns one [`AsyncPhase`] cell and an optional click
//! handler.  Deferred handler results are awaited on a tokio task that writes
//! the outcome back into the cell, unless the button has been destroyed in
//! the meantime.
//!
//! The phase lives in a `watch` channel so hosts can `subscribe()` and redraw
//! on change.  The mounted flag is only ever cleared while holding the
//! channel's lock, and every deferred write re-checks it under that same lock,
//! so nothing lands after `on_destroy`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::action::{ActionError, ClickEvent, ClickHandler, Completion};
use super::phase::AsyncPhase;
use super::props::ButtonProps;
use super::render::{render, RenderedButton};

/// Phase cell shared between the button and its in-flight settlement tasks.
struct PhaseCell {
    phase: watch::Sender<AsyncPhase>,
    mounted: AtomicBool,
}

impl PhaseCell {
    fn new() -> Self {
        let (phase, _) = watch::channel(AsyncPhase::Idle);
        Self {
            phase,
            mounted: AtomicBool::new(true),
        }
    }

    /// Write `next` if still mounted.  Returns whether the write happened.
    fn set(&self, next: AsyncPhase) -> bool {
        self.phase.send_if_modified(|phase| {
            if !self.mounted.load(Ordering::Acquire) {
                return false;
            }
            *phase = next;
            true
        })
    }

    fn unmount(&self) {
        self.phase.send_if_modified(|_| {
            self.mounted.store(false, Ordering::Release);
            false
        });
    }

    fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    fn get(&self) -> AsyncPhase {
        *self.phase.borrow()
    }
}

/// Result of a single [`AsyncButton::trigger`] call.
#[derive(Debug)]
pub enum Dispatch {
    /// No handler configured, or the button is already destroyed.
    Ignored,
    /// The handler finished synchronously; the button is idle again.
    Settled,
    /// The handler returned a deferred result that is being tracked.  The task
    /// resolves to `Err` when the action rejected while the button was alive.
    Tracking(JoinHandle<Result<(), ActionError>>),
    /// The handler returned a deferred result but no tokio runtime was
    /// available to await it.  The result was dropped and the button is idle.
    Unscheduled,
}

impl Dispatch {
    /// Wait for a tracked settlement.  `Ignored` and `Settled` resolve at once.
    pub async fn settled(self) -> Result<(), ActionError> {
        match self {
            Dispatch::Ignored | Dispatch::Settled => Ok(()),
            Dispatch::Unscheduled => Err(ActionError::msg(
                "no tokio runtime to track the click action",
            )),
            Dispatch::Tracking(handle) => match handle.await {
                Ok(result) => result,
                Err(join) => Err(ActionError::msg(format!("click action task failed: {join}"))),
            },
        }
    }

    pub fn is_tracking(&self) -> bool {
        matches!(self, Dispatch::Tracking(_))
    }
}

/// A clickable control with async-operation feedback.
pub struct AsyncButton {
    props: ButtonProps,
    on_click: Option<ClickHandler>,
    cell: Arc<PhaseCell>,
    failures: Option<mpsc::UnboundedSender<ActionError>>,
}

impl AsyncButton {
    /// Build a mounted button in the idle phase.
    pub fn create(props: ButtonProps, on_click: Option<ClickHandler>) -> Self {
        Self {
            props,
            on_click,
            cell: Arc::new(PhaseCell::new()),
            failures: None,
        }
    }

    /// Forward rejections to `tx` after the rejected phase is recorded.
    pub fn report_failures_to(mut self, tx: mpsc::UnboundedSender<ActionError>) -> Self {
        self.failures = Some(tx);
        self
    }

    pub fn props(&self) -> &ButtonProps {
        &self.props
    }

    pub fn phase(&self) -> AsyncPhase {
        self.cell.get()
    }

    pub fn is_mounted(&self) -> bool {
        self.cell.is_mounted()
    }

    /// Receiver that wakes on every phase change.
    pub fn subscribe(&self) -> watch::Receiver<AsyncPhase> {
        self.cell.phase.subscribe()
    }

    pub fn render(&self) -> RenderedButton {
        render(self.phase(), &self.props)
    }

    /// The click entry point.
    ///
    /// Deferred results are awaited on the current tokio runtime.  Outside a
    /// runtime they cannot be tracked: the button returns to idle and
    /// [`Dispatch::Unscheduled`] is returned.
    pub fn trigger(&self, click: ClickEvent) -> Dispatch {
        let Some(on_click) = self.on_click.as_ref() else {
            return Dispatch::Ignored;
        };
        let runtime = Handle::try_current().ok();
        if !self.cell.set(AsyncPhase::Pending) {
            tracing::debug!("click on destroyed async button ignored");
            return Dispatch::Ignored;
        }

        match on_click(click) {
            Completion::Immediate => {
                self.cell.set(AsyncPhase::Idle);
                Dispatch::Settled
            }
            Completion::Deferred(work) => {
                let Some(runtime) = runtime else {
                    tracing::error!("click action returned a deferred result outside a tokio runtime");
                    self.cell.set(AsyncPhase::Idle);
                    return Dispatch::Unscheduled;
                };
                let cell = Arc::clone(&self.cell);
                let failures = self.failures.clone();
                Dispatch::Tracking(runtime.spawn(async move {
                    match work.await {
                        Ok(()) => {
                            if !cell.set(AsyncPhase::Fulfilled) {
                                tracing::debug!("fulfilment after destroy discarded");
                            }
                            Ok(())
                        }
                        Err(err) => {
                            if !cell.set(AsyncPhase::Rejected) {
                                tracing::debug!(error = %err, "rejection after destroy discarded");
                                return Ok(());
                            }
                            tracing::error!(error = %err, "async button action rejected");
                            if let Some(tx) = failures {
                                let _ = tx.send(err.clone());
                            }
                            Err(err)
                        }
                    }
                }))
            }
        }
    }

    /// Drop back to idle.  No-op once destroyed.
    pub fn reset(&self) {
        self.cell.set(AsyncPhase::Idle);
    }

    /// Teardown.  Pending settlements become no-ops.  Idempotent.
    pub fn on_destroy(&self) {
        self.cell.unmount();
    }
}

impl Drop for AsyncButton {
    fn drop(&mut self) {
        self.on_destroy();
    }
}

impl std::fmt::Debug for AsyncButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsyncButton")
            .field("phase", &self.phase())
            .field("mounted", &self.is_mounted())
            .field("has_handler", &self.on_click.is_some())
            .finish()
    }
}
