//! The action the demo button runs when clicked.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use clap::ValueEnum;

use crate::core::{handler, ActionError, ClickHandler, ClickSource, Completion};

/// What the demo action does on each click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Outcome {
    /// Wait, then succeed.
    #[default]
    Succeed,
    /// Wait, then fail.
    Fail,
    /// Alternate between success and failure, starting with success.
    Alternate,
    /// Return synchronously; the button drops straight back to idle.
    Immediate,
}

/// Build the click handler for `outcome`, settling after `delay`.
pub fn demo_handler(outcome: Outcome, delay: Duration) -> ClickHandler {
    let clicks = Arc::new(AtomicU64::new(0));
    handler(move |click| {
        let n = clicks.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::debug!(click = n, source = ?click.source, ?outcome, "demo action started");

        let fail = match outcome {
            Outcome::Immediate => return Completion::Immediate,
            Outcome::Succeed => false,
            Outcome::Fail => true,
            Outcome::Alternate => n % 2 == 0,
        };
        let origin = match click.source {
            ClickSource::Mouse { column, row } => format!("mouse at {column},{row}"),
            ClickSource::Key => "keyboard".to_string(),
            ClickSource::Programmatic => "code".to_string(),
        };

        Completion::deferred(async move {
            tokio::time::sleep(delay).await;
            if fail {
                Err(ActionError::msg(format!("click #{n} ({origin}) failed")))
            } else {
                Ok(())
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ClickEvent;

    async fn run(h: &ClickHandler) -> Option<Result<(), ActionError>> {
        match h(ClickEvent::programmatic()) {
            Completion::Immediate => None,
            Completion::Deferred(fut) => Some(fut.await),
        }
    }

    #[tokio::test]
    async fn alternate_starts_with_success() {
        let h = demo_handler(Outcome::Alternate, Duration::ZERO);
        assert!(run(&h).await.unwrap().is_ok());
        let err = run(&h).await.unwrap().unwrap_err();
        assert!(err.to_string().contains("click #2"));
        assert!(run(&h).await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn immediate_never_defers() {
        let h = demo_handler(Outcome::Immediate, Duration::from_secs(5));
        assert!(run(&h).await.is_none());
    }

    #[tokio::test]
    async fn fail_always_fails() {
        let h = demo_handler(Outcome::Fail, Duration::ZERO);
        assert!(run(&h).await.unwrap().is_err());
        assert!(run(&h).await.unwrap().is_err());
    }
}
