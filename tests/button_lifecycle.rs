use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_button::app::demo::{demo_handler, Outcome};
use async_button::{
    handler, ActionError, AsyncButton, AsyncPhase, ButtonProps, Children, ClickEvent, Completion,
    Dispatch,
};
use tokio::sync::{mpsc, oneshot};

fn props() -> ButtonProps {
    ButtonProps::new("Publish")
        .pending_text("Publishing")
        .fulfilled_text("Published")
        .rejected_text("Retry?")
}

#[test]
fn fresh_button_shows_default_label_and_is_enabled() {
    let button = AsyncButton::create(props(), None);
    let out = button.render();
    assert_eq!(out.content, "Publish");
    assert!(!out.disabled);
    assert_eq!(out.phase, AsyncPhase::Idle);
}

#[tokio::test]
async fn full_cycle_with_render_function_children() {
    let (tx, rx) = oneshot::channel::<Result<(), ActionError>>();
    let rx = Arc::new(Mutex::new(Some(rx)));
    let on_click = handler(move |_| {
        let rx = rx.lock().unwrap().take();
        Completion::deferred(async move {
            match rx {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(ActionError::msg("dropped"))),
                None => Ok(()),
            }
        })
    });
    let props = props().children(Children::render_with(|args| {
        format!(
            "{}{}",
            args.label.unwrap_or_default(),
            if args.is_pending { "…" } else { "" }
        )
    }));
    let button = AsyncButton::create(props, Some(on_click));

    let dispatch = button.trigger(ClickEvent::programmatic());
    let pending = button.render();
    assert_eq!(pending.content, "Publishing…");
    assert!(pending.disabled);

    tx.send(Ok(())).unwrap();
    dispatch.settled().await.unwrap();
    let done = button.render();
    assert_eq!(done.content, "Published");
    assert!(!done.disabled);
    assert!(done.has_class("AsyncButton--fulfilled"));
}

#[tokio::test]
async fn demo_failure_surfaces_through_every_channel() {
    let (tx, mut failures) = mpsc::unbounded_channel();
    let button = AsyncButton::create(props(), Some(demo_handler(Outcome::Fail, Duration::ZERO)))
        .report_failures_to(tx);

    let err = button
        .trigger(ClickEvent::programmatic())
        .settled()
        .await
        .unwrap_err();
    assert!(err.to_string().contains("failed"));
    assert_eq!(button.phase(), AsyncPhase::Rejected);
    assert_eq!(button.render().content, "Retry?");
    assert!(failures.recv().await.is_some());
}

#[tokio::test]
async fn destroyed_button_never_moves() {
    let button = AsyncButton::create(
        props(),
        Some(demo_handler(Outcome::Succeed, Duration::from_millis(20))),
    );
    let dispatch = button.trigger(ClickEvent::programmatic());
    assert!(matches!(dispatch, Dispatch::Tracking(_)));
    button.on_destroy();

    dispatch.settled().await.unwrap();
    assert_eq!(button.phase(), AsyncPhase::Pending);
    assert!(!button.is_mounted());
}

#[test]
fn immediate_action_leaves_no_pending_state() {
    let button = AsyncButton::create(
        props(),
        Some(demo_handler(Outcome::Immediate, Duration::ZERO)),
    );
    assert!(matches!(button.trigger(ClickEvent::programmatic()), Dispatch::Settled));
    assert_eq!(button.render().content, "Publish");
    assert!(!button.render().disabled);
}
