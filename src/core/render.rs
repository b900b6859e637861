//! Pure render decisions: phase + props → what the clickable element shows.
//!
//! Nothing here touches a terminal; the ratatui widget in `ui::button_widget`
//! only draws the [`RenderedButton`] this module produces.

use std::collections::BTreeMap;

use super::phase::AsyncPhase;
use super::props::{ButtonProps, Children, RenderArgs};

/// Attribute keys the button computes itself, compared case-insensitively.
/// Passthrough values under these keys are overridden.
pub const RESERVED_ATTRIBUTES: &[&str] =
    &["class", "classname", "disabled", "onclick", "children"];

fn is_reserved(key: &str) -> bool {
    RESERVED_ATTRIBUTES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(key))
}

/// Fully resolved output for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedButton {
    pub phase: AsyncPhase,
    /// Space-separated class list: base class plus at most one phase class.
    pub class: String,
    pub disabled: bool,
    pub label: Option<String>,
    pub content: String,
    pub attributes: BTreeMap<String, String>,
}

impl RenderedButton {
    /// Iterate the individual class names.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class.split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }
}

pub fn render(phase: AsyncPhase, props: &ButtonProps) -> RenderedButton {
    let is_pending = phase.is_pending();
    let is_fulfilled = phase.is_fulfilled();
    let is_rejected = phase.is_rejected();

    let label = effective_label(phase, props);

    let content = match &props.children {
        Some(Children::Render(f)) => f(&RenderArgs {
            label: label.as_deref(),
            is_pending,
            is_fulfilled,
            is_rejected,
        }),
        Some(Children::Static(s)) if !s.is_empty() => s.clone(),
        _ => label.clone().unwrap_or_default(),
    };

    let mut attributes = props.attributes.clone();
    attributes.retain(|k, _| !is_reserved(k));

    RenderedButton {
        phase,
        class: effective_class(phase, props),
        disabled: props.disabled || is_pending,
        label,
        content,
        attributes,
    }
}

/// Phase override when set and non-empty, otherwise the default text.
fn effective_label(phase: AsyncPhase, props: &ButtonProps) -> Option<String> {
    let override_text = match phase {
        AsyncPhase::Idle => None,
        AsyncPhase::Pending => props.pending_text.as_deref(),
        AsyncPhase::Fulfilled => props.fulfilled_text.as_deref(),
        AsyncPhase::Rejected => props.rejected_text.as_deref(),
    };
    override_text
        .filter(|s| !s.is_empty())
        .or_else(|| props.text.as_deref().filter(|s| !s.is_empty()))
        .map(str::to_owned)
}

fn effective_class(phase: AsyncPhase, props: &ButtonProps) -> String {
    let phase_class = match phase {
        AsyncPhase::Idle => None,
        AsyncPhase::Pending => Some(props.loading_class.as_str()),
        AsyncPhase::Fulfilled => Some(props.fulfilled_class.as_str()),
        AsyncPhase::Rejected => Some(props.rejected_class.as_str()),
    };
    [props.class_name.as_deref(), phase_class]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::props::{DEFAULT_FULFILLED_CLASS, DEFAULT_LOADING_CLASS, DEFAULT_REJECTED_CLASS};
    use std::sync::{Arc, Mutex};

    fn props() -> ButtonProps {
        ButtonProps::new("Save")
            .pending_text("Saving…")
            .fulfilled_text("Saved")
            .rejected_text("Failed")
            .class_name("btn")
    }

    #[test]
    fn idle_shows_default_label_and_base_class() {
        let out = render(AsyncPhase::Idle, &props());
        assert_eq!(out.label.as_deref(), Some("Save"));
        assert_eq!(out.content, "Save");
        assert_eq!(out.class, "btn");
        assert!(!out.disabled);
    }

    #[test]
    fn pending_disables_and_adds_loading_class() {
        let out = render(AsyncPhase::Pending, &props());
        assert!(out.disabled);
        assert_eq!(out.content, "Saving…");
        assert_eq!(out.class, format!("btn {DEFAULT_LOADING_CLASS}"));
    }

    #[test]
    fn settled_phases_pick_their_class_and_label() {
        let ok = render(AsyncPhase::Fulfilled, &props());
        assert_eq!(ok.content, "Saved");
        assert!(ok.has_class(DEFAULT_FULFILLED_CLASS));
        assert!(!ok.has_class(DEFAULT_LOADING_CLASS));
        assert!(!ok.disabled);

        let err = render(AsyncPhase::Rejected, &props());
        assert_eq!(err.content, "Failed");
        assert!(err.has_class(DEFAULT_REJECTED_CLASS));
        assert_eq!(err.classes().count(), 2);
    }

    #[test]
    fn external_disabled_wins_in_every_phase() {
        let p = props().disabled(true);
        for phase in [
            AsyncPhase::Idle,
            AsyncPhase::Pending,
            AsyncPhase::Fulfilled,
            AsyncPhase::Rejected,
        ] {
            assert!(render(phase, &p).disabled, "{phase}");
        }
    }

    #[test]
    fn missing_or_empty_override_falls_back_to_default() {
        let p = ButtonProps::new("Send").pending_text("");
        assert_eq!(render(AsyncPhase::Pending, &p).content, "Send");
        assert_eq!(render(AsyncPhase::Rejected, &p).content, "Send");
    }

    #[test]
    fn no_text_at_all_renders_empty() {
        let out = render(AsyncPhase::Fulfilled, &ButtonProps::default());
        assert_eq!(out.label, None);
        assert_eq!(out.content, "");
        assert_eq!(out.class, DEFAULT_FULFILLED_CLASS);
    }

    #[test]
    fn empty_phase_class_is_skipped() {
        let p = ButtonProps::new("x").loading_class("");
        assert_eq!(render(AsyncPhase::Pending, &p).class, "");
    }

    #[test]
    fn static_children_replace_label() {
        let p = props().children(Children::Static("★".into()));
        assert_eq!(render(AsyncPhase::Pending, &p).content, "★");

        let empty = props().children(Children::Static(String::new()));
        assert_eq!(render(AsyncPhase::Pending, &empty).content, "Saving…");
    }

    #[test]
    fn render_fn_receives_current_phase_flags() {
        let seen: Arc<Mutex<Vec<(Option<String>, bool, bool, bool)>>> = Arc::default();
        let sink = Arc::clone(&seen);
        let p = props().children(Children::render_with(move |args| {
            sink.lock().unwrap().push((
                args.label.map(str::to_owned),
                args.is_pending,
                args.is_fulfilled,
                args.is_rejected,
            ));
            format!("[{}]", args.label.unwrap_or("-"))
        }));

        assert_eq!(render(AsyncPhase::Rejected, &p).content, "[Failed]");
        assert_eq!(render(AsyncPhase::Idle, &p).content, "[Save]");

        let seen = seen.lock().unwrap();
        assert_eq!(seen[0], (Some("Failed".into()), false, false, true));
        assert_eq!(seen[1], (Some("Save".into()), false, false, false));
    }

    #[test]
    fn passthrough_attributes_survive_but_computed_keys_win() {
        let p = props()
            .attribute("title", "Save draft")
            .attribute("class", "ignored")
            .attribute("disabled", "true");
        let out = render(AsyncPhase::Idle, &p);
        assert_eq!(out.attributes.get("title").map(String::as_str), Some("Save draft"));
        assert!(!out.attributes.contains_key("class"));
        assert!(!out.attributes.contains_key("disabled"));
        assert_eq!(out.class, "btn");
        assert!(!out.disabled);
    }

    #[test]
    fn reserved_keys_match_regardless_of_case() {
        let p = props()
            .attribute("onClick", "handler")
            .attribute("className", "other")
            .attribute("Disabled", "true")
            .attribute("data-id", "7");
        let out = render(AsyncPhase::Idle, &p);
        assert_eq!(out.attributes.len(), 1);
        assert_eq!(out.attributes.get("data-id").map(String::as_str), Some("7"));
        assert_eq!(out.class, "btn");
        assert!(!out.disabled);
    }
}
