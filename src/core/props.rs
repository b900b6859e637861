//! Configuration surface of an async button.
//!
//! Props are supplied by the host and never mutated by the button.  Builder
//! methods follow the `TreeWidget::new(..).dir_sizes(..)` style used across
//! the UI layer.

use std::collections::BTreeMap;
use std::sync::Arc;

pub const DEFAULT_LOADING_CLASS: &str = "AsyncButton--loading";
pub const DEFAULT_FULFILLED_CLASS: &str = "AsyncButton--fulfilled";
pub const DEFAULT_REJECTED_CLASS: &str = "AsyncButton--rejected";

/// What a render-function child sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderArgs<'a> {
    /// The effective label for the current phase, if any text is configured.
    pub label: Option<&'a str>,
    pub is_pending: bool,
    pub is_fulfilled: bool,
    pub is_rejected: bool,
}

pub type RenderFn = Arc<dyn Fn(&RenderArgs<'_>) -> String + Send + Sync>;

/// Explicit content for the button.
#[derive(Clone)]
pub enum Children {
    Static(String),
    Render(RenderFn),
}

impl Children {
    pub fn render_with<F>(f: F) -> Self
    where
        F: Fn(&RenderArgs<'_>) -> String + Send + Sync + 'static,
    {
        Children::Render(Arc::new(f))
    }
}

impl std::fmt::Debug for Children {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Children::Static(s) => f.debug_tuple("Static").field(s).finish(),
            Children::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// Display options for one button.
#[derive(Debug, Clone)]
pub struct ButtonProps {
    pub children: Option<Children>,
    pub class_name: Option<String>,
    pub loading_class: String,
    pub fulfilled_class: String,
    pub rejected_class: String,
    pub disabled: bool,
    /// Default label, shown when the current phase has no override.
    pub text: Option<String>,
    pub pending_text: Option<String>,
    pub fulfilled_text: Option<String>,
    pub rejected_text: Option<String>,
    /// Anything else, forwarded verbatim to the rendered element.
    pub attributes: BTreeMap<String, String>,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            children: None,
            class_name: None,
            loading_class: DEFAULT_LOADING_CLASS.to_string(),
            fulfilled_class: DEFAULT_FULFILLED_CLASS.to_string(),
            rejected_class: DEFAULT_REJECTED_CLASS.to_string(),
            disabled: false,
            text: None,
            pending_text: None,
            fulfilled_text: None,
            rejected_text: None,
            attributes: BTreeMap::new(),
        }
    }
}

impl ButtonProps {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn pending_text(mut self, text: impl Into<String>) -> Self {
        self.pending_text = Some(text.into());
        self
    }

    pub fn fulfilled_text(mut self, text: impl Into<String>) -> Self {
        self.fulfilled_text = Some(text.into());
        self
    }

    pub fn rejected_text(mut self, text: impl Into<String>) -> Self {
        self.rejected_text = Some(text.into());
        self
    }

    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    pub fn loading_class(mut self, class: impl Into<String>) -> Self {
        self.loading_class = class.into();
        self
    }

    pub fn fulfilled_class(mut self, class: impl Into<String>) -> Self {
        self.fulfilled_class = class.into();
        self
    }

    pub fn rejected_class(mut self, class: impl Into<String>) -> Self {
        self.rejected_class = class.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn children(mut self, children: Children) -> Self {
        self.children = Some(children);
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}
