//! The single piece of mutable state an async button owns.

/// Where the most recently triggered action stands.
///
/// `Idle` is the "nothing in flight, nothing to report" state.  The machine
/// moves `Idle → Pending → {Fulfilled, Rejected}` and back to `Pending` on the
/// next click; there is no terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum AsyncPhase {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Rejected,
}

impl AsyncPhase {
    pub fn is_pending(self) -> bool {
        self == AsyncPhase::Pending
    }

    pub fn is_fulfilled(self) -> bool {
        self == AsyncPhase::Fulfilled
    }

    pub fn is_rejected(self) -> bool {
        self == AsyncPhase::Rejected
    }

    /// Short lower-case name, used in logs and the demo status bar.
    pub fn name(self) -> &'static str {
        match self {
            AsyncPhase::Idle => "idle",
            AsyncPhase::Pending => "pending",
            AsyncPhase::Fulfilled => "fulfilled",
            AsyncPhase::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for AsyncPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
