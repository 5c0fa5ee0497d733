use std::time::Instant;

/// Transient two-key sequence state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PrefixState {
    #[default]
    Idle,
    /// A prefix key was pressed; the next key resolves it.
    Armed { prefix: String, deadline: Instant },
}

impl PrefixState {
    pub fn prefix(&self) -> Option<&str> {
        match self {
            PrefixState::Idle => None,
            PrefixState::Armed { prefix, .. } => Some(prefix),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        match self {
            PrefixState::Idle => None,
            PrefixState::Armed { deadline, .. } => Some(*deadline),
        }
    }
}

/// The result of dispatching a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A handler ran for this action. The event is consumed.
    Fired(String),
    /// This prefix key is now armed. The event is consumed.
    Armed(String),
    /// A shortcut matched but nothing handles its action.
    Unhandled(String),
    /// The armed prefix was dropped by a suffix with no shortcut.
    Disarmed(String),
    /// No shortcut applies; the event propagates normally.
    Ignored,
}

impl KeyOutcome {
    /// Whether the page should prevent default handling and stop propagation.
    pub fn is_consumed(&self) -> bool {
        matches!(self, KeyOutcome::Fired(_) | KeyOutcome::Armed(_))
    }
}
