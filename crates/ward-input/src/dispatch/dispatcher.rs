use std::mem;
use std::time::{Duration, Instant};

use tracing::debug;
use ward_common::KeyEvent;
use ward_config::schema::DEFAULT_PREFIX_TIMEOUT_MS;
use ward_config::Conditions;

use crate::input::{Shortcut, ShortcutIndex, ShortcutSet};

use super::handlers::HandlerTable;
use super::types::{KeyOutcome, PrefixState};

/// How long an armed prefix waits for its suffix unless configured otherwise.
pub const DEFAULT_PREFIX_TIMEOUT: Duration = Duration::from_millis(DEFAULT_PREFIX_TIMEOUT_MS);

/// Resolves key events against the active shortcuts.
///
/// Time is passed in by the caller, so the prefix timeout is driven by
/// whatever clock the caller uses.
#[derive(Debug, Clone)]
pub struct ShortcutDispatcher {
    set: ShortcutSet,
    index: ShortcutIndex,
    prefix_timeout: Duration,
    state: PrefixState,
}

impl ShortcutDispatcher {
    pub fn new(set: ShortcutSet, conditions: &Conditions, sub_context: Option<&str>) -> Self {
        let index = ShortcutIndex::build(&set, conditions, sub_context);
        Self {
            set,
            index,
            prefix_timeout: DEFAULT_PREFIX_TIMEOUT,
            state: PrefixState::Idle,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.prefix_timeout = timeout;
        self
    }

    /// Reclassify the shortcuts for new conditions or a new sub-context.
    ///
    /// An armed prefix survives only while some active shortcut still
    /// starts with it.
    pub fn update(&mut self, conditions: &Conditions, sub_context: Option<&str>) {
        self.index = ShortcutIndex::build(&self.set, conditions, sub_context);
        if let Some(prefix) = self.state.prefix() {
            if !self.index.is_prefix(prefix) {
                debug!(prefix, "armed prefix no longer active, disarming");
                self.state = PrefixState::Idle;
            }
        }
    }

    /// Active shortcuts in merge order.
    pub fn shortcuts(&self) -> &[Shortcut] {
        self.index.shortcuts()
    }

    pub fn index(&self) -> &ShortcutIndex {
        &self.index
    }

    pub fn prefix_timeout(&self) -> Duration {
        self.prefix_timeout
    }

    /// The armed prefix key, if any.
    pub fn active_prefix(&self) -> Option<&str> {
        self.state.prefix()
    }

    /// When the armed prefix expires.
    pub fn deadline(&self) -> Option<Instant> {
        self.state.deadline()
    }

    /// Disarm a prefix whose deadline has passed. Returns whether it did.
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.state {
            PrefixState::Armed { prefix, deadline } if now >= *deadline => {
                debug!(prefix = %prefix, "prefix expired");
                self.state = PrefixState::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.state = PrefixState::Idle;
    }

    /// Dispatch one keydown.
    ///
    /// Modified combos are checked first and always clear an armed prefix.
    /// An armed prefix then takes the next key as its suffix, whether or not
    /// it resolves. Prefix keys and direct keys only trigger with no
    /// modifiers held. Inside editable fields only ctrl/meta combos apply.
    pub fn handle_key(
        &mut self,
        event: &KeyEvent,
        now: Instant,
        handlers: &mut HandlerTable,
    ) -> KeyOutcome {
        self.expire(now);

        if event.is_modifier_only() {
            return KeyOutcome::Ignored;
        }
        if event.target.is_editable() && !event.modifiers.ctrl_or_meta() {
            return KeyOutcome::Ignored;
        }

        if let Some(shortcut) = self.index.modified(event) {
            let action = shortcut.action.clone();
            self.state = PrefixState::Idle;
            return fire(handlers, action);
        }

        let key = event.normalized_key();

        if let PrefixState::Armed { prefix, .. } = mem::take(&mut self.state) {
            return match self.index.prefixed(&prefix, &key) {
                Some(shortcut) => fire(handlers, shortcut.action.clone()),
                None => {
                    debug!(prefix = %prefix, suffix = %key, "no shortcut for sequence");
                    KeyOutcome::Disarmed(prefix)
                }
            };
        }

        if event.modifiers.any() {
            return KeyOutcome::Ignored;
        }

        if self.index.is_prefix(&key) {
            debug!(prefix = %key, "prefix armed");
            self.state = PrefixState::Armed {
                prefix: key.clone(),
                deadline: now + self.prefix_timeout,
            };
            return KeyOutcome::Armed(key);
        }

        if let Some(shortcut) = self.index.direct(&key) {
            return fire(handlers, shortcut.action.clone());
        }

        KeyOutcome::Ignored
    }
}

fn fire(handlers: &mut HandlerTable, action: String) -> KeyOutcome {
    if handlers.invoke(&action) {
        debug!(action = %action, "shortcut fired");
        KeyOutcome::Fired(action)
    } else {
        debug!(action = %action, "no handler registered");
        KeyOutcome::Unhandled(action)
    }
}
