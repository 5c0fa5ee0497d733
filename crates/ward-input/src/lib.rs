pub mod dispatch;
pub mod input;
pub mod session;

pub use dispatch::{
    HandlerTable, KeyOutcome, PrefixState, ShortcutDispatcher, DEFAULT_PREFIX_TIMEOUT,
    OPEN_COMMAND_PALETTE_ACTION,
};
pub use input::{KeyCombo, Shortcut, ShortcutIndex, ShortcutKey, ShortcutSet};
pub use session::ShortcutSession;
