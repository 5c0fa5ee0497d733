//! Key dispatch: decides whether a keydown fires a shortcut, arms a prefix,
//! or propagates to the page.
//!
//! The [`ShortcutDispatcher`] owns the categorized index and the one piece of
//! mutable state, the armed prefix. Handlers live in a caller-owned
//! [`HandlerTable`].

mod dispatcher;
mod handlers;
mod types;

pub use dispatcher::{ShortcutDispatcher, DEFAULT_PREFIX_TIMEOUT};
pub use handlers::HandlerTable;
pub use types::{KeyOutcome, PrefixState};

/// Action run when the page asks for the command palette.
pub const OPEN_COMMAND_PALETTE_ACTION: &str = "open-command-palette";
