pub mod errors;
pub mod events;
pub mod keymap;
pub mod types;

pub use errors::{ConditionError, ConfigError, KeymapError, WardError};
pub use events::{Event, EventBus};
pub use keymap::{KeyBind, Modifier};
pub use types::{EventTarget, KeyEvent, Modifiers};

pub type Result<T> = std::result::Result<T, WardError>;
