use std::collections::HashMap;
use std::fmt;

type Handler = Box<dyn FnMut() + Send>;

/// Action name to callback, supplied by whoever mounts the shortcuts.
#[derive(Default)]
pub struct HandlerTable {
    handlers: HashMap<String, Handler>,
}

impl HandlerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn on(mut self, action: impl Into<String>, handler: impl FnMut() + Send + 'static) -> Self {
        self.insert(action, handler);
        self
    }

    /// Register a handler, replacing any existing one for `action`.
    pub fn insert(&mut self, action: impl Into<String>, handler: impl FnMut() + Send + 'static) {
        self.handlers.insert(action.into(), Box::new(handler));
    }

    pub fn remove(&mut self, action: &str) -> bool {
        self.handlers.remove(action).is_some()
    }

    pub fn contains(&self, action: &str) -> bool {
        self.handlers.contains_key(action)
    }

    /// Run the handler for `action`. Returns `false` when none is registered.
    pub fn invoke(&mut self, action: &str) -> bool {
        match self.handlers.get_mut(action) {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl fmt::Debug for HandlerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut actions: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        actions.sort_unstable();
        f.debug_struct("HandlerTable")
            .field("actions", &actions)
            .finish()
    }
}
