//! Page-level event bus.
//!
//! Stands in for the document: key events and synthetic UI events are
//! published once and every subscribed session receives them. Dropping a
//! receiver unsubscribes it.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::KeyEvent;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    KeyDown(KeyEvent),
    /// Synthetic request to open the command palette, raised by non-keyboard UI.
    OpenCommandPalette,
    /// Synthetic request to run a named action.
    Command(String),
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    /// Number of live subscribers.
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
