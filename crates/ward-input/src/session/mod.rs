//! A mounted set of shortcuts listening on the page's event bus.
//!
//! [`ShortcutSession::mount`] subscribes to the [`EventBus`] and spawns a
//! task that owns the dispatcher and the handlers. The task drives the
//! prefix timeout itself and publishes the armed prefix on a watch channel.
//! Unmounting (or dropping the session) stops the task, which drops its bus
//! receiver.

use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Duration, Instant};
use tracing::{debug, warn};
use ward_common::{Event, EventBus};
use ward_config::Conditions;

use crate::dispatch::{HandlerTable, ShortcutDispatcher, OPEN_COMMAND_PALETTE_ACTION};


/// Sleep target while no prefix is armed. The branch is disabled then.
const IDLE_WAIT: Duration = Duration::from_secs(60 * 60 * 24);

#[derive(Debug)]
struct Update {
    conditions: Conditions,
    sub_context: Option<String>,
}

pub struct ShortcutSession {
    task: JoinHandle<()>,
    updates: mpsc::UnboundedSender<Update>,
    prefix: watch::Receiver<Option<String>>,
}

impl ShortcutSession {
    /// Start listening on `bus`. Must be called inside a tokio runtime.
    ///
    /// The subscription is taken before returning, so events published right
    /// after `mount` are not missed.
    pub fn mount(bus: &EventBus, dispatcher: ShortcutDispatcher, handlers: HandlerTable) -> Self {
        let events = bus.subscribe();
        let (updates, update_rx) = mpsc::unbounded_channel();
        let (prefix_tx, prefix) = watch::channel(None);

        debug!(shortcuts = dispatcher.shortcuts().len(), "mounting shortcut session");
        let task = tokio::spawn(run(events, update_rx, prefix_tx, dispatcher, handlers));

        Self {
            task,
            updates,
            prefix,
        }
    }

    /// The armed prefix key, if any.
    pub fn active_prefix(&self) -> Option<String> {
        self.prefix.borrow().clone()
    }

    /// Subscribe to armed-prefix changes, e.g. to show a "G..." indicator.
    pub fn watch_prefix(&self) -> watch::Receiver<Option<String>> {
        self.prefix.clone()
    }

    /// Reclassify the shortcuts for new conditions or sub-context.
    ///
    /// Applied before any event still queued on the bus. Returns `false`
    /// if the session has already stopped.
    pub fn update(&self, conditions: Conditions, sub_context: Option<String>) -> bool {
        self.updates
            .send(Update {
                conditions,
                sub_context,
            })
            .is_ok()
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Wait for the session to stop on its own, after [`Event::Shutdown`] or
    /// once every bus sender is gone.
    pub async fn join(mut self) {
        if let Err(e) = (&mut self.task).await {
            warn!("shortcut session ended abnormally: {e}");
        }
    }

    /// Stop listening and wait for the task to finish.
    pub async fn unmount(mut self) {
        self.task.abort();
        if let Err(e) = (&mut self.task).await {
            if !e.is_cancelled() {
                warn!("shortcut session ended abnormally: {e}");
            }
        }
        debug!("shortcut session unmounted");
    }
}

impl Drop for ShortcutSession {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run(
    mut events: broadcast::Receiver<Event>,
    mut updates: mpsc::UnboundedReceiver<Update>,
    prefix_tx: watch::Sender<Option<String>>,
    mut dispatcher: ShortcutDispatcher,
    mut handlers: HandlerTable,
) {
    loop {
        let deadline = dispatcher.deadline().map(Instant::from_std);
        let wake_at = deadline.unwrap_or_else(|| Instant::now() + IDLE_WAIT);

        tokio::select! {
            biased;

            Some(update) = updates.recv() => {
                dispatcher.update(&update.conditions, update.sub_context.as_deref());
            }

            _ = time::sleep_until(wake_at), if deadline.is_some() => {
                dispatcher.expire(Instant::now().into_std());
            }

            received = events.recv() => match received {
                Ok(Event::KeyDown(key)) => {
                    let outcome = dispatcher.handle_key(&key, Instant::now().into_std(), &mut handlers);
                    debug!(key = %key.key, ?outcome, "key dispatched");
                }
                Ok(Event::OpenCommandPalette) => {
                    if !handlers.invoke(OPEN_COMMAND_PALETTE_ACTION) {
                        debug!("no command palette handler registered");
                    }
                }
                Ok(Event::Command(action)) => {
                    if !handlers.invoke(&action) {
                        debug!(action = %action, "no handler registered");
                    }
                }
                Ok(Event::Shutdown) | Err(RecvError::Closed) => break,
                Ok(Event::Unknown) => {}
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "shortcut session lagged behind the event bus");
                }
            },
        }

        publish_prefix(&prefix_tx, dispatcher.active_prefix());
    }

    prefix_tx.send_replace(None);
    debug!("shortcut session stopped");
}

fn publish_prefix(tx: &watch::Sender<Option<String>>, prefix: Option<&str>) {
    tx.send_if_modified(|current| {
        if current.as_deref() == prefix {
            return false;
        }
        *current = prefix.map(str::to_owned);
        true
    });
}
