//! Typed event bus for lifecycle notifications.
//!
//! Other subsystems (navigation counters, analytics) observe the engine
//! through these events rather than reaching into its state. Delivery is
//! synchronous and at-most-once per listener, in subscription order; a
//! failing listener is logged and must not prevent later listeners from
//! running.

use std::fmt;
use thiserror::Error;
use tracing::warn;

/// Lifecycle events published by the directory context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectoryEvent {
    /// A ranking pass is about to run
    SearchStarted { query: String },
    /// A ranking pass finished
    SearchCompleted { query: String, result_count: usize },
    /// The active search was cleared
    SearchCleared,
    /// The active category changed via user navigation
    CategoryChanged { category: String },
}

/// Error a listener may return; logged by the bus, never propagated.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct ListenerError(pub String);

impl From<String> for ListenerError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

impl From<&str> for ListenerError {
    fn from(message: &str) -> Self {
        Self(message.to_string())
    }
}

/// Handle returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&DirectoryEvent) -> Result<(), ListenerError>>;

/// Synchronous in-process observer registry.
#[derive(Default)]
pub struct EventBus {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl EventBus {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener and returns its subscription handle.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&DirectoryEvent) -> Result<(), ListenerError> + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` if the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Delivers `event` to every listener, in subscription order.
    ///
    /// Each listener is invoked at most once per publish. A listener
    /// returning an error is logged via `tracing` and skipped; the
    /// remaining listeners still run.
    pub fn publish(&mut self, event: &DirectoryEvent) {
        for (id, listener) in &mut self.listeners {
            if let Err(e) = listener(event) {
                warn!(subscription = id.0, error = %e, "Event listener failed");
            }
        }
    }

    /// Number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Returns `true` if no listener is registered.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl fmt::Debug for EventBus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
