//! The notification channel sockets publish value changes on.
//!
//! A sink is handed to every socket when it is created; there is no global
//! bus. Delivery is whatever the sink implementation does: [`EventBus`] calls
//! its subscribers synchronously, [`MemoryEventSink`] just records.

use crate::core::socket::Direction;
use crate::core::value::SocketValue;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

/// Published after a socket's value changed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocketChanged {
    pub socket_id: Uuid,
    pub identifier: String,
    pub direction: Direction,
    /// The new value, `None` when the socket was cleared.
    pub value: Option<SocketValue>,
}

/// Trait for receiving socket change notifications.
pub trait EventSink: Send + Sync {
    fn publish(&self, event: SocketChanged);
}

/// Locks a mutex, recovering the data if a subscriber panicked while holding it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        log::warn!("Event sink lock was poisoned, recovering.");
        poisoned.into_inner()
    })
}

type Subscriber = Arc<dyn Fn(&SocketChanged) + Send + Sync>;

/// Synchronous fan-out to subscribers, in subscription order, on the
/// publishing thread.
///
/// Subscribers run without the bus lock held, so they may write to sockets
/// bound to the same bus or subscribe further callbacks. A callback added
/// during a publish first sees the next event.
#[derive(Default)]
pub struct EventBus {
    subscribers: Mutex<Vec<Subscriber>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber that sees every event published after this call.
    pub fn subscribe<F>(&self, subscriber: F)
    where
        F: Fn(&SocketChanged) + Send + Sync + 'static,
    {
        lock(&self.subscribers).push(Arc::new(subscriber));
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.subscribers).len()
    }
}

impl EventSink for EventBus {
    fn publish(&self, event: SocketChanged) {
        let subscribers: Vec<Subscriber> = lock(&self.subscribers).clone();
        log::trace!(
            "Dispatching change of '{}' to {} subscriber(s)",
            event.identifier,
            subscribers.len()
        );
        for subscriber in subscribers.iter() {
            subscriber(&event);
        }
    }
}

/// Simple in-memory collector for change events.
#[derive(Default)]
pub struct MemoryEventSink {
    events: Mutex<Vec<SocketChanged>>,
}

impl MemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SocketChanged> {
        lock(&self.events).clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.events).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for MemoryEventSink {
    fn publish(&self, event: SocketChanged) {
        lock(&self.events).push(event);
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn publish(&self, _event: SocketChanged) {}
}

/// Forwards events into a tokio channel so they can be consumed from async code.
#[cfg(feature = "channel")]
pub struct ChannelEventSink {
    sender: tokio::sync::mpsc::UnboundedSender<SocketChanged>,
}

#[cfg(feature = "channel")]
impl ChannelEventSink {
    /// Creates the sink together with the receiving half of its channel.
    pub fn new() -> (Self, tokio::sync::mpsc::UnboundedReceiver<SocketChanged>) {
        let (sender, receiver) = tokio::sync::mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[cfg(feature = "channel")]
impl EventSink for ChannelEventSink {
    fn publish(&self, event: SocketChanged) {
        if let Err(err) = self.sender.send(event) {
            log::warn!(
                "Receiver for socket events is gone, dropping change of '{}'.",
                err.0.identifier
            );
        }
    }
}
