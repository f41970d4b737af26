//! Explicit event bus for ambient map signals.
//!
//! The original page dispatched custom events on the window object; here the
//! bus is an injected value so the coupling between the floating controls,
//! the host adapter, and the map widget is visible at construction time.

use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Mutex, PoisonError};

/// Ambient signals consumed by the map widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapSignal {
    /// Re-centre the view, typically on the device position.
    CenterOnUser {
        /// Target latitude.
        lat: f64,
        /// Target longitude.
        lng: f64,
        /// Target zoom level.
        zoom: u8,
    },
    /// The viewport changed size; the map must recalculate its size.
    ViewportChanged,
}

#[derive(Default)]
struct Subscribers {
    next_id: u64,
    senders: Vec<(u64, Sender<MapSignal>)>,
}

/// Process-local pub/sub channel for [`MapSignal`] values.
///
/// Cloning shares the subscriber list. Dropping a [`Subscription`] detaches
/// it, so a widget torn down between remounts leaks no listeners.
#[derive(Clone, Default)]
pub struct MapEvents {
    inner: Arc<Mutex<Subscribers>>,
}

impl MapEvents {
    /// Create a bus with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber and return its receiving end.
    #[must_use]
    pub fn subscribe(&self) -> Subscription {
        let (tx, rx) = channel();
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let id = guard.next_id;
        guard.next_id += 1;
        guard.senders.push((id, tx));
        Subscription {
            id,
            bus: Arc::clone(&self.inner),
            rx,
        }
    }

    /// Deliver a signal to every live subscriber.
    pub fn publish(&self, signal: MapSignal) {
        let mut guard = self
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        // Prune subscribers whose receiving end has gone away.
        guard
            .senders
            .retain(|(_, sender)| sender.send(signal).is_ok());
    }

    /// Number of live subscriptions; used to verify teardown.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .senders
            .len()
    }
}

/// Receiving end of a [`MapEvents`] subscription.
pub struct Subscription {
    id: u64,
    bus: Arc<Mutex<Subscribers>>,
    rx: Receiver<MapSignal>,
}

impl Subscription {
    /// Drain every signal published since the last call.
    pub fn drain(&self) -> Vec<MapSignal> {
        self.rx.try_iter().collect()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let mut guard = self.bus.lock().unwrap_or_else(PoisonError::into_inner);
        guard.senders.retain(|(id, _)| *id != self.id);
    }
}
