//! Typed push notifications from one producer to any number of consumers.
//!
//! A consumer calls [`EventBus::subscribe`] and polls the returned
//! [`Subscription`]. Teardown is explicit through [`EventBus::unsubscribe`];
//! a dropped subscription is pruned on the next publish.

use std::sync::mpsc::{self, Receiver, Sender, TryIter};

use parking_lot::Mutex;

pub struct EventBus<T> {
    inner: Mutex<Registry<T>>,
}

struct Registry<T> {
    next_id: u64,
    senders: Vec<(u64, Sender<T>)>,
}

pub struct Subscription<T> {
    id: u64,
    rx: Receiver<T>,
}

impl<T: Clone> EventBus<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Registry {
                next_id: 0,
                senders: Vec::new(),
            }),
        }
    }

    pub fn subscribe(&self) -> Subscription<T> {
        let (tx, rx) = mpsc::channel();
        let mut registry = self.inner.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.senders.push((id, tx));
        Subscription { id, rx }
    }

    pub fn unsubscribe(&self, subscription: Subscription<T>) {
        self.inner
            .lock()
            .senders
            .retain(|(id, _)| *id != subscription.id);
    }

    /// Delivers `event` to every live subscriber. Returns how many received it.
    pub fn publish(&self, event: T) -> usize {
        let mut registry = self.inner.lock();
        registry
            .senders
            .retain(|(_, tx)| tx.send(event.clone()).is_ok());
        registry.senders.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().senders.len()
    }
}

impl<T: Clone> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Subscription<T> {
    /// Pending events, without blocking.
    pub fn drain(&self) -> TryIter<'_, T> {
        self.rx.try_iter()
    }

    /// Most recent pending event, discarding older ones.
    pub fn latest(&self) -> Option<T> {
        self.rx.try_iter().last()
    }
}
