//! Ordered listener registries.
//!
//! Replaces dynamic signal/slot connections with explicit callback
//! registration: multiple independent listeners, fired in registration
//! order, individually removable. Listeners run synchronously on the
//! caller's thread; completion of one listener is not guaranteed before
//! another notification source fires.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Stable handle for a registered listener.
    pub struct ListenerId;
}

type Callback<T> = Box<dyn FnMut(&T) + Send>;

/// An ordered set of callbacks for one notification kind.
pub struct Listeners<T> {
    callbacks: SlotMap<ListenerId, Callback<T>>,
    /// Firing order; slotmap iteration order is unspecified.
    order: SmallVec<[ListenerId; 2]>,
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self {
            callbacks: SlotMap::with_key(),
            order: SmallVec::new(),
        }
    }

    /// Register a callback. Callbacks fire in registration order.
    pub fn subscribe<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&T) + Send + 'static,
    {
        let id = self.callbacks.insert(Box::new(callback));
        self.order.push(id);
        id
    }

    /// Remove a callback. Returns false if the id was already removed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        if self.callbacks.remove(id).is_some() {
            self.order.retain(|entry| *entry != id);
            true
        } else {
            false
        }
    }

    /// Fire every registered callback with `payload`, in registration order.
    pub fn emit(&mut self, payload: &T) {
        for id in &self.order {
            if let Some(callback) = self.callbacks.get_mut(*id) {
                callback(payload);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}
