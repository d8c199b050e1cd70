//! Store abstraction: listener registry, subscription token, source traits.
//!
//! This module defines the observer contract every store implements. The
//! [`CampaignSource`] and [`InviteeSource`] traits abstract over concrete
//! stores so subscribers can be constructed against test doubles, and the
//! [`Subscription`] token makes deregistration an explicit, exactly-once
//! obligation owned by the component lifecycle.
//!
//! # Design Philosophy
//!
//! Reads are synchronous snapshot clones, never references into store
//! internals: a caller can hold the result across further store mutations.
//! Everything here is single-threaded by construction (`Rc`, `RefCell`,
//! `Cell`); the host event loop serializes all callback invocations, so no
//! locking is involved.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::domain::{Campaign, Invitee};

/// A store change listener.
///
/// Invoked synchronously, with no payload: listeners re-read the store
/// snapshot themselves.
pub type Listener = Rc<dyn Fn()>;

/// RAII deregistration token returned by [`subscribe`](ListenerRegistry::subscribe).
///
/// The component that subscribed owns this token and releases it exactly once
/// on teardown, either explicitly via [`remove`](Subscription::remove) or
/// implicitly on drop. A token that is never released would leave the listener
/// registered for the store's whole lifetime.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wraps a deregistration closure into a subscription token.
    #[must_use]
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Deregisters the listener now, consuming the token.
    pub fn remove(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("armed", &self.cancel.is_some())
            .finish()
    }
}

/// Id-keyed listener registry shared by store implementations.
///
/// Listeners are invoked in registration order. [`notify`](Self::notify)
/// snapshots the listener list before invoking, so a listener that removes
/// itself (or another) mid-notification is safe.
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use civiclists::ListenerRegistry;
///
/// let registry = ListenerRegistry::new();
/// let fired = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&fired);
/// let subscription = registry.subscribe(Rc::new(move || counter.set(counter.get() + 1)));
///
/// registry.notify();
/// assert_eq!(fired.get(), 1);
///
/// subscription.remove();
/// registry.notify();
/// assert_eq!(fired.get(), 1);
/// ```
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Rc<RefCell<Vec<(u64, Listener)>>>,
    next_id: Cell<u64>,
}

impl ListenerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener and returns its deregistration token.
    #[must_use]
    pub fn subscribe(&self, listener: Listener) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, listener));

        let listeners = Rc::clone(&self.listeners);
        Subscription::new(move || {
            listeners
                .borrow_mut()
                .retain(|(listener_id, _)| *listener_id != id);
        })
    }

    /// Invokes every registered listener, in registration order.
    pub fn notify(&self) {
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener();
        }
    }

    /// Number of currently registered listeners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Whether no listeners are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}

/// Abstraction over campaign stores.
///
/// Implemented by [`CampaignStore`](crate::CampaignStore) and by test doubles.
pub trait CampaignSource {
    /// Returns a clone of the current promoted-campaign snapshot.
    fn promoted_campaigns(&self) -> Vec<Campaign>;

    /// Registers a change listener, returning its deregistration token.
    fn subscribe(&self, listener: Listener) -> Subscription;
}

/// Abstraction over challenge invitee stores.
///
/// Implemented by [`InviteeStore`](crate::InviteeStore) and by test doubles.
pub trait InviteeSource {
    /// Returns a clone of the invitee roster for a challenge.
    ///
    /// Unknown challenge ids yield an empty roster, not an error.
    fn invitee_list(&self, challenge_id: &str) -> Vec<Invitee>;

    /// Registers a change listener, returning its deregistration token.
    fn subscribe(&self, listener: Listener) -> Subscription;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting_listener(counter: &Rc<Cell<u32>>) -> Listener {
        let counter = Rc::clone(counter);
        Rc::new(move || counter.set(counter.get() + 1))
    }

    #[test]
    fn notify_reaches_every_listener() {
        let registry = ListenerRegistry::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let _a = registry.subscribe(counting_listener(&first));
        let _b = registry.subscribe(counting_listener(&second));

        registry.notify();
        registry.notify();

        assert_eq!(first.get(), 2);
        assert_eq!(second.get(), 2);
    }

    #[test]
    fn remove_deregisters_exactly_once() {
        let registry = ListenerRegistry::new();
        let fired = Rc::new(Cell::new(0));
        let subscription = registry.subscribe(counting_listener(&fired));
        assert_eq!(registry.len(), 1);

        subscription.remove();
        assert!(registry.is_empty());

        registry.notify();
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn drop_deregisters_like_remove() {
        let registry = ListenerRegistry::new();
        let fired = Rc::new(Cell::new(0));
        {
            let _subscription = registry.subscribe(counting_listener(&fired));
            assert_eq!(registry.len(), 1);
        }
        assert!(registry.is_empty());
    }

    #[test]
    fn surviving_listeners_fire_after_another_is_removed() {
        let registry = ListenerRegistry::new();
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let a = registry.subscribe(counting_listener(&first));
        let _b = registry.subscribe(counting_listener(&second));

        a.remove();
        registry.notify();

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn listener_removing_itself_during_notify_is_safe() {
        let registry = Rc::new(ListenerRegistry::new());
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

        let slot_for_listener = Rc::clone(&slot);
        let subscription = registry.subscribe(Rc::new(move || {
            slot_for_listener.borrow_mut().take();
        }));
        *slot.borrow_mut() = Some(subscription);

        registry.notify();
        assert!(registry.is_empty());
    }
}
