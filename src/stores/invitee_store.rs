//! In-memory challenge invitee store.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::{Invitee, Result};

use super::source::{InviteeSource, Listener, ListenerRegistry, Subscription};

/// Holds invitee rosters keyed by challenge id and notifies listeners when a
/// roster is replaced.
///
/// A challenge id with no roster yields an empty list, which is the normal
/// state for a freshly created challenge.
#[derive(Debug, Default)]
pub struct InviteeStore {
    rosters: RefCell<HashMap<String, Vec<Invitee>>>,
    registry: ListenerRegistry,
}

impl InviteeStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces one challenge's roster and notifies listeners.
    pub fn replace_roster(&self, challenge_id: &str, invitees: Vec<Invitee>) {
        self.rosters
            .borrow_mut()
            .insert(challenge_id.to_string(), invitees);
        self.registry.notify();
    }

    /// Deserializes a JSON array payload into one challenge's roster.
    ///
    /// Returns the number of invitees ingested.
    ///
    /// # Errors
    ///
    /// Returns [`CivicListsError::Payload`](crate::CivicListsError::Payload)
    /// when the payload is not a valid invitee array; existing rosters are
    /// left untouched and listeners are not notified.
    pub fn ingest_roster_payload(&self, challenge_id: &str, payload: &str) -> Result<usize> {
        let invitees: Vec<Invitee> = serde_json::from_str(payload)?;
        let count = invitees.len();
        tracing::debug!(challenge_id, count, "invitee roster payload ingested");
        self.replace_roster(challenge_id, invitees);
        Ok(count)
    }

    /// Number of currently registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.len()
    }
}

impl InviteeSource for InviteeStore {
    fn invitee_list(&self, challenge_id: &str) -> Vec<Invitee> {
        self.rosters
            .borrow()
            .get(challenge_id)
            .cloned()
            .unwrap_or_default()
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        self.registry.subscribe(listener)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn unknown_challenge_yields_empty_roster() {
        let store = InviteeStore::new();
        assert!(store.invitee_list("chal-missing").is_empty());
    }

    #[test]
    fn rosters_are_kept_per_challenge() {
        let store = InviteeStore::new();
        store.replace_roster("chal-1", vec![Invitee::default()]);
        store.replace_roster("chal-2", vec![Invitee::default(), Invitee::default()]);

        assert_eq!(store.invitee_list("chal-1").len(), 1);
        assert_eq!(store.invitee_list("chal-2").len(), 2);
    }

    #[test]
    fn replace_notifies_listeners() {
        let store = InviteeStore::new();
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        let _subscription = store.subscribe(Rc::new(move || counter.set(counter.get() + 1)));

        store.replace_roster("chal-1", vec![]);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn ingest_defaults_absent_flags() {
        let store = InviteeStore::new();
        let count = store
            .ingest_roster_payload("chal-1", r#"[{"id": 1, "name": "Jane"}]"#)
            .unwrap();

        assert_eq!(count, 1);
        let roster = store.invitee_list("chal-1");
        assert_eq!(roster[0].name, "Jane");
        assert!(!roster[0].invite_sent);
        assert_eq!(roster[0].status_label(), "");
    }
}
