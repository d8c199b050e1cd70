//! In-memory campaign store.

use std::cell::RefCell;

use crate::domain::{Campaign, Result};

use super::source::{CampaignSource, Listener, ListenerRegistry, Subscription};

/// Holds the current promoted-campaign snapshot and notifies listeners when it
/// is replaced.
///
/// The snapshot is replaced wholesale, never patched: the network layer hands
/// a full payload to [`ingest_promoted_payload`](Self::ingest_promoted_payload)
/// (or pre-parsed records to [`replace_promoted`](Self::replace_promoted)) and
/// every registered listener is told to re-read.
///
/// # Examples
///
/// ```
/// use civiclists::{Campaign, CampaignStore};
/// use civiclists::CampaignSource;
///
/// let store = CampaignStore::new();
/// store.replace_promoted(vec![Campaign::default()]);
/// assert_eq!(store.promoted_campaigns().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CampaignStore {
    promoted: RefCell<Vec<Campaign>>,
    registry: ListenerRegistry,
}

impl CampaignStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the promoted-campaign snapshot and notifies listeners.
    pub fn replace_promoted(&self, campaigns: Vec<Campaign>) {
        *self.promoted.borrow_mut() = campaigns;
        self.registry.notify();
    }

    /// Deserializes a JSON array payload into the promoted snapshot.
    ///
    /// Absent record fields default (empty strings, zeros); listeners are
    /// notified once the snapshot is swapped. Returns the number of records
    /// ingested.
    ///
    /// # Errors
    ///
    /// Returns [`CivicListsError::Payload`](crate::CivicListsError::Payload)
    /// when the payload is not a valid campaign array; the existing snapshot
    /// is left untouched and listeners are not notified.
    pub fn ingest_promoted_payload(&self, payload: &str) -> Result<usize> {
        let campaigns: Vec<Campaign> = serde_json::from_str(payload)?;
        let count = campaigns.len();
        tracing::debug!(count, "promoted campaign payload ingested");
        self.replace_promoted(campaigns);
        Ok(count)
    }

    /// Number of currently registered listeners. Mainly useful for asserting
    /// that component teardown released its registration.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.registry.len()
    }
}

impl CampaignSource for CampaignStore {
    fn promoted_campaigns(&self) -> Vec<Campaign> {
        self.promoted.borrow().clone()
    }

    fn subscribe(&self, listener: Listener) -> Subscription {
        self.registry.subscribe(listener)
    }
}
