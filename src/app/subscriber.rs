//! List subscribers: store-driven view state containers.
//!
//! A subscriber owns the bridge between an injected store and the derivation
//! engine. On mount it registers a change listener and performs the initial
//! fetch-and-derive; afterwards it re-derives when the store changes (refetch)
//! or when a relevant prop changes (no refetch). On unmount it releases its
//! listener registration exactly once.
//!
//! # Change propagation
//!
//! Store listeners run synchronously inside the store's notify pass, which is
//! no place to mutate the subscriber. The listener therefore only raises a
//! shared flag; the host event loop drives
//! [`handle_store_change`](CampaignListSubscriber::handle_store_change) once
//! the notify pass has unwound, and the subscriber refetches then.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use civiclists::{
//!     Campaign, CampaignListSubscriber, CampaignStore, ListEngine, ListProps,
//! };
//!
//! let store = Rc::new(CampaignStore::new());
//! let mut subscriber = CampaignListSubscriber::new(
//!     store.clone(),
//!     ListEngine::with_today(20_240_101),
//!     ListProps::default(),
//! );
//! subscriber.mount().unwrap();
//!
//! store.replace_promoted(vec![Campaign::default()]);
//! assert!(subscriber.handle_store_change());
//! assert_eq!(subscriber.state().raw_list.len(), 1);
//!
//! subscriber.unmount();
//! assert_eq!(store.listener_count(), 0);
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::domain::{Campaign, CivicListsError, Invitee, Result};
use crate::engine::ListEngine;
use crate::stores::{CampaignSource, InviteeSource, Subscription};

use super::lifecycle::Phase;
use super::props::ListProps;

/// Derived view state for a campaign list, recomputed wholesale on every
/// relevant change.
///
/// `filtered_list` and `search_results` are always derivable purely from
/// `raw_list` plus the current props; there is no hidden state.
#[derive(Debug, Clone, Default)]
pub struct DerivedListState {
    /// Snapshot fetched from the store at the last store change.
    pub raw_list: Vec<Campaign>,

    /// Campaigns surviving the criteria, normalized and in display order.
    pub filtered_list: Vec<Campaign>,

    /// Subset of `filtered_list` matching the search text; empty when the
    /// search text is empty.
    pub search_results: Vec<Campaign>,

    /// Milliseconds-since-epoch stamp of the last derivation. Lets memoized
    /// children detect "new derivation occurred" without comparing lists.
    pub last_change_timestamp: i64,
}

/// Subscribes to a campaign store and maintains [`DerivedListState`].
pub struct CampaignListSubscriber {
    store: Rc<dyn CampaignSource>,
    engine: ListEngine,
    props: ListProps,
    state: DerivedListState,
    phase: Phase,
    store_changed: Rc<Cell<bool>>,
    subscription: Option<Subscription>,
}

impl CampaignListSubscriber {
    /// Creates an unmounted subscriber over an injected store.
    #[must_use]
    pub fn new(store: Rc<dyn CampaignSource>, engine: ListEngine, props: ListProps) -> Self {
        Self {
            store,
            engine,
            props,
            state: DerivedListState::default(),
            phase: Phase::Uninitialized,
            store_changed: Rc::new(Cell::new(false)),
            subscription: None,
        }
    }

    /// Registers the store listener and performs the initial fetch-and-derive.
    ///
    /// # Errors
    ///
    /// Returns a [`CivicListsError::Lifecycle`] error when already mounted; the
    /// existing registration and state are left untouched.
    pub fn mount(&mut self) -> Result<()> {
        if self.phase != Phase::Uninitialized {
            return Err(CivicListsError::Lifecycle(
                "campaign list subscriber is already mounted".to_string(),
            ));
        }
        tracing::debug!("mounting campaign list subscriber");

        let flag = Rc::clone(&self.store_changed);
        self.subscription = Some(self.store.subscribe(Rc::new(move || flag.set(true))));
        self.phase = Phase::Subscribed;
        self.refetch_and_derive();
        Ok(())
    }

    /// Refetches and re-derives if the store has signalled a change.
    ///
    /// Driven by the host event loop after store notifications. Returns
    /// whether a recompute happened. A no-op while unmounted or when no
    /// change is pending.
    pub fn handle_store_change(&mut self) -> bool {
        if self.phase == Phase::Uninitialized || !self.store_changed.take() {
            return false;
        }
        self.refetch_and_derive();
        true
    }

    /// Replaces the parent-supplied props, re-deriving when a relevant prop
    /// changed.
    ///
    /// Relevance follows the parent contract: the filter timestamp and the
    /// search text are compared, the criteria vector itself is not. Returns
    /// whether a recompute happened. Props are stored either way.
    pub fn update_props(&mut self, props: ListProps) -> bool {
        let change_needed = props.list_mode_filters_timestamp
            != self.props.list_mode_filters_timestamp
            || props.search_text != self.props.search_text;
        self.props = props;

        if !change_needed || self.phase == Phase::Uninitialized {
            return false;
        }
        self.rederive();
        true
    }

    /// Releases the store registration. Idempotent.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            tracing::debug!("unmounting campaign list subscriber");
            subscription.remove();
        }
        self.phase = Phase::Uninitialized;
        self.store_changed.set(false);
    }

    /// Current derived state.
    #[must_use]
    pub fn state(&self) -> &DerivedListState {
        &self.state
    }

    /// Current parent-supplied props.
    #[must_use]
    pub fn props(&self) -> &ListProps {
        &self.props
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the subscriber is mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.phase != Phase::Uninitialized
    }

    fn refetch_and_derive(&mut self) {
        self.state.raw_list = self.store.promoted_campaigns();
        self.rederive();
    }

    fn rederive(&mut self) {
        self.phase = Phase::Recomputing;
        let derived = self.engine.derive(
            &self.state.raw_list,
            &self.props.list_mode_filters,
            &self.props.search_text,
        );
        self.state.filtered_list = derived.filtered_list;
        self.state.search_results = derived.search_results;
        self.state.last_change_timestamp = chrono::Utc::now().timestamp_millis();
        self.phase = Phase::Subscribed;

        tracing::debug!(
            raw = self.state.raw_list.len(),
            filtered = self.state.filtered_list.len(),
            results = self.state.search_results.len(),
            "campaign list state recomputed"
        );
    }
}

impl fmt::Debug for CampaignListSubscriber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CampaignListSubscriber")
            .field("phase", &self.phase)
            .field("props", &self.props)
            .field("state", &self.state)
            .finish()
    }
}

/// Subscribes to an invitee store and maintains the roster for one challenge.
///
/// The structurally similar second component: same mount/change/unmount
/// lifecycle, no filter or search derivation.
pub struct InviteeListSubscriber {
    store: Rc<dyn InviteeSource>,
    challenge_id: String,
    invitees: Vec<Invitee>,
    last_change_timestamp: i64,
    phase: Phase,
    store_changed: Rc<Cell<bool>>,
    subscription: Option<Subscription>,
}

impl InviteeListSubscriber {
    /// Creates an unmounted subscriber for one challenge's roster.
    #[must_use]
    pub fn new(store: Rc<dyn InviteeSource>, challenge_id: impl Into<String>) -> Self {
        Self {
            store,
            challenge_id: challenge_id.into(),
            invitees: Vec::new(),
            last_change_timestamp: 0,
            phase: Phase::Uninitialized,
            store_changed: Rc::new(Cell::new(false)),
            subscription: None,
        }
    }

    /// Registers the store listener and performs the initial fetch.
    ///
    /// # Errors
    ///
    /// Returns a [`CivicListsError::Lifecycle`] error when already mounted.
    pub fn mount(&mut self) -> Result<()> {
        if self.phase != Phase::Uninitialized {
            return Err(CivicListsError::Lifecycle(
                "invitee list subscriber is already mounted".to_string(),
            ));
        }
        tracing::debug!(challenge_id = %self.challenge_id, "mounting invitee list subscriber");

        let flag = Rc::clone(&self.store_changed);
        self.subscription = Some(self.store.subscribe(Rc::new(move || flag.set(true))));
        self.phase = Phase::Subscribed;
        self.refetch();
        Ok(())
    }

    /// Refetches the roster if the store has signalled a change.
    ///
    /// Returns whether a refetch happened.
    pub fn handle_store_change(&mut self) -> bool {
        if self.phase == Phase::Uninitialized || !self.store_changed.take() {
            return false;
        }
        self.refetch();
        true
    }

    /// Releases the store registration. Idempotent.
    pub fn unmount(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            tracing::debug!(challenge_id = %self.challenge_id, "unmounting invitee list subscriber");
            subscription.remove();
        }
        self.phase = Phase::Uninitialized;
        self.store_changed.set(false);
    }

    /// Current roster snapshot.
    #[must_use]
    pub fn invitees(&self) -> &[Invitee] {
        &self.invitees
    }

    /// The challenge this subscriber tracks.
    #[must_use]
    pub fn challenge_id(&self) -> &str {
        &self.challenge_id
    }

    /// Milliseconds-since-epoch stamp of the last refetch.
    #[must_use]
    pub fn last_change_timestamp(&self) -> i64 {
        self.last_change_timestamp
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the subscriber is mounted.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.phase != Phase::Uninitialized
    }

    fn refetch(&mut self) {
        self.phase = Phase::Recomputing;
        self.invitees = self.store.invitee_list(&self.challenge_id);
        self.last_change_timestamp = chrono::Utc::now().timestamp_millis();
        self.phase = Phase::Subscribed;

        tracing::debug!(
            challenge_id = %self.challenge_id,
            invitees = self.invitees.len(),
            "invitee roster refetched"
        );
    }
}

impl fmt::Debug for InviteeListSubscriber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InviteeListSubscriber")
            .field("phase", &self.phase)
            .field("challenge_id", &self.challenge_id)
            .field("invitees", &self.invitees.len())
            .finish()
    }
}
