//! Civiclists: the view-model layer for civic-engagement list surfaces.
//!
//! Civiclists provides:
//! - Observable in-memory stores for campaign and challenge-invitee snapshots
//! - Pure list derivation: criteria filtering, three-key stable sorting, and
//!   token-AND substring search with politician fallback matching
//! - Subscriber components that re-derive view state on store changes and
//!   relevant prop changes, with leak-free listener lifecycles
//! - Declarative view-model composition for presentational children
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host application (event loop, rendering)           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Lifecycle
//! │  - Subscriber phase machine                         │  ← Prop diffing
//! │  - Derived list state                               │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Engine Layer  │   │ Store Layer   │
//! │ (ui/)         │   │ (engine/)     │   │ (stores/)     │
//! │ - View models │   │ - Filtering   │   │ - Snapshots   │
//! │ - Composition │   │ - Sorting     │   │ - Listeners   │
//! │               │   │ - Search      │   │ - Ingestion   │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Region names, date integers (infrastructure/)    │
//! │  - Records and errors (domain/)                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Control Flow
//!
//! Store change → subscriber refetches the snapshot → engine recomputes the
//! filtered/sorted/search lists → renderer composes new child props. All of it
//! is synchronous, single-threaded, and callback-driven; nothing blocks and
//! nothing is shared across threads.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use civiclists::{
//!     compose_campaign_list, Campaign, CampaignListSubscriber, CampaignStore,
//!     FilterCriterion, FilterRule, ListEngine, ListProps,
//! };
//!
//! let store = Rc::new(CampaignStore::new());
//! let mut subscriber = CampaignListSubscriber::new(
//!     store.clone(),
//!     ListEngine::with_today(20_240_101),
//!     ListProps {
//!         list_mode_filters: vec![FilterCriterion::selected(FilterRule::UpcomingElectionsOnly)],
//!         list_mode_filters_timestamp: 1,
//!         title_text: "Happening now".to_string(),
//!         ..ListProps::default()
//!     },
//! );
//! subscriber.mount()?;
//!
//! store.replace_promoted(vec![Campaign {
//!     title: "Jane for Council".to_string(),
//!     final_election_date_as_integer: 20_241_105,
//!     ..Campaign::default()
//! }]);
//! subscriber.handle_store_change();
//!
//! let view = compose_campaign_list(&subscriber).expect("mounted");
//! assert_eq!(view.card_list.items.len(), 1);
//!
//! subscriber.unmount();
//! # Ok::<(), civiclists::CivicListsError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Wholesale Recomputation
//!
//! Every relevant change re-runs the full filter/sort/search pipeline. At
//! list-surface scale this is cheap, keeps the derived lists trivially
//! consistent with their inputs, and makes the derivation a pure function
//! that tests can call directly.
//!
//! ## Explicit Store Injection
//!
//! Stores are passed into subscribers as trait objects rather than reached
//! through globals, so tests substitute doubles and two surfaces can run
//! against distinct stores in the same process.
//!
//! ## RAII Subscriptions
//!
//! `subscribe` returns a token that deregisters on drop. The failure mode it
//! guards against is a listener registration outliving its component for the
//! store's whole lifetime.

pub mod app;
pub mod domain;
pub mod engine;
pub mod infrastructure;
pub mod observability;
pub mod stores;
pub mod ui;

pub use app::{CampaignListSubscriber, DerivedListState, InviteeListSubscriber, ListProps, Phase};
pub use domain::{Campaign, CivicListsError, Invitee, Politician, Result};
pub use engine::{DerivedLists, FilterCriterion, FilterRule, ListEngine};
pub use observability::init_tracing;
pub use stores::{
    CampaignSource, CampaignStore, InviteeSource, InviteeStore, Listener, ListenerRegistry,
    Subscription,
};
pub use ui::{
    compose_campaign_list, compose_invitee_list, CampaignListView, CardListProps, HeadingInfo,
    InviteeListView, InviteeRow,
};

use std::collections::BTreeMap;

/// Library configuration supplied by the host application.
///
/// Hosts hand configuration over as a string map; parsing is lenient and
/// unparseable values fall back to defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Tracing filter directive for [`init_tracing`]. Default: `"info"`.
    pub trace_level: Option<String>,

    /// Fixed `YYYYMMDD` integer to use as "today" in date filtering. Absent
    /// means the system clock. Useful for deterministic demos and tests.
    pub today_override: Option<u32>,
}

impl Config {
    /// Parses configuration from a host-supplied string map.
    ///
    /// # Parsing Rules
    ///
    /// - `trace_level`: taken verbatim
    /// - `today_override`: parsed as `u32`, ignored on parse failure
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use civiclists::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("trace_level".to_string(), "debug".to_string());
    /// map.insert("today_override".to_string(), "20240101".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// assert_eq!(config.today_override, Some(20_240_101));
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        Self {
            trace_level: config.get("trace_level").cloned(),
            today_override: config
                .get("today_override")
                .and_then(|value| value.parse::<u32>().ok()),
        }
    }
}

/// Builds the derivation engine described by the configuration.
///
/// With `today_override` set the engine filters against that fixed date;
/// otherwise it reads the system clock at each derivation.
///
/// # Example
///
/// ```
/// use civiclists::{initialize, Config};
///
/// let engine = initialize(&Config {
///     today_override: Some(20_240_101),
///     ..Config::default()
/// });
/// let derived = engine.derive(&[], &[], "");
/// assert!(derived.filtered_list.is_empty());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> ListEngine {
    tracing::debug!(today_override = ?config.today_override, "initializing civiclists");

    config
        .today_override
        .map_or_else(ListEngine::new, ListEngine::with_today)
}
