//! Observable in-memory data stores.
//!
//! Stores hold the current snapshot of backend data and notify registered
//! listeners when the snapshot is replaced. Store references are injected into
//! subscribers explicitly (no global singletons), which is what makes the
//! lifecycle testable with doubles.
//!
//! # Organization
//!
//! - [`source`]: Listener registry, subscription token, and source traits
//! - [`campaign_store`]: In-memory campaign store
//! - [`invitee_store`]: In-memory challenge invitee store

pub mod campaign_store;
pub mod invitee_store;
pub mod source;

pub use campaign_store::CampaignStore;
pub use invitee_store::InviteeStore;
pub use source::{CampaignSource, InviteeSource, Listener, ListenerRegistry, Subscription};
