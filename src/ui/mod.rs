//! User interface layer: view models and composition.
//!
//! The UI layer is purely declarative. Subscribers own the state; this layer
//! turns that state into immutable view-model structs for presentational
//! children:
//!
//! ```text
//! subscriber state → compose_* → view model → host rendering
//! ```
//!
//! # Organization
//!
//! - [`viewmodel`]: View model types representing renderable list state
//! - [`renderer`]: Composition from subscriber state to view models

pub mod renderer;
pub mod viewmodel;

pub use renderer::{compose_campaign_list, compose_invitee_list};
pub use viewmodel::{
    CampaignListView, CardListProps, FirstCampaignControllerSlot, FirstInviteeControllerSlot,
    HeadingInfo, InviteeListView, InviteeRow,
};
