//! Application layer: subscriber lifecycle and view state.
//!
//! This layer owns the stateful components that sit between the stores and
//! the renderers. Each subscriber holds an injected store reference, a phase
//! machine, and the derived state the UI layer composes from.
//!
//! # Organization
//!
//! - [`lifecycle`]: The `Phase` state machine
//! - [`props`]: Parent-supplied list configuration
//! - [`subscriber`]: Campaign and invitee list subscribers

pub mod lifecycle;
pub mod props;
pub mod subscriber;

pub use lifecycle::Phase;
pub use props::ListProps;
pub use subscriber::{CampaignListSubscriber, DerivedListState, InviteeListSubscriber};
