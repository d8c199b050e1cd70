//! View model types representing renderable list state.
//!
//! View models are immutable, display-ready snapshots computed from subscriber
//! state. They contain no business logic; presentational children consume them
//! as-is. Controller slots stand in for secondary sub-trees whose logic lives
//! with the host: the host mounts them on demand, so composing a view stays
//! cheap.

use crate::domain::Campaign;

/// Display-ready view of a campaign list surface.
#[derive(Debug, Clone)]
pub struct CampaignListView {
    /// Heading above the list; `None` when hidden or untitled.
    pub heading: Option<HeadingInfo>,

    /// Props for the card list child.
    pub card_list: CardListProps,

    /// Slot for the lazily mounted first-campaign controller sub-tree.
    pub first_campaign_controller: FirstCampaignControllerSlot,
}

/// Heading text for a list surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingInfo {
    /// Text to display.
    pub text: String,
}

/// Props handed to the card list child.
#[derive(Debug, Clone)]
pub struct CardListProps {
    /// Campaigns to display, already filtered, sorted, or searched.
    pub items: Vec<Campaign>,

    /// Stamp of the derivation that produced `items`. Memoized children
    /// compare this instead of the list itself.
    pub change_timestamp: i64,

    /// Whether the child lays cards out as a vertical list rather than a grid.
    pub vertical_list: bool,
}

/// Slot for the first-campaign controller sub-tree.
///
/// The controller's own logic is out of scope here; the host mounts it into
/// this slot on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstCampaignControllerSlot;

/// Display-ready view of a challenge invitee list surface.
#[derive(Debug, Clone)]
pub struct InviteeListView {
    /// Fixed heading above the roster.
    pub heading: HeadingInfo,

    /// One row per invitee, with the derived status label.
    pub rows: Vec<InviteeRow>,

    /// Stamp of the refetch that produced `rows`.
    pub change_timestamp: i64,

    /// Slot for the lazily mounted first-invitee controller sub-tree.
    pub first_invitee_controller: FirstInviteeControllerSlot,
}

/// Display information for a single invitee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InviteeRow {
    /// Invitee identifier.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Derived progress label (`""`, `"Message Sent"`, `"Message Viewed"`, or
    /// `"Challenge Joined"`).
    pub status_label: &'static str,
}

/// Slot for the first-invitee controller sub-tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirstInviteeControllerSlot {
    /// Challenge whose roster the controller operates on.
    pub challenge_id: String,

    /// Search text forwarded to the controller.
    pub search_text: String,
}
