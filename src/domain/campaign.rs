//! Campaign record types.
//!
//! This module defines the [`Campaign`] record as delivered by the campaign
//! store, along with the nested [`Politician`] entries used by search fallback
//! matching. Records are immutable snapshots: stores replace whole lists, they
//! never mutate records in place.
//!
//! All optional text fields deserialize to empty strings and numeric fields to
//! zero, so a record built from a sparse API payload is always display-safe.

use serde::{Deserialize, Serialize};

/// A campaign as held by the campaign store.
///
/// Election dates are encoded as `YYYYMMDD` integers (e.g. `20241105`), which
/// makes chronological comparison a plain integer comparison and year
/// extraction a division by 10 000.
///
/// # Fields
///
/// - `id`: Opaque campaign identifier assigned by the backend
/// - `title`, `description`, `office_name`: Display text, empty when absent
/// - `state_code`: Two-letter region code, empty when absent
/// - `state_name`: Human-readable region name, resolved during normalization
/// - `supporters_count`: Number of supporters, used as a popularity sort key
/// - `order_in_list`: Explicit ordering hint; `0` means unset and sorts last
/// - `final_election_date_as_integer`: Date of the latest associated election
/// - `politicians`: Politicians associated with the campaign
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub state_code: String,
    #[serde(default)]
    pub state_name: String,
    #[serde(default)]
    pub office_name: String,
    #[serde(default)]
    pub supporters_count: i64,
    #[serde(default)]
    pub order_in_list: u32,
    #[serde(default)]
    pub final_election_date_as_integer: u32,
    #[serde(default)]
    pub politicians: Vec<Politician>,
}

/// A politician associated with a campaign.
///
/// Searched as a fallback when a query token matches neither the campaign
/// title nor its description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Politician {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state_code: String,
}
