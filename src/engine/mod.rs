//! Pure list derivation: filter, normalize, sort, search.
//!
//! This module implements the derivation pipeline that turns a raw campaign
//! snapshot plus UI parameters into display-ready lists. Derivation is pure
//! and synchronous: given the same inputs it produces the same outputs, and it
//! holds no state beyond the engine's clock configuration, so callers may
//! re-run it wholesale on every change.
//!
//! # Pipeline
//!
//! ```text
//! raw list ── filter (selected criteria, AND) ── normalize ── sort ──► filtered list
//!                                                               │
//!                                              search (token AND) ──► search results
//! ```
//!
//! # Organization
//!
//! - [`criteria`]: Filter rules and their predicates
//! - `sort`: The three-key stable display ordering
//! - `search`: Token-AND substring search with politician fallback
//!
//! # Example
//!
//! ```
//! use civiclists::{Campaign, FilterCriterion, FilterRule, ListEngine};
//!
//! let engine = ListEngine::with_today(20_240_101);
//! let raw = vec![Campaign {
//!     title: "Jane for Council".to_string(),
//!     final_election_date_as_integer: 20_241_105,
//!     ..Campaign::default()
//! }];
//! let criteria = vec![FilterCriterion::selected(FilterRule::UpcomingElectionsOnly)];
//!
//! let derived = engine.derive(&raw, &criteria, "jane");
//! assert_eq!(derived.filtered_list.len(), 1);
//! assert_eq!(derived.search_results.len(), 1);
//! ```

pub mod criteria;
mod search;
mod sort;

pub use criteria::{FilterCriterion, FilterRule};

use crate::domain::Campaign;
use crate::infrastructure::{dates, regions};

/// Output of one derivation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedLists {
    /// Campaigns surviving the selected criteria, normalized and in display
    /// order.
    pub filtered_list: Vec<Campaign>,

    /// Subset of `filtered_list` matching the search text. Empty whenever the
    /// search text is empty; never aliases `filtered_list`.
    pub search_results: Vec<Campaign>,
}

/// The campaign list derivation engine.
///
/// Stateless apart from its clock: by default "today" is read from the system
/// clock at each derivation, while [`ListEngine::with_today`] pins it to a
/// fixed `YYYYMMDD` integer for deterministic behavior in hosts and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListEngine {
    today_override: Option<u32>,
}

impl ListEngine {
    /// Creates an engine that reads "today" from the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with "today" pinned to a fixed `YYYYMMDD` integer.
    #[must_use]
    pub fn with_today(today_as_integer: u32) -> Self {
        Self {
            today_override: Some(today_as_integer),
        }
    }

    fn today_as_integer(self) -> u32 {
        self.today_override.unwrap_or_else(dates::today_as_integer)
    }

    /// Derives the display and search lists from a raw campaign snapshot.
    ///
    /// Applies the selected criteria (logical AND), normalizes survivors,
    /// sorts them into display order, and, when `search_text` is non-empty,
    /// computes the search subset of the result.
    ///
    /// # Parameters
    ///
    /// * `raw_list` - Current store snapshot
    /// * `criteria` - Parent-supplied filter criteria; deselected entries are inert
    /// * `search_text` - Current search box contents; empty disables the search pass
    ///
    /// # Returns
    ///
    /// A [`DerivedLists`] with the filtered display list and the search
    /// results. An empty `raw_list` yields empty outputs.
    #[must_use]
    pub fn derive(
        &self,
        raw_list: &[Campaign],
        criteria: &[FilterCriterion],
        search_text: &str,
    ) -> DerivedLists {
        let _span = tracing::debug_span!(
            "derive",
            raw = raw_list.len(),
            criteria = criteria.len(),
            search_len = search_text.len()
        )
        .entered();

        let today = self.today_as_integer();

        let mut filtered_list: Vec<Campaign> = raw_list
            .iter()
            .filter(|campaign| criteria.iter().all(|criterion| criterion.accepts(campaign, today)))
            .map(Self::normalize)
            .collect();

        sort::sort_for_display(&mut filtered_list);

        let search_results = if search_text.is_empty() {
            Vec::new()
        } else {
            search::search(&filtered_list, search_text)
        };

        tracing::debug!(
            filtered = filtered_list.len(),
            results = search_results.len(),
            "derivation complete"
        );

        DerivedLists {
            filtered_list,
            search_results,
        }
    }

    /// Produces the display-ready copy of a surviving campaign.
    ///
    /// Resolves the region name from the state code; unknown codes resolve to
    /// an empty name. Text fields absent at ingestion are already empty
    /// strings, so no further defaulting is needed here.
    fn normalize(campaign: &Campaign) -> Campaign {
        let mut normalized = campaign.clone();
        normalized.state_name = regions::region_name(&campaign.state_code)
            .unwrap_or("")
            .to_string();
        normalized
    }
}
