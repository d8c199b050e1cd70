//! Parent-supplied list configuration.

use crate::engine::FilterCriterion;

/// Configuration handed down by the parent view on every render.
///
/// The criteria vector is deliberately not deep-compared: the parent bumps
/// `list_mode_filters_timestamp` whenever it mutates the criteria, and that
/// timestamp (together with `search_text`) is the recompute signal.
#[derive(Debug, Clone, Default)]
pub struct ListProps {
    /// Suppress the heading even when `title_text` is present.
    pub hide_title: bool,

    /// Filter criteria to apply; deselected entries are inert.
    pub list_mode_filters: Vec<FilterCriterion>,

    /// Stamp the parent bumps when it changes `list_mode_filters`.
    pub list_mode_filters_timestamp: i64,

    /// Current search box contents; empty disables the search pass.
    pub search_text: String,

    /// Heading text shown above the list when campaigns are present.
    pub title_text: String,
}
