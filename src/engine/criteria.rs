//! Filter criteria for campaign list narrowing.
//!
//! A criterion pairs a [`FilterRule`] with a `selected` flag. Deselected
//! criteria are inert: they accept every campaign, so a parent can hand the
//! whole criteria set down on every change and toggle entries in place.

use crate::domain::Campaign;
use crate::infrastructure::dates;

/// A filter rule that narrows the campaign list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterRule {
    /// Keep campaigns whose final election date is today or later.
    ///
    /// The boundary is inclusive: an election dated today still counts as
    /// upcoming.
    UpcomingElectionsOnly,

    /// Keep campaigns whose final election falls in the given year.
    YearEquals(i32),
}

/// A single named, independently toggleable filter rule.
///
/// Selected criteria combine with logical AND; the result is independent of
/// the order they appear in, since each is a pure narrowing predicate.
///
/// # Examples
///
/// ```
/// use civiclists::{FilterCriterion, FilterRule};
///
/// let criteria = vec![
///     FilterCriterion::selected(FilterRule::UpcomingElectionsOnly),
///     FilterCriterion::deselected(FilterRule::YearEquals(2024)),
/// ];
/// assert!(criteria[0].selected);
/// assert!(!criteria[1].selected);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCriterion {
    /// The rule this criterion applies when selected.
    pub rule: FilterRule,

    /// Whether the rule is active. A deselected criterion accepts everything.
    pub selected: bool,
}

impl FilterCriterion {
    /// Creates a criterion with the rule active.
    #[must_use]
    pub fn selected(rule: FilterRule) -> Self {
        Self { rule, selected: true }
    }

    /// Creates a criterion with the rule inert.
    #[must_use]
    pub fn deselected(rule: FilterRule) -> Self {
        Self { rule, selected: false }
    }

    /// Whether this criterion lets the campaign through.
    ///
    /// `today_as_integer` is the `YYYYMMDD` encoding the upcoming-elections
    /// rule compares against.
    pub(crate) fn accepts(&self, campaign: &Campaign, today_as_integer: u32) -> bool {
        if !self.selected {
            return true;
        }
        match self.rule {
            FilterRule::UpcomingElectionsOnly => {
                campaign.final_election_date_as_integer >= today_as_integer
            }
            FilterRule::YearEquals(year) => {
                dates::election_year(campaign.final_election_date_as_integer) == year
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign_with_election(date: u32) -> Campaign {
        Campaign {
            final_election_date_as_integer: date,
            ..Campaign::default()
        }
    }

    #[test]
    fn upcoming_boundary_is_inclusive() {
        let criterion = FilterCriterion::selected(FilterRule::UpcomingElectionsOnly);
        let today = 20_240_101;

        assert!(!criterion.accepts(&campaign_with_election(20_231_231), today));
        assert!(criterion.accepts(&campaign_with_election(20_240_101), today));
        assert!(criterion.accepts(&campaign_with_election(20_240_102), today));
    }

    #[test]
    fn year_filter_compares_extracted_year() {
        let criterion = FilterCriterion::selected(FilterRule::YearEquals(2024));

        assert!(criterion.accepts(&campaign_with_election(20_240_601), 0));
        assert!(!criterion.accepts(&campaign_with_election(20_251_103), 0));
        assert!(!criterion.accepts(&campaign_with_election(0), 0));
    }

    #[test]
    fn deselected_criterion_accepts_everything() {
        let criterion = FilterCriterion::deselected(FilterRule::YearEquals(2024));

        assert!(criterion.accepts(&campaign_with_election(19_990_101), 0));
        assert!(criterion.accepts(&campaign_with_election(0), 0));
    }
}
