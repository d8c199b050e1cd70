//! Display ordering for campaign lists.
//!
//! Ordering is produced by three sequential full stable sorts, so the
//! last-applied key dominates and earlier keys survive as tie-breakers:
//!
//! 1. title, ascending and case-sensitive
//! 2. supporter count, descending
//! 3. explicit order hint, ascending, with unset hints pushed to the end
//!
//! Net effect: explicit order hints take final precedence, ties break by
//! popularity, remaining ties by title.

use std::cmp::Ordering;

use crate::domain::Campaign;

/// Order hint sentinel for campaigns without an explicit position.
const UNSET_HINT: u32 = u32::MAX;

/// Compares two campaigns alphabetically by title.
///
/// An empty left-hand title compares equal regardless of the right-hand side;
/// an empty right-hand title stands in as the literal string `"x"`. Both
/// fallbacks reproduce the long-standing display ordering of sparse records.
pub(crate) fn by_title(first: &Campaign, second: &Campaign) -> Ordering {
    let second_title = if second.title.is_empty() {
        "x"
    } else {
        second.title.as_str()
    };
    if first.title.is_empty() {
        Ordering::Equal
    } else {
        first.title.as_str().cmp(second_title)
    }
}

/// Compares two campaigns by supporter count, most supported first.
pub(crate) fn by_supporters_desc(first: &Campaign, second: &Campaign) -> Ordering {
    second.supporters_count.cmp(&first.supporters_count)
}

/// Compares two campaigns by explicit order hint, hinted entries first.
///
/// Hints order 1, 2, 3, ...; a hint of `0` means unset and sorts after every
/// hinted entry.
pub(crate) fn by_order_hint(first: &Campaign, second: &Campaign) -> Ordering {
    effective_hint(first).cmp(&effective_hint(second))
}

fn effective_hint(campaign: &Campaign) -> u32 {
    if campaign.order_in_list == 0 {
        UNSET_HINT
    } else {
        campaign.order_in_list
    }
}

/// Sorts a campaign list into display order.
///
/// Applies the three stable sorts in sequence. Sorting is idempotent: a second
/// pass over already-sorted input leaves the order unchanged.
pub(crate) fn sort_for_display(list: &mut [Campaign]) {
    list.sort_by(by_title);
    list.sort_by(by_supporters_desc);
    list.sort_by(by_order_hint);
}
