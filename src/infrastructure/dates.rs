//! Integer-encoded date helpers.
//!
//! Election dates travel through the system as `YYYYMMDD` integers, so "is the
//! election still upcoming" reduces to an integer comparison against today's
//! encoding and the election year is a single division.

use chrono::{Datelike, Local};

/// Returns the current local date encoded as a `YYYYMMDD` integer.
///
/// # Examples
///
/// ```
/// let today = civiclists::infrastructure::dates::today_as_integer();
/// assert!(today > 20_000_000);
/// ```
#[must_use]
pub fn today_as_integer() -> u32 {
    let today = Local::now().date_naive();
    #[allow(clippy::cast_sign_loss)]
    let year = today.year() as u32;
    year * 10_000 + today.month() * 100 + today.day()
}

/// Extracts the year from a `YYYYMMDD` date integer.
///
/// A zero date (absent) yields year `0`, which never equals a real filter year.
///
/// # Examples
///
/// ```
/// use civiclists::infrastructure::dates::election_year;
///
/// assert_eq!(election_year(20241105), 2024);
/// assert_eq!(election_year(0), 0);
/// ```
#[must_use]
pub fn election_year(date_as_integer: u32) -> i32 {
    #[allow(clippy::cast_possible_wrap)]
    let year = (date_as_integer / 10_000) as i32;
    year
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn election_year_drops_month_and_day() {
        assert_eq!(election_year(20241105), 2024);
        assert_eq!(election_year(20240101), 2024);
        assert_eq!(election_year(19991231), 1999);
    }

    #[test]
    fn today_is_a_plausible_date_integer() {
        let today = today_as_integer();
        let month = (today / 100) % 100;
        let day = today % 100;
        assert!((1..=12).contains(&month));
        assert!((1..=31).contains(&day));
    }
}
