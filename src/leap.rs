//! Leap year rule and month/year lengths.
//!
//! Persian leap years are decided by a simplified cycle rule: the year is
//! folded into the 2820 year grand cycle, then into its 128 year block, and
//! every fourth ordinal inside the block is leap. This is not the
//! astronomical calendar; it is the rule every conversion in this crate
//! agrees on.
//!
//! ```
//! use persia::{days_in_month, is_leap_year};
//! assert!(!is_leap_year(1403));
//! assert!(is_leap_year(1404));
//! assert_eq!(days_in_month(12, is_leap_year(1404)), Some(30));
//! ```

use crate::constants::{
    COMMON_YEAR_DAYS, GRAND_CYCLE_YEARS, LEAP_ESFAND_LENGTH, LEAP_YEAR_DAYS, MONTH_LENGTHS,
    SMALL_CYCLE_YEARS,
};

/// Returns `true` if `year` is a leap year in the Persian calendar.
///
/// Defined for every `i32`, including zero and negative years.
pub const fn is_leap_year(year: i32) -> bool {
    let year_in_cycle = year.rem_euclid(GRAND_CYCLE_YEARS);
    let ordinal = year_in_cycle % SMALL_CYCLE_YEARS;
    ordinal % 4 == 0
}

/// Number of days in `month` (1–12), or `None` if the month is out of range.
pub const fn days_in_month(month: u8, leap: bool) -> Option<u8> {
    match month {
        12 if leap => Some(LEAP_ESFAND_LENGTH),
        1..=12 => Some(MONTH_LENGTHS[month as usize - 1]),
        _ => None,
    }
}

/// Number of days in the Persian `year` (365 or 366).
pub const fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        LEAP_YEAR_DAYS
    } else {
        COMMON_YEAR_DAYS
    }
}

/// Number of days in one full grand cycle. The leap rule repeats every
/// grand cycle, so any 2820 consecutive years add up to this value.
pub const GRAND_CYCLE_DAYS: i64 = grand_cycle_days();

const fn grand_cycle_days() -> i64 {
    let mut total = 0i64;
    let mut year = 0;
    while year < GRAND_CYCLE_YEARS {
        total += days_in_year(year) as i64;
        year += 1;
    }
    total
}

/// Days from Nowruz to the first day of `month` (month 1 yields 0).
pub(crate) fn days_before_month(month: u8, leap: bool) -> u16 {
    (1..month)
        .filter_map(|m| days_in_month(m, leap))
        .map(u16::from)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_years() {
        assert!(!is_leap_year(1401));
        assert!(!is_leap_year(1402));
        assert!(!is_leap_year(1403));
        assert!(is_leap_year(1404));
        assert!(is_leap_year(0));
    }

    #[test]
    fn test_negative_years_follow_the_cycle() {
        assert_eq!(is_leap_year(-4), is_leap_year(GRAND_CYCLE_YEARS - 4));
        assert_eq!(is_leap_year(-1), is_leap_year(GRAND_CYCLE_YEARS - 1));
    }

    #[test]
    fn test_grand_cycle_is_periodic() {
        for year in [1, 622, 1403, 2000] {
            assert_eq!(is_leap_year(year), is_leap_year(year + GRAND_CYCLE_YEARS));
        }
        assert_eq!(GRAND_CYCLE_DAYS, 2820 * 365 + 705);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(1, false), Some(31));
        assert_eq!(days_in_month(6, true), Some(31));
        assert_eq!(days_in_month(7, false), Some(30));
        assert_eq!(days_in_month(11, true), Some(30));
        assert_eq!(days_in_month(12, false), Some(29));
        assert_eq!(days_in_month(12, true), Some(30));
        assert_eq!(days_in_month(0, false), None);
        assert_eq!(days_in_month(13, true), None);
    }

    #[test]
    fn test_days_before_month() {
        assert_eq!(days_before_month(1, false), 0);
        assert_eq!(days_before_month(7, false), 186);
        assert_eq!(days_before_month(12, true), 336);
        assert_eq!(days_before_month(13, false), 365);
        assert_eq!(days_before_month(13, true), 366);
    }
}
