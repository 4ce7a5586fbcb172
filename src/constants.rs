//! Persian calendar constants.
//!
//! These values drive both conversion directions and the leap year rule.
//!
//! Reference summary:
//! - Months 1–6: 31 days
//! - Months 7–11: 30 days
//! - Month 12: 29 days (30 in a leap year)
//! - Week starts on Saturday (index 0) and ends on Friday (index 6)
//! - Leap years repeat over a 2820 year grand cycle, split into 128 year
//!   blocks
//!
//! Years are walked from a fixed reference Nowruz instead of the historical
//! epoch of year 1, so the contemporary era lines up with the civil calendar
//! while the simplified leap rule applies in both directions.

/// Length of the leap year grand cycle, in years.
pub const GRAND_CYCLE_YEARS: i32 = 2820;

/// Length of one block inside the grand cycle, in years.
pub const SMALL_CYCLE_YEARS: i32 = 128;

/// Days per month in a common year, Farvardin first.
pub const MONTH_LENGTHS: [u8; 12] = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 29];

/// Length of Esfand (month 12) in a leap year.
pub const LEAP_ESFAND_LENGTH: u8 = 30;

/// Days in a common Persian year.
pub const COMMON_YEAR_DAYS: u16 = 365;

/// Days in a leap Persian year.
pub const LEAP_YEAR_DAYS: u16 = 366;

/// Days in a week.
pub const DAYS_IN_WEEK: u8 = 7;

/// Persian year of the reference Nowruz.
pub const REFERENCE_YEAR: i32 = 1403;

/// Gregorian 2024-03-20 (Persian 1403/01/01) as days from 0001-01-01,
/// counting 0001-01-01 as day 1 (`chrono::Datelike::num_days_from_ce`).
pub const REFERENCE_NOWRUZ_DAYS_FROM_CE: i32 = 738_965;
