//! Conversion between the Gregorian and Persian calendars.
//!
//! Both directions count days relative to a reference Nowruz (see
//! [`crate::constants`]). Whole grand cycles are skipped first because each
//! one has exactly [`GRAND_CYCLE_DAYS`]; what remains is walked one year at a
//! time, forward or backward, with the leap rule from [`crate::leap`], then
//! month by month.
//!
//! # Examples
//!
//! Gregorian to Persian:
//! ```
//! use chrono::NaiveDate;
//! use persia::gregorian_date_to_persian;
//! let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
//! let persian = gregorian_date_to_persian(date);
//! assert_eq!((persian.year(), persian.month(), persian.day()), (1402, 12, 20));
//! ```
//!
//! Persian to Gregorian:
//! ```
//! use chrono::NaiveDate;
//! use persia::persian_to_gregorian_date;
//! let date = persian_to_gregorian_date(1403, 1, 1).unwrap();
//! assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
//! # Ok::<(), persia::PersiaError>(())
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    Clock, PersianDate, PersiaError,
    constants::{DAYS_IN_WEEK, GRAND_CYCLE_YEARS, REFERENCE_NOWRUZ_DAYS_FROM_CE, REFERENCE_YEAR},
    leap::{GRAND_CYCLE_DAYS, days_before_month, days_in_month, days_in_year, is_leap_year},
};

/// Persian year/month/day plus the 1-based day of year, as computed from a
/// Gregorian day number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PersianYmd {
    pub year: i32,
    pub month: u8,
    pub day: u8,
    pub day_of_year: u16,
}

/// Convert a Gregorian date and time to a Persian date. The time of day is
/// carried over unchanged.
///
/// This direction cannot fail.
pub fn gregorian_to_persian(date_time: NaiveDateTime) -> PersianDate {
    PersianDate::from_gregorian(date_time.date(), date_time.time())
}

/// Convert a Gregorian date to a Persian date at midnight.
pub fn gregorian_date_to_persian(date: NaiveDate) -> PersianDate {
    PersianDate::from_gregorian(date, NaiveTime::default())
}

/// Convert a Persian date and time of day to the Gregorian calendar.
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use persia::persian_to_gregorian;
/// let time = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
/// let dt = persian_to_gregorian(1402, 12, 20, time)?;
/// assert_eq!(dt, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().and_time(time));
///
/// // Esfand 1402 only has 29 days.
/// assert!(persian_to_gregorian(1402, 12, 30, time).is_err());
/// # Ok::<(), persia::PersiaError>(())
/// ```
///
/// # Errors
///
/// - [`PersiaError::InvalidMonth`] if `month` is not 1–12
/// - [`PersiaError::InvalidDay`] if `day` does not exist in that month
/// - [`PersiaError::OutOfRange`] if the result is not representable
pub fn persian_to_gregorian(
    year: i32,
    month: u8,
    day: u8,
    time: NaiveTime,
) -> crate::Result<NaiveDateTime> {
    Ok(persian_to_gregorian_date(year, month, day)?.and_time(time))
}

/// Convert a Persian date to a Gregorian date, without time of day.
///
/// # Errors
///
/// Same as [`persian_to_gregorian`].
pub fn persian_to_gregorian_date(year: i32, month: u8, day: u8) -> crate::Result<NaiveDate> {
    let days = persian_to_days_from_ce(year, month, day)?;
    i32::try_from(days)
        .ok()
        .and_then(NaiveDate::from_num_days_from_ce_opt)
        .ok_or(PersiaError::OutOfRange { year, month, day })
}

/// Convert a Persian date to the Gregorian calendar, taking the time of day
/// from `clock`.
///
/// ```
/// use chrono::NaiveDate;
/// use persia::{FixedClock, persian_to_gregorian_now};
/// let now = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap().and_hms_opt(8, 15, 0).unwrap();
/// let dt = persian_to_gregorian_now(1403, 1, 1, &FixedClock::new(now))?;
/// assert_eq!(dt.to_string(), "2024-03-20 08:15:00");
/// # Ok::<(), persia::PersiaError>(())
/// ```
///
/// # Errors
///
/// Same as [`persian_to_gregorian`].
pub fn persian_to_gregorian_now(
    year: i32,
    month: u8,
    day: u8,
    clock: &impl Clock,
) -> crate::Result<NaiveDateTime> {
    persian_to_gregorian(year, month, day, clock.time_of_day())
}

/// Check `month` and `day` against the month lengths of `year`.
pub(crate) fn validate(year: i32, month: u8, day: u8) -> crate::Result<()> {
    let Some(days_in_month) = days_in_month(month, is_leap_year(year)) else {
        log::debug!("rejecting Persian date {year}/{month}/{day}: month out of range");
        return Err(PersiaError::InvalidMonth(month));
    };
    if day == 0 || day > days_in_month {
        log::debug!("rejecting Persian date {year}/{month}/{day}: month has {days_in_month} days");
        return Err(PersiaError::InvalidDay {
            year,
            month,
            day,
            days_in_month,
        });
    }
    Ok(())
}

/// Gregorian day number (`num_days_from_ce`) of a validated Persian date.
fn persian_to_days_from_ce(year: i32, month: u8, day: u8) -> crate::Result<i64> {
    validate(year, month, day)?;
    let leap = is_leap_year(year);
    let offset = days_before_year(year)
        + i64::from(days_before_month(month, leap))
        + i64::from(day)
        - 1;
    Ok(i64::from(REFERENCE_NOWRUZ_DAYS_FROM_CE) + offset)
}

/// Signed number of days from the reference Nowruz to Nowruz of `year`.
fn days_before_year(year: i32) -> i64 {
    let target = i64::from(year);
    let reference = i64::from(REFERENCE_YEAR);
    let cycle = i64::from(GRAND_CYCLE_YEARS);

    // Whole grand cycles toward the reference, then at most one partial
    // cycle walked year by year in whichever direction is needed.
    let cycles = (target - reference) / cycle;
    let mut current = reference + cycles * cycle;
    let mut days = cycles * GRAND_CYCLE_DAYS;

    while current < target {
        days += i64::from(days_in_year(cycle_year(current)));
        current += 1;
    }
    while current > target {
        current -= 1;
        days -= i64::from(days_in_year(cycle_year(current)));
    }
    days
}

/// Split a Gregorian day number into Persian year, month and day.
pub(crate) fn persian_from_days_from_ce(days_from_ce: i32) -> PersianYmd {
    let offset = i64::from(days_from_ce) - i64::from(REFERENCE_NOWRUZ_DAYS_FROM_CE);
    let cycles = offset / GRAND_CYCLE_DAYS;
    let mut year = i64::from(REFERENCE_YEAR) + cycles * i64::from(GRAND_CYCLE_YEARS);
    let mut remaining = offset - cycles * GRAND_CYCLE_DAYS;

    while remaining < 0 {
        year -= 1;
        remaining += i64::from(days_in_year(cycle_year(year)));
    }
    loop {
        let length = i64::from(days_in_year(cycle_year(year)));
        if remaining < length {
            break;
        }
        remaining -= length;
        year += 1;
    }

    // chrono keeps Gregorian years within +-262_143, so this always fits.
    let year = year as i32;
    let day_of_year = remaining as u16 + 1;
    let leap = is_leap_year(year);

    let mut day_in_year = remaining as u16;
    let mut month = 1;
    while let Some(length) = days_in_month(month, leap) {
        if day_in_year < u16::from(length) {
            break;
        }
        day_in_year -= u16::from(length);
        month += 1;
    }

    let result = PersianYmd {
        year,
        month,
        day: day_in_year as u8 + 1,
        day_of_year,
    };
    log::trace!("Gregorian day {days_from_ce} -> Persian {result:?}");
    result
}

/// Persian weekday index (Saturday = 0 ... Friday = 6) of a Gregorian day
/// number. Day 1 (0001-01-01) was a Monday, index 2.
pub(crate) fn weekday_index(days_from_ce: i32) -> u8 {
    (i64::from(days_from_ce) + 1).rem_euclid(i64::from(DAYS_IN_WEEK)) as u8
}

/// Fold a wide year into `i32` for the leap rule without changing its
/// position in the grand cycle.
fn cycle_year(year: i64) -> i32 {
    year.rem_euclid(i64::from(GRAND_CYCLE_YEARS)) as i32
}

/// Day number helper shared with [`PersianDate`].
pub(crate) fn days_from_ce(date: NaiveDate) -> i32 {
    date.num_days_from_ce()
}
