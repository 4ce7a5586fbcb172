//! Persian date representation.
//!
//! [`PersianDate`] is an immutable value: every derived field (weekday, leap
//! status, year progress, the equivalent Gregorian date) is computed at once
//! when the value is built, so a partially filled date can never be observed.
//!
//! # Construction
//!
//! - [`PersianDate::new`] / [`PersianDate::with_time`] validate a Persian
//!   year/month/day and derive everything else through the Gregorian
//!   calendar.
//! - `From<NaiveDate>` / `From<NaiveDateTime>` convert from Gregorian and
//!   cannot fail.
//!
//! # Equality
//!
//! Two dates are equal when year, month and day match. The time of day is
//! carried along but ignored by `==`, hashing and ordering.
//!
//! # Examples
//!
//! ```
//! use persia::PersianDate;
//! let d = PersianDate::new(1402, 12, 20)?;
//! assert_eq!(d.to_string(), "1402/12/20");
//! assert_eq!(d.weekday_index(), 1); // Sunday
//! assert_eq!(d.to_naive_date().to_string(), "2024-03-10");
//! # Ok::<(), persia::PersiaError>(())
//! ```
//!
//! Navigation rolls over months and years:
//! ```
//! use persia::PersianDate;
//! let last = PersianDate::new(1402, 12, 29)?;
//! assert_eq!(last.next_day(), Some(PersianDate::new(1403, 1, 1)?));
//! # Ok::<(), persia::PersiaError>(())
//! ```

use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday};

use crate::{
    Clock, Locale,
    constants::DAYS_IN_WEEK,
    convert::{days_from_ce, persian_from_days_from_ce, persian_to_gregorian_date, weekday_index},
    leap::{days_in_month, days_in_year, is_leap_year},
};

#[derive(Debug, Clone, Copy)]
pub struct PersianDate {
    year: i32,
    month: u8,
    day: u8,
    time: NaiveTime,
    weekday_index: u8,
    is_leap_year: bool,
    days_in_month: u8,
    day_of_year: u16,
    days_remaining_in_year: u16,
    gregorian: NaiveDate,
}

impl PersianDate {
    /// Build a Persian date at midnight.
    ///
    /// # Errors
    ///
    /// [`crate::PersiaError::InvalidMonth`] or
    /// [`crate::PersiaError::InvalidDay`] for a date that does not exist, or
    /// [`crate::PersiaError::OutOfRange`] if it has no Gregorian equivalent.
    pub fn new(year: i32, month: u8, day: u8) -> crate::Result<Self> {
        Self::with_time(year, month, day, NaiveTime::default())
    }

    /// Build a Persian date with a time of day.
    ///
    /// # Errors
    ///
    /// Same as [`PersianDate::new`].
    pub fn with_time(year: i32, month: u8, day: u8, time: NaiveTime) -> crate::Result<Self> {
        let gregorian = persian_to_gregorian_date(year, month, day)?;
        Ok(Self::from_gregorian(gregorian, time))
    }

    /// The current local date and time according to `clock`.
    pub fn today(clock: &impl Clock) -> Self {
        clock.now().into()
    }

    pub(crate) fn from_gregorian(gregorian: NaiveDate, time: NaiveTime) -> Self {
        let day_number = days_from_ce(gregorian);
        let ymd = persian_from_days_from_ce(day_number);
        let is_leap_year = is_leap_year(ymd.year);
        let days_in_month = days_in_month(ymd.month, is_leap_year).unwrap_or_default();

        PersianDate {
            year: ymd.year,
            month: ymd.month,
            day: ymd.day,
            time,
            weekday_index: weekday_index(day_number),
            is_leap_year,
            days_in_month,
            day_of_year: ymd.day_of_year,
            days_remaining_in_year: days_in_year(ymd.year) - ymd.day_of_year,
            gregorian,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Month of the year, 1 (Farvardin) to 12 (Esfand).
    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn time(&self) -> NaiveTime {
        self.time
    }

    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    pub fn minute(&self) -> u32 {
        self.time.minute()
    }

    pub fn second(&self) -> u32 {
        self.time.second()
    }

    pub fn millisecond(&self) -> u32 {
        self.time.nanosecond() / 1_000_000
    }

    /// Day of the Persian week, Saturday = 0 through Friday = 6.
    pub fn weekday_index(&self) -> u8 {
        self.weekday_index
    }

    pub fn weekday(&self) -> Weekday {
        self.gregorian.weekday()
    }

    /// Persian name of the weekday, e.g. `"جمعه"`.
    pub fn weekday_name(&self) -> &'static str {
        Locale::PERSIAN.weekday_name(self.weekday_index)
    }

    /// Persian name of the month, e.g. `"اسفند"`.
    pub fn month_name(&self) -> &'static str {
        Locale::PERSIAN.month_name(self.month)
    }

    /// Number of days in this date's month.
    pub fn days_in_month(&self) -> u8 {
        self.days_in_month
    }

    pub fn is_leap_year(&self) -> bool {
        self.is_leap_year
    }

    /// 1-based day of the year; Nowruz is day 1.
    pub fn day_of_year(&self) -> u16 {
        self.day_of_year
    }

    /// Days left until the end of the year; 0 on the last day.
    pub fn days_remaining_in_year(&self) -> u16 {
        self.days_remaining_in_year
    }

    /// Equivalent Gregorian date.
    pub fn to_naive_date(&self) -> NaiveDate {
        self.gregorian
    }

    /// Equivalent Gregorian date and time.
    pub fn to_naive_date_time(&self) -> NaiveDateTime {
        self.gregorian.and_time(self.time)
    }

    /// Move by `days` (negative moves back). The time of day is kept.
    ///
    /// Returns `None` if the result leaves the representable range.
    pub fn add_days(&self, days: i64) -> Option<Self> {
        let gregorian = if days >= 0 {
            self.gregorian.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.gregorian.checked_sub_days(Days::new(days.unsigned_abs()))
        }?;
        Some(Self::from_gregorian(gregorian, self.time))
    }

    pub fn next_day(&self) -> Option<Self> {
        self.add_days(1)
    }

    pub fn previous_day(&self) -> Option<Self> {
        self.add_days(-1)
    }

    /// The Saturday-to-Friday week containing this date.
    pub fn current_week(&self) -> Vec<Self> {
        consecutive(
            self.add_days(-i64::from(self.weekday_index)),
            DAYS_IN_WEEK,
        )
    }

    pub fn next_week(&self) -> Vec<Self> {
        self.add_days(i64::from(DAYS_IN_WEEK))
            .map(|d| d.current_week())
            .unwrap_or_default()
    }

    pub fn previous_week(&self) -> Vec<Self> {
        self.add_days(-i64::from(DAYS_IN_WEEK))
            .map(|d| d.current_week())
            .unwrap_or_default()
    }

    /// Every day of this date's month, in order.
    pub fn current_month(&self) -> Vec<Self> {
        consecutive(self.first_of_month(), self.days_in_month)
    }

    pub fn next_month(&self) -> Vec<Self> {
        let to_next = i64::from(self.days_in_month - self.day) + 1;
        self.add_days(to_next)
            .map(|d| d.current_month())
            .unwrap_or_default()
    }

    pub fn previous_month(&self) -> Vec<Self> {
        self.first_of_month()
            .and_then(|d| d.previous_day())
            .map(|d| d.current_month())
            .unwrap_or_default()
    }

    fn first_of_month(&self) -> Option<Self> {
        self.add_days(1 - i64::from(self.day))
    }
}

/// `count` consecutive days starting at `start`, cut short at the end of the
/// representable range.
fn consecutive(start: Option<PersianDate>, count: u8) -> Vec<PersianDate> {
    std::iter::successors(start, PersianDate::next_day)
        .take(usize::from(count))
        .collect()
}

impl PartialEq for PersianDate {
    fn eq(&self, other: &Self) -> bool {
        (self.year, self.month, self.day) == (other.year, other.month, other.day)
    }
}

impl Eq for PersianDate {}

impl Hash for PersianDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.year, self.month, self.day).hash(state);
    }
}

impl PartialOrd for PersianDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PersianDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl std::fmt::Display for PersianDate {
    /// Format as `YYYY/MM/DD` if the year is in `[0, 9999]`, otherwise fall
    /// back to the unpadded year:
    /// ```
    /// use persia::PersianDate;
    /// assert_eq!(PersianDate::new(1403, 1, 3)?.to_string(), "1403/01/03");
    /// assert_eq!(PersianDate::new(-5, 7, 9)?.to_string(), "-5/07/09");
    /// # Ok::<(), persia::PersiaError>(())
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.year >= 0 && self.year < 10_000 {
            write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
        } else {
            write!(f, "{}/{:02}/{:02}", self.year, self.month, self.day)
        }
    }
}

impl From<NaiveDate> for PersianDate {
    /// Gregorian date at midnight.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use persia::PersianDate;
    /// let d: PersianDate = NaiveDate::from_ymd_opt(2024, 3, 22).unwrap().into();
    /// assert_eq!(d.to_string(), "1403/01/03");
    /// ```
    fn from(date: NaiveDate) -> Self {
        PersianDate::from_gregorian(date, NaiveTime::default())
    }
}

impl From<NaiveDateTime> for PersianDate {
    fn from(date_time: NaiveDateTime) -> Self {
        PersianDate::from_gregorian(date_time.date(), date_time.time())
    }
}

impl From<PersianDate> for NaiveDate {
    fn from(date: PersianDate) -> Self {
        date.to_naive_date()
    }
}

impl From<&PersianDate> for NaiveDate {
    fn from(date: &PersianDate) -> Self {
        date.to_naive_date()
    }
}

impl From<PersianDate> for NaiveDateTime {
    fn from(date: PersianDate) -> Self {
        date.to_naive_date_time()
    }
}
