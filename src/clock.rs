//! Wall-clock access.
//!
//! Conversions never read the system time on their own. Anything that needs
//! "now" takes a [`Clock`], so tests can pin time with [`FixedClock`] while
//! applications use [`SystemClock`] (requires the `clock` feature).

use chrono::{NaiveDateTime, NaiveTime};

/// Source of the current local date and time.
pub trait Clock {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Current local time of day.
    fn time_of_day(&self) -> NaiveTime {
        self.now().time()
    }
}

/// A clock frozen at a single instant.
///
/// ```
/// use chrono::NaiveDate;
/// use persia::{Clock, FixedClock};
/// let instant = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap().and_hms_opt(9, 30, 0).unwrap();
/// let clock = FixedClock::new(instant);
/// assert_eq!(clock.now(), instant);
/// assert_eq!(clock.time_of_day().to_string(), "09:30:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(instant: NaiveDateTime) -> Self {
        FixedClock(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// The process's local wall clock.
#[cfg(feature = "clock")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

#[cfg(feature = "clock")]
impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        chrono::Local::now().naive_local()
    }
}
