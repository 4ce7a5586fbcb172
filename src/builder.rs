use chrono::NaiveTime;

use crate::{PersianDate, PersiaError};

/// The builder helps creating valid Persian dates from raw numbers.
///
/// ```
/// use persia::PersianDateBuilder;
/// let date = PersianDateBuilder::default()
///     .with_year(1403)
///     .with_month(1)
///     .with_day(3)
///     .with_time(14, 30, 0, 0)?
///     .build()?;
/// assert_eq!(date.to_long_persian_string(true), "۱۴:۳۰ جمعه ۳ فروردین ۱۴۰۳");
/// # Ok::<(), persia::PersiaError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PersianDateBuilder {
    year: i32,
    month: u8,
    day: u8,
    time: NaiveTime,
}

impl Default for PersianDateBuilder {
    /// Starts at 1/01/01, midnight.
    fn default() -> Self {
        PersianDateBuilder {
            year: 1,
            month: 1,
            day: 1,
            time: NaiveTime::default(),
        }
    }
}

impl PersianDateBuilder {
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Month and day are checked together in [`Self::build`], since the
    /// length of Esfand depends on the year.
    pub fn with_month(mut self, month: u8) -> Self {
        self.month = month;
        self
    }

    pub fn with_day(mut self, day: u8) -> Self {
        self.day = day;
        self
    }

    /// Set the time of day.
    pub fn with_time(
        mut self,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> crate::Result<Self> {
        self.time = NaiveTime::from_hms_milli_opt(hour, minute, second, millisecond).ok_or(
            PersiaError::InvalidTime {
                hour,
                minute,
                second,
                millisecond,
            },
        )?;
        Ok(self)
    }

    pub fn with_naive_time(mut self, time: NaiveTime) -> Self {
        self.time = time;
        self
    }

    /// Builds the Persian date
    pub fn build(self) -> crate::Result<PersianDate> {
        PersianDate::with_time(self.year, self.month, self.day, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_validates_on_build() {
        let builder = PersianDateBuilder::default()
            .with_year(1402)
            .with_month(12)
            .with_day(30);
        match builder.build() {
            Err(PersiaError::InvalidDay { days_in_month, .. }) => assert_eq!(days_in_month, 29),
            other => panic!("Unexpected result: {other:?}"),
        }
        assert!(builder.with_year(1404).build().is_ok());
    }

    #[test]
    fn test_builder_time() {
        let time = NaiveTime::from_hms_milli_opt(7, 8, 9, 10).unwrap();
        let date = PersianDateBuilder::default()
            .with_year(1403)
            .with_naive_time(time)
            .build()
            .unwrap();
        assert_eq!(date.time(), time);
        assert_eq!(date.millisecond(), 10);
        assert!(PersianDateBuilder::default().with_time(12, 60, 0, 0).is_err());
        assert!(PersianDateBuilder::default().with_time(12, 0, 0, 2000).is_err());
    }
}
