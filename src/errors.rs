#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersiaError {
    #[error("Invalid Persian month: {0} (expected 1-12)")]
    InvalidMonth(u8),

    #[error("Invalid day {day} for Persian {year}/{month:02}: month has {days_in_month} days")]
    InvalidDay {
        year: i32,
        month: u8,
        day: u8,
        days_in_month: u8,
    },

    #[error("Invalid time of day: {hour:02}:{minute:02}:{second:02}.{millisecond:03}")]
    InvalidTime {
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    },

    #[error("Persian date {year}/{month:02}/{day:02} is outside the representable Gregorian range")]
    OutOfRange { year: i32, month: u8, day: u8 },
}

impl PersiaError {
    /// `true` for a malformed month/day combination.
    pub fn is_invalid_date(&self) -> bool {
        matches!(
            self,
            PersiaError::InvalidMonth(_) | PersiaError::InvalidDay { .. }
        )
    }
}
