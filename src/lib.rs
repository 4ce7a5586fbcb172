//! Persian (Solar Hijri) calendar conversion and formatting.
//!
//! - [`gregorian_to_persian`] / [`persian_to_gregorian`] convert between
//!   the proleptic Gregorian calendar (as `chrono` types) and the Persian
//!   calendar.
//! - [`PersianDate`] is the immutable result, with weekday, leap status and
//!   year progress already computed, plus day/week/month navigation.
//! - [`Formatter`] and the `to_*_string` methods render dates with Persian
//!   month and weekday names and Persian-script digits.
//!
//! ```
//! use chrono::NaiveDate;
//! use persia::PersianDate;
//!
//! let date: PersianDate = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().into();
//! assert_eq!(date.to_string(), "1402/12/20");
//! assert_eq!(date.to_short_persian_string(), "۱۴۰۲/۱۲/۲۰");
//! assert_eq!(date.to_long_persian_ordinal_words(), "یکشنبه بیستم اسفند ۱۴۰۲");
//! ```
//!
//! Leap years follow a simplified 2820 year cycle rule (see [`is_leap_year`]),
//! not the astronomical Persian calendar.

pub type Result<T> = std::result::Result<T, PersiaError>;

pub mod constants;

mod errors;
pub use errors::*;

mod leap;
pub use leap::{GRAND_CYCLE_DAYS, days_in_month, days_in_year, is_leap_year};

mod convert;
pub use convert::{
    gregorian_date_to_persian, gregorian_to_persian, persian_to_gregorian,
    persian_to_gregorian_date, persian_to_gregorian_now,
};

mod clock;
pub use clock::*;

mod date;
pub use date::*;

mod builder;
pub use builder::*;

mod locale;
pub use locale::*;

pub mod format;
pub use format::Formatter;

pub mod prelude;
