//! Crate prelude: convenient re-exports of the types and functions most
//! callers need.
//!
//! ```
//! use persia::prelude::*;
//!
//! let date = PersianDateBuilder::default()
//!     .with_year(1402)
//!     .with_month(12)
//!     .with_day(20)
//!     .build()?;
//! assert!(!is_leap_year(date.year()));
//! assert_eq!(Formatter::default().short(&date), "۱۴۰۲/۱۲/۲۰");
//! # Ok::<(), PersiaError>(())
//! ```
//!
//! ## Re-exported Items
//!
//! - Date value & builder: [`PersianDate`], [`PersianDateBuilder`]
//! - Conversions: [`gregorian_to_persian`], [`gregorian_date_to_persian`],
//!   [`persian_to_gregorian`], [`persian_to_gregorian_date`],
//!   [`persian_to_gregorian_now`]
//! - Calendar rules: [`is_leap_year`], [`days_in_month`], [`days_in_year`]
//! - Rendering: [`Formatter`], [`Locale`], [`to_persian_digits`]
//! - Clocks: [`Clock`], [`FixedClock`] (and `SystemClock` with the `clock`
//!   feature)
//! - Errors: [`PersiaError`], [`Result`]

pub use crate::{
    // Core types
    PersianDate,
    PersianDateBuilder,
    PersiaError,
    Result,
    // Conversions
    gregorian_to_persian,
    gregorian_date_to_persian,
    persian_to_gregorian,
    persian_to_gregorian_date,
    persian_to_gregorian_now,
    // Calendar rules
    is_leap_year,
    days_in_month,
    days_in_year,
    // Rendering
    Formatter,
    Locale,
    to_persian_digits,
    // Clocks
    Clock,
    FixedClock,
};

#[cfg(feature = "clock")]
pub use crate::SystemClock;
