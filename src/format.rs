//! Textual renderings of a [`PersianDate`].
//!
//! A [`Formatter`] borrows a [`Locale`] and turns dates into strings; it
//! performs no calendar arithmetic. Digit substitution always runs last, on
//! the fully assembled string.
//!
//! The `to_*_string` methods on [`PersianDate`] use [`Locale::PERSIAN`]:
//!
//! | Method                              | 1402/12/20 (Sunday)          |
//! |-------------------------------------|------------------------------|
//! | `to_string()`                       | `1402/12/20`                 |
//! | `to_short_persian_string()`         | `۱۴۰۲/۱۲/۲۰`                 |
//! | `to_persian_string()`               | `۲۰ اسفند ۱۴۰۲` (RTL embedded) |
//! | `to_long_persian_string(false)`     | `یکشنبه ۲۰ اسفند ۱۴۰۲`       |
//! | `to_persian_day_month_string()`     | `بیستم اسفند ۱۴۰۲`           |
//! | `to_persian_weekday_string()`       | `۱۴۰۲/۱۲/۲۰ یکشنبه`          |
//! | `to_long_persian_ordinal_words()`   | `یکشنبه بیستم اسفند ۱۴۰۲`    |

use crate::{Locale, PersianDate};

/// Unicode RIGHT-TO-LEFT EMBEDDING.
pub const RTL_EMBEDDING: char = '\u{202B}';
/// Unicode POP DIRECTIONAL FORMATTING, closes [`RTL_EMBEDDING`].
pub const POP_DIRECTIONAL_FORMATTING: char = '\u{202C}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter<'a> {
    locale: &'a Locale,
}

impl Default for Formatter<'static> {
    fn default() -> Self {
        Formatter {
            locale: &Locale::PERSIAN,
        }
    }
}

impl<'a> Formatter<'a> {
    pub fn new(locale: &'a Locale) -> Self {
        Formatter { locale }
    }

    pub fn locale(&self) -> &'a Locale {
        self.locale
    }

    /// `YYYY/MM/DD` with ASCII digits.
    pub fn numeric(&self, date: &PersianDate) -> String {
        date.to_string()
    }

    /// `YYYY/MM/DD` with locale digits.
    pub fn short(&self, date: &PersianDate) -> String {
        self.locale.localize_digits(&self.numeric(date))
    }

    /// `D MonthName YYYY`, wrapped in right-to-left embedding marks.
    pub fn day_month_year(&self, date: &PersianDate) -> String {
        let text = format!(
            "{RTL_EMBEDDING}{} {} {}{POP_DIRECTIONAL_FORMATTING}",
            date.day(),
            self.locale.month_name(date.month()),
            date.year()
        );
        self.locale.localize_digits(&text)
    }

    /// `Weekday D MonthName YYYY`, prefixed with `HH:MM` when `include_time`.
    pub fn long(&self, date: &PersianDate, include_time: bool) -> String {
        let mut text = String::new();
        if include_time {
            text.push_str(&format!("{:02}:{:02} ", date.hour(), date.minute()));
        }
        text.push_str(&format!(
            "{} {} {} {}",
            self.locale.weekday_name(date.weekday_index()),
            date.day(),
            self.locale.month_name(date.month()),
            date.year()
        ));
        self.locale.localize_digits(&text)
    }

    /// Ordinal-word day, month name and year.
    pub fn ordinal_day_month(&self, date: &PersianDate) -> String {
        let text = format!(
            "{} {} {}",
            self.locale.ordinal_day_word(date.day()),
            self.locale.month_name(date.month()),
            date.year()
        );
        self.locale.localize_digits(&text)
    }

    /// `YYYY/MM/DD Weekday` with locale digits.
    pub fn numeric_weekday(&self, date: &PersianDate) -> String {
        let text = format!(
            "{} {}",
            self.numeric(date),
            self.locale.weekday_name(date.weekday_index())
        );
        self.locale.localize_digits(&text)
    }

    /// Weekday, ordinal-word day, month name and year.
    pub fn long_ordinal(&self, date: &PersianDate) -> String {
        let text = format!(
            "{} {}",
            self.locale.weekday_name(date.weekday_index()),
            self.ordinal_day_month(date)
        );
        self.locale.localize_digits(&text)
    }
}

impl PersianDate {
    /// `YYYY/MM/DD` with Persian digits, e.g. `۱۴۰۲/۱۲/۲۰`.
    pub fn to_short_persian_string(&self) -> String {
        Formatter::default().short(self)
    }

    /// Day, month name and year with Persian digits, e.g. `۳ فروردین ۱۴۰۳`,
    /// wrapped in right-to-left embedding marks.
    pub fn to_persian_string(&self) -> String {
        Formatter::default().day_month_year(self)
    }

    /// Weekday, day, month name and year, e.g. `جمعه ۳ فروردین ۱۴۰۳`. With
    /// `include_time` the string starts with the `HH:MM` time of day.
    pub fn to_long_persian_string(&self, include_time: bool) -> String {
        Formatter::default().long(self, include_time)
    }

    /// Ordinal-word day, month name and year, e.g. `بیستم اسفند ۱۴۰۲`.
    pub fn to_persian_day_month_string(&self) -> String {
        Formatter::default().ordinal_day_month(self)
    }

    /// Numeric date and weekday name, e.g. `۱۴۰۲/۱۲/۲۰ یکشنبه`.
    pub fn to_persian_weekday_string(&self) -> String {
        Formatter::default().numeric_weekday(self)
    }

    /// Weekday, ordinal-word day, month name and year, e.g.
    /// `یکشنبه بیستم اسفند ۱۴۰۲`.
    pub fn to_long_persian_ordinal_words(&self) -> String {
        Formatter::default().long_ordinal(self)
    }
}
