//! Persian word tables and digit glyphs.
//!
//! A [`Locale`] is plain read-only data. [`crate::Formatter`] borrows one;
//! [`Locale::PERSIAN`] is the built-in table.

/// Names and glyphs used when rendering Persian dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    /// Month names, Farvardin first.
    pub month_names: [&'static str; 12],
    /// Weekday names, Saturday first.
    pub weekday_names: [&'static str; 7],
    /// Ordinal words for day 1 through day 31.
    pub ordinal_day_words: [&'static str; 31],
    /// Glyphs substituted for ASCII `0`–`9`.
    pub digits: [char; 10],
}

impl Locale {
    pub const PERSIAN: Locale = Locale {
        month_names: [
            "فروردین",
            "اردیبهشت",
            "خرداد",
            "تیر",
            "مرداد",
            "شهریور",
            "مهر",
            "آبان",
            "آذر",
            "دی",
            "بهمن",
            "اسفند",
        ],
        weekday_names: [
            "شنبه",
            "یکشنبه",
            "دوشنبه",
            "سه‌شنبه",
            "چهارشنبه",
            "پنجشنبه",
            "جمعه",
        ],
        ordinal_day_words: [
            "یکم",
            "دوم",
            "سوم",
            "چهارم",
            "پنجم",
            "ششم",
            "هفتم",
            "هشتم",
            "نهم",
            "دهم",
            "یازدهم",
            "دوازدهم",
            "سیزدهم",
            "چهاردهم",
            "پانزدهم",
            "شانزدهم",
            "هفدهم",
            "هجدهم",
            "نوزدهم",
            "بیستم",
            "بیست و یکم",
            "بیست و دوم",
            "بیست و سوم",
            "بیست و چهارم",
            "بیست و پنجم",
            "بیست و ششم",
            "بیست و هفتم",
            "بیست و هشتم",
            "بیست و نهم",
            "سی‌ام",
            "سی و یکم",
        ],
        digits: ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'],
    };

    /// Name of `month` (1–12).
    ///
    /// # Panics
    ///
    /// If `month` is not 1–12.
    pub fn month_name(&self, month: u8) -> &'static str {
        self.month_names[usize::from(month) - 1]
    }

    /// Name of the weekday at `index` (Saturday = 0).
    ///
    /// # Panics
    ///
    /// If `index` is greater than 6.
    pub fn weekday_name(&self, index: u8) -> &'static str {
        self.weekday_names[usize::from(index)]
    }

    /// Ordinal word for `day` (1–31).
    ///
    /// # Panics
    ///
    /// If `day` is not 1–31.
    pub fn ordinal_day_word(&self, day: u8) -> &'static str {
        self.ordinal_day_words[usize::from(day) - 1]
    }

    /// Replace each ASCII digit in `text` with this locale's glyph. Every
    /// other character is copied unchanged.
    pub fn localize_digits(&self, text: &str) -> String {
        text.chars()
            .map(|c| match c.to_digit(10) {
                Some(d) => self.digits[d as usize],
                _ => c,
            })
            .collect()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::PERSIAN
    }
}

/// Replace ASCII digits with Persian-script digits.
///
/// ```
/// use persia::to_persian_digits;
/// assert_eq!(to_persian_digits("1402/12/20"), "۱۴۰۲/۱۲/۲۰");
/// assert_eq!(to_persian_digits("ساعت 9"), "ساعت ۹");
/// ```
pub fn to_persian_digits(text: &str) -> String {
    Locale::PERSIAN.localize_digits(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookups() {
        let locale = Locale::PERSIAN;
        assert_eq!(locale.month_name(1), "فروردین");
        assert_eq!(locale.month_name(12), "اسفند");
        assert_eq!(locale.weekday_name(0), "شنبه");
        assert_eq!(locale.weekday_name(6), "جمعه");
        assert_eq!(locale.ordinal_day_word(20), "بیستم");
        assert_eq!(locale.ordinal_day_word(31), "سی و یکم");
    }

    #[test]
    fn test_digits_are_one_to_one() {
        assert_eq!(to_persian_digits("0123456789"), "۰۱۲۳۴۵۶۷۸۹");
        assert_eq!(to_persian_digits(""), "");
        assert_eq!(to_persian_digits("abc-/ "), "abc-/ ");
        // Already localized digits pass through.
        assert_eq!(to_persian_digits("۱۴۰۳"), "۱۴۰۳");
    }
}
