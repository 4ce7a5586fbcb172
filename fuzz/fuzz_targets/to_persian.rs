#![no_main]
use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;
use persia::{PersianDate, persian_to_gregorian_date};

fuzz_target!(|days: i32| {
    // Any representable Gregorian day must convert and come back unchanged
    let Some(date) = NaiveDate::from_num_days_from_ce_opt(days) else {
        return;
    };
    let persian = PersianDate::from(date);
    assert!(persian.day() <= persian.days_in_month());
    let back = persian_to_gregorian_date(persian.year(), persian.month(), persian.day());
    assert_eq!(back, Ok(date));
    let _ = persian.to_long_persian_ordinal_words();
});
