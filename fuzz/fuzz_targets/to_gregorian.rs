#![no_main]
use libfuzzer_sys::{arbitrary::Arbitrary, fuzz_target};
use persia::PersianDate;

#[derive(Arbitrary, Debug)]
struct Input {
    year: i32,
    month: u8,
    day: u8,
}

fuzz_target!(|input: Input| {
    // Fuzz anything; valid dates must survive the round trip
    if let Ok(date) = PersianDate::new(input.year, input.month, input.day) {
        assert_eq!(
            (date.year(), date.month(), date.day()),
            (input.year, input.month, input.day)
        );
    }
});
