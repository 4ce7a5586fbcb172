use chrono::{NaiveDate, NaiveTime, Weekday};
use persia::{
    FixedClock, PersianDate, gregorian_date_to_persian, gregorian_to_persian, is_leap_year,
    persian_to_gregorian, persian_to_gregorian_date, persian_to_gregorian_now,
};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn converts_gregorian_to_persian() {
    let d = gregorian_date_to_persian(ymd(2024, 3, 10));
    assert_eq!(d.year(), 1402);
    assert_eq!(d.month(), 12);
    assert_eq!(d.day(), 20);
    assert_eq!(d.weekday(), Weekday::Sun);
}

#[test]
fn converts_nowruz_week() {
    let d = gregorian_date_to_persian(ymd(2024, 3, 22));
    assert_eq!((d.year(), d.month(), d.day()), (1403, 1, 3));
    assert_eq!(d.weekday_index(), 6);
    assert_eq!(d.weekday_name(), "جمعه");
}

#[test]
fn converts_persian_to_gregorian() {
    let date = persian_to_gregorian_date(1403, 1, 1).unwrap();
    assert_eq!(date, ymd(2024, 3, 20));

    let dt = persian_to_gregorian(1403, 1, 1, NaiveTime::default()).unwrap();
    assert_eq!(dt.date(), ymd(2024, 3, 20));
}

#[test]
fn copies_time_of_day_verbatim() {
    let time = NaiveTime::from_hms_milli_opt(17, 5, 42, 123).unwrap();
    let d = gregorian_to_persian(ymd(2024, 3, 10).and_time(time));
    assert_eq!(d.hour(), 17);
    assert_eq!(d.minute(), 5);
    assert_eq!(d.second(), 42);
    assert_eq!(d.millisecond(), 123);

    let back = persian_to_gregorian(d.year(), d.month(), d.day(), d.time()).unwrap();
    assert_eq!(back, ymd(2024, 3, 10).and_time(time));
}

#[test]
fn takes_time_from_clock() {
    let now = ymd(2030, 6, 1).and_hms_opt(6, 45, 30).unwrap();
    let dt = persian_to_gregorian_now(1402, 12, 20, &FixedClock::new(now)).unwrap();
    assert_eq!(dt, ymd(2024, 3, 10).and_hms_opt(6, 45, 30).unwrap());

    let today = PersianDate::today(&FixedClock::new(now));
    assert_eq!(today.to_naive_date_time(), now);
}

#[test]
fn last_day_of_common_year() {
    let d = gregorian_date_to_persian(ymd(2024, 3, 19));
    assert_eq!((d.year(), d.month(), d.day()), (1402, 12, 29));
    assert_eq!(d.day_of_year(), 365);
    assert_eq!(d.days_remaining_in_year(), 0);
    assert!(!d.is_leap_year());
}

#[test]
fn first_day_of_year() {
    let d = gregorian_date_to_persian(ymd(2024, 3, 20));
    assert_eq!(d.day_of_year(), 1);
    assert_eq!(d.days_remaining_in_year(), 364);
}

#[test]
fn leap_year_has_thirtieth_of_esfand() {
    assert!(is_leap_year(1404));
    let d = PersianDate::new(1404, 12, 30).unwrap();
    let next = d.next_day().unwrap();
    assert_eq!((next.year(), next.month(), next.day()), (1405, 1, 1));
    assert_eq!(
        persian_to_gregorian_date(1405, 1, 1).unwrap(),
        d.to_naive_date().succ_opt().unwrap()
    );
}

#[test]
fn century_start_matches_civil_calendar() {
    let d = gregorian_date_to_persian(ymd(2000, 1, 1));
    assert_eq!((d.year(), d.month(), d.day()), (1378, 10, 11));
    assert_eq!(d.weekday_index(), 0); // Saturday
}

#[test]
fn handles_far_past_and_future() {
    for date in [ymd(1, 1, 1), ymd(-500, 7, 4), ymd(9999, 12, 31), NaiveDate::MIN, NaiveDate::MAX]
    {
        let p = gregorian_date_to_persian(date);
        assert_eq!(
            persian_to_gregorian_date(p.year(), p.month(), p.day()).unwrap(),
            date
        );
    }
}

#[test]
fn non_positive_persian_years_convert() {
    let d = PersianDate::new(0, 1, 1).unwrap();
    assert_eq!((d.year(), d.month(), d.day()), (0, 1, 1));
    let d = PersianDate::new(-100, 12, 29).unwrap();
    assert_eq!((d.year(), d.month(), d.day()), (-100, 12, 29));
    assert_eq!(d.next_day().unwrap().year(), -100 + i32::from(!d.is_leap_year()));
}
