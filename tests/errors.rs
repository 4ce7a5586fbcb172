use persia::{
    PersianDate, PersianDateBuilder, PersiaError, persian_to_gregorian_date,
};

#[test]
fn test_day_thirty_of_esfand_in_common_year() {
    let err = persian_to_gregorian_date(1402, 12, 30).unwrap_err();
    assert_eq!(
        err,
        PersiaError::InvalidDay {
            year: 1402,
            month: 12,
            day: 30,
            days_in_month: 29
        }
    );
    assert!(err.is_invalid_date());
}

#[test]
fn test_month_out_of_range() {
    for month in [0, 13, 255] {
        let err = PersianDate::new(1403, month, 1).unwrap_err();
        assert_eq!(err, PersiaError::InvalidMonth(month));
        assert!(err.is_invalid_date());
    }
}

#[test]
fn test_day_out_of_range() {
    assert!(PersianDate::new(1403, 1, 0).is_err());
    assert!(PersianDate::new(1403, 1, 32).is_err());
    assert!(PersianDate::new(1403, 7, 31).is_err());
    assert!(PersianDate::new(1403, 6, 31).is_ok());
}

#[test]
fn test_invalid_time() {
    let err = PersianDateBuilder::default()
        .with_time(24, 0, 0, 0)
        .err()
        .expect("should error on hour 24");
    match err {
        PersiaError::InvalidTime { hour, .. } => assert_eq!(hour, 24),
        other => panic!("Unexpected error: {other:?}"),
    }
    assert!(!err.is_invalid_date());
}

#[test]
fn test_out_of_range_year() {
    let err = PersianDate::new(1_000_000, 1, 1).unwrap_err();
    assert_eq!(
        err,
        PersiaError::OutOfRange {
            year: 1_000_000,
            month: 1,
            day: 1
        }
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        PersiaError::InvalidMonth(13).to_string(),
        "Invalid Persian month: 13 (expected 1-12)"
    );
    assert_eq!(
        persian_to_gregorian_date(1402, 12, 30)
            .unwrap_err()
            .to_string(),
        "Invalid day 30 for Persian 1402/12: month has 29 days"
    );
}
