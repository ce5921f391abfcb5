//! Integration tests for date sequences and business-day operations over
//! explicitly supplied holiday predicates.

use bizday_core::Error;
use bizday_time::{
    bizday_range, count_bizdays, date_range, is_bizday, n_next_bizday, n_prev_bizday,
    next_bizday, prev_bizday, BizdayCalculator, DateLike, DateRangeBuilder, HolidayDiscriminator,
    HolidayPredicate, HolidayRule, RangeOptions,
};
use chrono::{Datelike, Duration, NaiveDate};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn holidays_on(days: &[u32]) -> HolidayDiscriminator {
    HolidayDiscriminator::new([HolidayRule::from_dates(
        "april_2025",
        days.iter().map(|d| date(2025, 4, *d)),
    )])
    .unwrap()
}

/// Weekends plus a scattering of weekday holidays.
fn busy_calendar() -> HolidayDiscriminator {
    HolidayDiscriminator::new([
        HolidayRule::saturday_or_sunday(),
        HolidayRule::between_1231_0103(),
        HolidayRule::new("every_13th", |d: NaiveDate| d.day() == 13),
    ])
    .unwrap()
}

// ─── Scenarios ────────────────────────────────────────────────────────────────

#[test]
fn test_date_range_six_days() {
    let dates: Vec<_> = date_range(date(2025, 4, 25), Some(date(2025, 4, 30)), true, true, 1)
        .unwrap()
        .collect();
    let expected: Vec<_> = (25..=30).map(|d| date(2025, 4, d)).collect();
    assert_eq!(dates, expected);

    let never = |_: NaiveDate| false;
    let biz: Vec<_> = bizday_range(date(2025, 4, 25), date(2025, 4, 30), true, true, &never).collect();
    assert_eq!(biz, expected);
}

#[test]
fn test_bizday_range_with_holidays() {
    let hd = holidays_on(&[26, 27, 29]);
    let biz: Vec<_> =
        bizday_range(date(2025, 4, 25), date(2025, 4, 30), true, true, &hd).collect();
    assert_eq!(biz, vec![date(2025, 4, 25), date(2025, 4, 28), date(2025, 4, 30)]);
    assert_eq!(count_bizdays(date(2025, 4, 25), date(2025, 4, 30), true, true, &hd), 3);
}

#[test]
fn test_n_next_over_a_holiday() {
    let hd = holidays_on(&[26]);
    assert_eq!(n_next_bizday(date(2025, 4, 25), 2, &hd).unwrap(), date(2025, 4, 28));
}

#[test]
fn test_is_bizday_examples() {
    let new_year = |d: NaiveDate| d == date(2021, 1, 1);
    assert!(!is_bizday(date(2021, 1, 1), &new_year));
    let third = |d: NaiveDate| d == date(2021, 1, 3);
    assert!(is_bizday(date(2021, 1, 2), &third));
}

#[test]
fn test_year_end_window() {
    let hd = busy_calendar();
    // 2024-12-30 is a Monday; 12-31 .. 01-03 are closed, 01-04/05 a weekend.
    assert_eq!(next_bizday(date(2024, 12, 30), &hd).unwrap(), date(2025, 1, 6));
    assert_eq!(prev_bizday(date(2025, 1, 6), &hd).unwrap(), date(2024, 12, 30));
    assert_eq!(count_bizdays(date(2024, 12, 30), date(2025, 1, 6), true, true, &hd), 2);
}

#[test]
fn test_zero_step_range_rejected() {
    let err = date_range(date(2025, 4, 25), None::<NaiveDate>, true, true, 0).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn test_text_that_is_not_a_date() {
    let err = DateLike::try_from("not a date").unwrap_err();
    assert!(matches!(err, Error::TypeMismatch(_)));
    let start = DateLike::try_from("2025-04-25").unwrap();
    let end = DateLike::try_from("2025-04-27T12:00:00").unwrap();
    let dates: Vec<_> = DateRangeBuilder::new(start).with_end(end).build().unwrap().collect();
    assert_eq!(dates, vec![date(2025, 4, 25), date(2025, 4, 26), date(2025, 4, 27)]);
}

#[test]
fn test_calculator_matches_free_functions() {
    let hd = busy_calendar();
    let calc = BizdayCalculator::with_holidays(&hd);
    let (s, e) = (date(2025, 1, 1), date(2025, 3, 31));
    assert_eq!(
        calc.count_bizdays(s, e, RangeOptions::default()),
        count_bizdays(s, e, true, true, &hd)
    );
    assert_eq!(calc.n_next_bizday(s, 10).unwrap(), n_next_bizday(s, 10, &hd).unwrap());
    let dt = date(2025, 2, 13).and_hms_opt(8, 0, 0).unwrap();
    assert!(calc.is_holiday(dt));
}

// ─── Properties ───────────────────────────────────────────────────────────────

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..40_000).prop_map(|offset| date(1950, 1, 1) + Duration::days(offset))
}

proptest! {
    #[test]
    fn prop_is_bizday_negates_is_holiday(d in any_date()) {
        let hd = busy_calendar();
        prop_assert_eq!(is_bizday(d, &hd), !hd.is_holiday(d));
    }

    #[test]
    fn prop_next_after_prev_before(d in any_date()) {
        let hd = busy_calendar();
        let next = next_bizday(d, &hd).unwrap();
        let prev = prev_bizday(d, &hd).unwrap();
        prop_assert!(next > d);
        prop_assert!(prev < d);
        prop_assert!(is_bizday(next, &hd));
        prop_assert!(is_bizday(prev, &hd));
    }

    #[test]
    fn prop_n_next_and_n_prev_agree(d in any_date(), n in -60i32..60) {
        let hd = busy_calendar();
        let forward = n_next_bizday(d, n, &hd);
        let backward = n_prev_bizday(d, -n, &hd);
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn prop_zero_steps(d in any_date()) {
        let hd = busy_calendar();
        match n_next_bizday(d, 0, &hd) {
            Ok(same) => {
                prop_assert_eq!(same, d);
                prop_assert!(is_bizday(d, &hd));
            }
            Err(e) => {
                prop_assert!(matches!(e, Error::InvalidArgument(_)));
                prop_assert!(hd.is_holiday(d));
            }
        }
    }

    #[test]
    fn prop_count_is_antisymmetric(
        end in any_date(),
        span in 1i64..1_000,
        include_start: bool,
        include_end: bool,
    ) {
        let hd = busy_calendar();
        let start = end + Duration::days(span);
        prop_assert_eq!(
            count_bizdays(start, end, include_start, include_end, &hd),
            -count_bizdays(end, start, include_end, include_start, &hd)
        );
    }

    #[test]
    fn prop_range_length_matches_count(
        a in any_date(),
        span in -500i64..500,
        include_start: bool,
        include_end: bool,
    ) {
        let hd = busy_calendar();
        let b = a + Duration::days(span);
        let listed = bizday_range(a, b, include_start, include_end, &hd).count() as i64;
        let counted = count_bizdays(a, b, include_start, include_end, &hd);
        prop_assert_eq!(listed, counted.abs());
        if a > b {
            prop_assert!(counted <= 0);
        } else {
            prop_assert!(counted >= 0);
        }
    }

    #[test]
    fn prop_range_is_monotonic(a in any_date(), span in -200i64..200) {
        let hd = busy_calendar();
        let b = a + Duration::days(span);
        let days: Vec<_> = bizday_range(a, b, true, true, &hd).collect();
        for pair in days.windows(2) {
            if a <= b {
                prop_assert!(pair[0] < pair[1]);
            } else {
                prop_assert!(pair[0] > pair[1]);
            }
        }
    }
}
