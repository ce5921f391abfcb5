//! Integration tests for the process-wide default discriminator and scoped
//! overrides.
//!
//! All tests here mutate shared state, so each one holds `GLOBAL` for its
//! whole body.

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Mutex, MutexGuard, PoisonError};

use bizday_core::Error;
use bizday_time::{
    add_global_rules, global_rule_names, global_rules, remove_global_rules, with_holiday_rules,
    BizdayCalculator, DefaultHolidays, HolidayPredicate, HolidayRule, RangeOptions,
    ScopedHolidayRules,
};
use chrono::NaiveDate;

static GLOBAL: Mutex<()> = Mutex::new(());

fn lock() -> MutexGuard<'static, ()> {
    GLOBAL.lock().unwrap_or_else(PoisonError::into_inner)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Assert that the registry holds exactly `expected`, same names, same
/// order, same predicate instances.
fn assert_same_rules(expected: &[HolidayRule]) {
    let actual = global_rules();
    let names: Vec<_> = actual.iter().map(|r| r.name().to_owned()).collect();
    let expected_names: Vec<_> = expected.iter().map(|r| r.name().to_owned()).collect();
    assert_eq!(names, expected_names);
    for (a, e) in actual.iter().zip(expected) {
        assert!(a.same_predicate(e), "predicate for {} was replaced", a.name());
    }
}

#[test]
fn test_default_is_weekends() {
    let _g = lock();
    assert_eq!(global_rule_names(), vec!["is_saturday_or_sunday"]);
    let calc = BizdayCalculator::default();
    assert_eq!(calc.next_bizday(date(2025, 4, 25)).unwrap(), date(2025, 4, 28));
    assert_eq!(
        calc.count_bizdays(date(2025, 4, 21), date(2025, 4, 27), RangeOptions::default()),
        5
    );
}

#[test]
fn test_duplicate_and_unknown_names() {
    let _g = lock();
    let foo = HolidayRule::new("foo", |d: NaiveDate| d == date(2025, 4, 24));
    add_global_rules([foo.clone()], false).unwrap();
    let err = add_global_rules([foo], false).unwrap_err();
    assert!(matches!(err, Error::DuplicateName(_)));
    remove_global_rules(["foo"]).unwrap();
    let err = remove_global_rules(["never_added"]).unwrap_err();
    assert!(matches!(err, Error::UnknownName(_)));
    assert_eq!(global_rule_names(), vec!["is_saturday_or_sunday"]);
}

#[test]
fn test_scope_restores_after_normal_exit() {
    let _g = lock();
    let before = global_rules();
    let extra = HolidayRule::from_dates("anzac", [date(2025, 4, 25)]);

    let inside = with_holiday_rules([extra], false, false, |hd| {
        Ok::<_, Error>((hd.names(), hd.is_holiday(date(2025, 4, 25))))
    })
    .unwrap();

    assert_eq!(inside.0, vec!["is_saturday_or_sunday", "anzac"]);
    assert!(inside.1);
    assert_same_rules(&before);
    assert!(!DefaultHolidays::instance().is_holiday(date(2025, 4, 25)));
}

#[test]
fn test_scope_restores_after_error() {
    let _g = lock();
    let before = global_rules();

    let result: Result<(), Error> =
        with_holiday_rules([HolidayRule::new_year_day()], false, true, |hd| {
            assert_eq!(hd.names(), vec!["is_new_year_day"]);
            hd.remove_rules(["not_there"])
        });

    assert!(matches!(result, Err(Error::UnknownName(_))));
    assert_same_rules(&before);
}

#[test]
fn test_scope_restores_after_panic() {
    let _g = lock();
    let before = global_rules();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        let _scope = ScopedHolidayRules::new([HolidayRule::end_of_year()], false, true).unwrap();
        assert_eq!(global_rule_names(), vec!["is_the_end_of_year"]);
        panic!("scope body failed");
    }));

    assert!(outcome.is_err());
    assert_same_rules(&before);
}

#[test]
fn test_scope_undoes_mutations_made_inside() {
    let _g = lock();
    let before = global_rules();

    with_holiday_rules([HolidayRule::new_year_day()], false, false, |hd| {
        hd.remove_rules(["is_saturday_or_sunday"])?;
        hd.add_rules([HolidayRule::end_of_year()], false)?;
        let weekend = HolidayRule::saturday_or_sunday().renamed("weekend");
        hd.add_rules([weekend], false)?;
        assert_eq!(hd.names(), vec!["is_new_year_day", "is_the_end_of_year", "weekend"]);
        Ok::<_, Error>(())
    })
    .unwrap();

    assert_same_rules(&before);
}

#[test]
fn test_scope_with_overwrite() {
    let _g = lock();
    let before = global_rules();
    let no_weekends = HolidayRule::new("is_saturday_or_sunday", |_: NaiveDate| false);

    let err = ScopedHolidayRules::new([no_weekends.clone()], false, false)
        .err()
        .unwrap();
    assert!(matches!(err, Error::DuplicateName(_)));
    assert_same_rules(&before);

    {
        let _scope = ScopedHolidayRules::new([no_weekends], true, false).unwrap();
        assert!(BizdayCalculator::new().is_bizday(date(2025, 4, 26)));
    }
    assert_same_rules(&before);
    assert!(!BizdayCalculator::new().is_bizday(date(2025, 4, 26)));
}

#[test]
fn test_nested_scopes_unwind_in_order() {
    let _g = lock();
    let before = global_rules();
    {
        let _outer = ScopedHolidayRules::new([HolidayRule::new_year_day()], false, false).unwrap();
        let after_outer = global_rules();
        {
            let _inner =
                ScopedHolidayRules::new([HolidayRule::end_of_year()], false, true).unwrap();
            assert_eq!(global_rule_names(), vec!["is_the_end_of_year"]);
        }
        assert_same_rules(&after_outer);
    }
    assert_same_rules(&before);
}
