//! Holiday predicates and named holiday rules.
//!
//! A [`HolidayPredicate`] answers "is this date a holiday?".  A
//! [`HolidayRule`] pairs a predicate with the name it is registered under in
//! a [`HolidayDiscriminator`](crate::discriminator::HolidayDiscriminator).

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate, Weekday};

/// Something that can tell holidays from business days.
pub trait HolidayPredicate: Send + Sync {
    /// Return `true` if `date` is a holiday.
    fn is_holiday(&self, date: NaiveDate) -> bool;
}

impl<F> HolidayPredicate for F
where
    F: Fn(NaiveDate) -> bool + Send + Sync,
{
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self(date)
    }
}

type SharedPredicate = Arc<dyn Fn(NaiveDate) -> bool + Send + Sync>;

/// A holiday predicate together with its registry name.
///
/// Cloning is cheap: the predicate itself is shared.
#[derive(Clone)]
pub struct HolidayRule {
    name: String,
    predicate: SharedPredicate,
}

impl fmt::Debug for HolidayRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HolidayRule").field("name", &self.name).finish()
    }
}

impl HolidayRule {
    /// Create a rule named `name` from a predicate.
    ///
    /// The name is checked when the rule is registered: a blank name is
    /// rejected there with `InvalidArgument`.
    pub fn new<F>(name: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(NaiveDate) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// A rule that flags exactly the given dates.
    pub fn from_dates(name: impl Into<String>, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        let dates: HashSet<NaiveDate> = dates.into_iter().collect();
        Self::new(name, move |d| dates.contains(&d))
    }

    /// Registry name of this rule.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return `true` if both rules share the same predicate instance.
    pub fn same_predicate(&self, other: &HolidayRule) -> bool {
        Arc::ptr_eq(&self.predicate, &other.predicate)
    }

    /// Same predicate, different name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            predicate: Arc::clone(&self.predicate),
        }
    }

    /// Saturday and Sunday.
    pub fn saturday_or_sunday() -> Self {
        Self::new("is_saturday_or_sunday", is_saturday_or_sunday)
    }

    /// January 1st.
    pub fn new_year_day() -> Self {
        Self::new("is_new_year_day", is_new_year_day)
    }

    /// January 1st to 3rd.
    pub fn first_three_days_of_new_year() -> Self {
        Self::new(
            "is_the_first_three_days_of_new_year",
            is_the_first_three_days_of_new_year,
        )
    }

    /// December 31st.
    pub fn end_of_year() -> Self {
        Self::new("is_the_end_of_year", is_the_end_of_year)
    }

    /// December 31st through January 3rd.
    pub fn between_1231_0103() -> Self {
        Self::new("is_between_1231_0103", is_between_1231_0103)
    }
}

impl HolidayPredicate for HolidayRule {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        (self.predicate)(date)
    }
}

// ── Built-in predicates ──────────────────────────────────────────────────────

/// Saturday or Sunday.
pub fn is_saturday_or_sunday(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// January 1st.
pub fn is_new_year_day(date: NaiveDate) -> bool {
    date.month() == 1 && date.day() == 1
}

/// January 1st, 2nd or 3rd.
pub fn is_the_first_three_days_of_new_year(date: NaiveDate) -> bool {
    date.month() == 1 && date.day() <= 3
}

/// December 31st.
pub fn is_the_end_of_year(date: NaiveDate) -> bool {
    date.month() == 12 && date.day() == 31
}

/// December 31st through January 3rd.
pub fn is_between_1231_0103(date: NaiveDate) -> bool {
    is_the_end_of_year(date) || is_the_first_three_days_of_new_year(date)
}
