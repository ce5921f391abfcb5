//! `BizdayCalculator` — business-day operations over date-like inputs.
//!
//! The calculator bundles a holiday predicate (the process-wide
//! [`DefaultHolidays`] unless told otherwise) with the [`DatetimeHandler`]
//! used to turn date-times into dates.  Inputs are converted first; the
//! work is then done by the functions in [`crate::bizday`].

use bizday_core::errors::Result;
use chrono::NaiveDate;

use crate::bizday::{self, BizdayRange};
use crate::date_like::{truncate_time, DateLike, DatetimeHandler};
use crate::default_discriminator::DefaultHolidays;
use crate::holiday::HolidayPredicate;

/// Which ends of a range are included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeOptions {
    /// Include the start date.
    pub include_start: bool,
    /// Include the end date.
    pub include_end: bool,
}

impl Default for RangeOptions {
    fn default() -> Self {
        Self {
            include_start: true,
            include_end: true,
        }
    }
}

impl RangeOptions {
    /// Both ends included.
    pub fn inclusive() -> Self {
        Self::default()
    }

    /// Start included, end excluded.
    pub fn half_open() -> Self {
        Self {
            include_start: true,
            include_end: false,
        }
    }

    /// Both ends excluded.
    pub fn exclusive() -> Self {
        Self {
            include_start: false,
            include_end: false,
        }
    }
}

/// Business-day operations bound to a holiday predicate.
///
/// ```
/// use bizday_time::{BizdayCalculator, HolidayDiscriminator, RangeOptions};
/// use chrono::NaiveDate;
///
/// let weekends = HolidayDiscriminator::weekends();
/// let calc = BizdayCalculator::with_holidays(&weekends);
/// let friday = NaiveDate::from_ymd_opt(2025, 4, 25).unwrap();
/// assert_eq!(
///     calc.next_bizday(friday).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 4, 28).unwrap()
/// );
/// let monday = NaiveDate::from_ymd_opt(2025, 4, 28).unwrap();
/// assert_eq!(calc.count_bizdays(friday, monday, RangeOptions::default()), 2);
/// ```
#[derive(Clone, Copy)]
pub struct BizdayCalculator<'a> {
    is_holiday: &'a dyn HolidayPredicate,
    datetime_handler: DatetimeHandler,
}

impl std::fmt::Debug for BizdayCalculator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BizdayCalculator").finish_non_exhaustive()
    }
}

impl Default for BizdayCalculator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl BizdayCalculator<'static> {
    /// A calculator using the process-wide default holiday rules.
    pub fn new() -> Self {
        Self {
            is_holiday: DefaultHolidays::instance(),
            datetime_handler: truncate_time,
        }
    }
}

impl<'a> BizdayCalculator<'a> {
    /// A calculator using `is_holiday` instead of the process-wide rules.
    pub fn with_holidays(is_holiday: &'a dyn HolidayPredicate) -> Self {
        Self {
            is_holiday,
            datetime_handler: truncate_time,
        }
    }

    /// Use `handler` to convert date-time inputs.
    pub fn with_datetime_handler(mut self, handler: DatetimeHandler) -> Self {
        self.datetime_handler = handler;
        self
    }

    /// The holiday predicate in use.
    pub fn holidays(&self) -> &'a dyn HolidayPredicate {
        self.is_holiday
    }

    fn to_date(&self, date: impl Into<DateLike>) -> NaiveDate {
        date.into().to_date(self.datetime_handler)
    }

    /// Return `true` if `date` is a holiday.
    pub fn is_holiday(&self, date: impl Into<DateLike>) -> bool {
        self.is_holiday.is_holiday(self.to_date(date))
    }

    /// Return `true` if `date` is a business day.
    pub fn is_bizday(&self, date: impl Into<DateLike>) -> bool {
        bizday::is_bizday(self.to_date(date), self.is_holiday)
    }

    /// See [`bizday::next_bizday`].
    pub fn next_bizday(&self, date: impl Into<DateLike>) -> Result<NaiveDate> {
        bizday::next_bizday(self.to_date(date), self.is_holiday)
    }

    /// See [`bizday::prev_bizday`].
    pub fn prev_bizday(&self, date: impl Into<DateLike>) -> Result<NaiveDate> {
        bizday::prev_bizday(self.to_date(date), self.is_holiday)
    }

    /// See [`bizday::n_next_bizday`].
    pub fn n_next_bizday(&self, date: impl Into<DateLike>, n: i32) -> Result<NaiveDate> {
        bizday::n_next_bizday(self.to_date(date), n, self.is_holiday)
    }

    /// See [`bizday::n_prev_bizday`].
    pub fn n_prev_bizday(&self, date: impl Into<DateLike>, n: i32) -> Result<NaiveDate> {
        bizday::n_prev_bizday(self.to_date(date), n, self.is_holiday)
    }

    /// See [`bizday::bizday_range`].
    pub fn bizday_range(
        &self,
        start: impl Into<DateLike>,
        end: impl Into<DateLike>,
        options: RangeOptions,
    ) -> BizdayRange<'a, dyn HolidayPredicate + 'a> {
        bizday::bizday_range(
            self.to_date(start),
            self.to_date(end),
            options.include_start,
            options.include_end,
            self.is_holiday,
        )
    }

    /// See [`bizday::count_bizdays`].
    pub fn count_bizdays(
        &self,
        start: impl Into<DateLike>,
        end: impl Into<DateLike>,
        options: RangeOptions,
    ) -> i64 {
        bizday::count_bizdays(
            self.to_date(start),
            self.to_date(end),
            options.include_start,
            options.include_end,
            self.is_holiday,
        )
    }
}
