//! Business-day operations.
//!
//! Every function takes the holiday predicate explicitly.  Pass
//! [`DefaultHolidays::instance()`](crate::default_discriminator::DefaultHolidays::instance)
//! for the process-wide rules, or use
//! [`BizdayCalculator`](crate::calculator::BizdayCalculator), which defaults
//! to it.

use std::iter::FusedIterator;

use bizday_core::errors::{Error, Result};
use chrono::NaiveDate;
use tracing::trace;

use crate::date_range::{DateRange, DateRangeBuilder};
use crate::holiday::HolidayPredicate;

/// Return `true` if `date` is not a holiday.
pub fn is_bizday<H>(date: NaiveDate, is_holiday: &H) -> bool
where
    H: HolidayPredicate + ?Sized,
{
    !is_holiday.is_holiday(date)
}

/// First business day in `dates`, or `SequenceExhausted`.
fn first_bizday<H>(mut dates: DateRange, from: NaiveDate, is_holiday: &H) -> Result<NaiveDate>
where
    H: HolidayPredicate + ?Sized,
{
    let direction = if dates.is_ascending() { "after" } else { "before" };
    dates.find(|d| is_bizday(*d, is_holiday)).ok_or_else(|| {
        Error::SequenceExhausted(format!("no business day {direction} {from}"))
    })
}

/// The first business day strictly after `date`.
///
/// Fails with [`Error::SequenceExhausted`] if every later representable
/// date is a holiday.
pub fn next_bizday<H>(date: NaiveDate, is_holiday: &H) -> Result<NaiveDate>
where
    H: HolidayPredicate + ?Sized,
{
    let dates = DateRangeBuilder::new(date).include_start(false).build()?;
    first_bizday(dates, date, is_holiday)
}

/// The last business day strictly before `date`.
///
/// Fails with [`Error::SequenceExhausted`] if every earlier representable
/// date is a holiday.
pub fn prev_bizday<H>(date: NaiveDate, is_holiday: &H) -> Result<NaiveDate>
where
    H: HolidayPredicate + ?Sized,
{
    let dates = DateRangeBuilder::new(date)
        .include_start(false)
        .with_step_days(-1)
        .build()?;
    first_bizday(dates, date, is_holiday)
}

fn ensure_bizday_for_zero<H>(date: NaiveDate, is_holiday: &H) -> Result<NaiveDate>
where
    H: HolidayPredicate + ?Sized,
{
    if is_holiday.is_holiday(date) {
        return Err(Error::InvalidArgument(format!(
            "n=0 but date={date} is holiday"
        )));
    }
    Ok(date)
}

/// The `n`-th business day after `date`.
///
/// * `n == 0` returns `date` itself, which must be a business day.
/// * `n < 0` is `n_prev_bizday(date, -n)`.
pub fn n_next_bizday<H>(date: NaiveDate, n: i32, is_holiday: &H) -> Result<NaiveDate>
where
    H: HolidayPredicate + ?Sized,
{
    match n {
        0 => ensure_bizday_for_zero(date, is_holiday),
        n if n < 0 => n_prev_bizday(date, n.saturating_neg(), is_holiday),
        n => {
            let mut current = date;
            for step in 0..n {
                current = next_bizday(current, is_holiday)?;
                trace!(step = step + 1, %current, "stepped forward");
            }
            Ok(current)
        }
    }
}

/// The `n`-th business day before `date`.
///
/// * `n == 0` returns `date` itself, which must be a business day.
/// * `n < 0` is `n_next_bizday(date, -n)`.
pub fn n_prev_bizday<H>(date: NaiveDate, n: i32, is_holiday: &H) -> Result<NaiveDate>
where
    H: HolidayPredicate + ?Sized,
{
    match n {
        0 => ensure_bizday_for_zero(date, is_holiday),
        n if n < 0 => n_next_bizday(date, n.saturating_neg(), is_holiday),
        n => {
            let mut current = date;
            for step in 0..n {
                current = prev_bizday(current, is_holiday)?;
                trace!(step = step + 1, %current, "stepped backward");
            }
            Ok(current)
        }
    }
}

/// Iterator over the business days of a [`DateRange`].
pub struct BizdayRange<'a, H: ?Sized> {
    dates: DateRange,
    is_holiday: &'a H,
}

impl<H: ?Sized> std::fmt::Debug for BizdayRange<'_, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BizdayRange")
            .field("dates", &self.dates)
            .finish()
    }
}

impl<H> Iterator for BizdayRange<'_, H>
where
    H: HolidayPredicate + ?Sized,
{
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let is_holiday = self.is_holiday;
        self.dates.find(|d| !is_holiday.is_holiday(*d))
    }
}

impl<H> FusedIterator for BizdayRange<'_, H> where H: HolidayPredicate + ?Sized {}

/// Business days from `start` to `end`.
///
/// Walks forward if `start <= end` and backward otherwise.
pub fn bizday_range<H>(
    start: NaiveDate,
    end: NaiveDate,
    include_start: bool,
    include_end: bool,
    is_holiday: &H,
) -> BizdayRange<'_, H>
where
    H: HolidayPredicate + ?Sized,
{
    let step_days = if start <= end { 1 } else { -1 };
    let dates = DateRange::between(start, end, include_start, include_end, step_days);
    BizdayRange { dates, is_holiday }
}

/// Number of business days from `start` to `end`.
///
/// Negative exactly when `start > end`; in that case it is
/// `-count_bizdays(end, start, include_end, include_start)`.
pub fn count_bizdays<H>(
    start: NaiveDate,
    end: NaiveDate,
    include_start: bool,
    include_end: bool,
    is_holiday: &H,
) -> i64
where
    H: HolidayPredicate + ?Sized,
{
    if start > end {
        return -count_bizdays(end, start, include_end, include_start, is_holiday);
    }
    let n = bizday_range(start, end, include_start, include_end, is_holiday).count();
    n as i64
}
