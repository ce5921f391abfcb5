//! `DateRange` — a lazy, direction-aware sequence of dates.
//!
//! The direction is given by the sign of the step alone; it does not depend
//! on whether `start <= end`.  Without an end the sequence runs to the edge
//! of the representable range ([`NaiveDate::MAX`] ascending,
//! [`NaiveDate::MIN`] descending) and stops there quietly.

use std::iter::FusedIterator;

use bizday_core::ensure;
use bizday_core::errors::Result;
use chrono::{Duration, NaiveDate};

use crate::date_like::{truncate_time, DateLike, DatetimeHandler};

/// A single-pass iterator over dates from a start toward an end.
///
/// Build one with [`DateRangeBuilder`] or [`date_range`].
#[derive(Debug, Clone)]
pub struct DateRange {
    next: Option<NaiveDate>,
    end: NaiveDate,
    step: Duration,
    ascending: bool,
    include_end: bool,
}

impl DateRange {
    /// Dates from `start` toward `end`; `step_days` must be non-zero.
    pub(crate) fn between(
        start: NaiveDate,
        end: NaiveDate,
        include_start: bool,
        include_end: bool,
        step_days: i32,
    ) -> Self {
        debug_assert!(step_days != 0, "step_days must not be 0");
        let step = Duration::days(i64::from(step_days));
        let next = if include_start {
            Some(start)
        } else {
            start.checked_add_signed(step)
        };
        Self {
            next,
            end,
            step,
            ascending: step_days > 0,
            include_end,
        }
    }

    /// Return `true` once `date` lies beyond the end bound.
    fn is_past_end(&self, date: NaiveDate) -> bool {
        match (self.ascending, self.include_end) {
            (true, true) => date > self.end,
            (true, false) => date >= self.end,
            (false, true) => date < self.end,
            (false, false) => date <= self.end,
        }
    }

    /// The end bound actually in effect.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Return `true` if the sequence walks forward in time.
    pub fn is_ascending(&self) -> bool {
        self.ascending
    }
}

impl Iterator for DateRange {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        if self.is_past_end(current) {
            self.next = None;
            return None;
        }
        // Stepping off the representable range ends the sequence.
        self.next = current.checked_add_signed(self.step);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            None => (0, Some(0)),
            Some(_) => (0, None),
        }
    }
}

impl FusedIterator for DateRange {}

/// Builder for [`DateRange`].
#[derive(Debug, Clone)]
pub struct DateRangeBuilder {
    start: DateLike,
    end: Option<DateLike>,
    include_start: bool,
    include_end: bool,
    step_days: i32,
    datetime_handler: DatetimeHandler,
}

impl DateRangeBuilder {
    /// Begin a range at `start`: unbounded, both ends inclusive, one day per
    /// step, date-times truncated.
    pub fn new(start: impl Into<DateLike>) -> Self {
        Self {
            start: start.into(),
            end: None,
            include_start: true,
            include_end: true,
            step_days: 1,
            datetime_handler: truncate_time,
        }
    }

    /// Set the end bound.
    pub fn with_end(mut self, end: impl Into<DateLike>) -> Self {
        self.end = Some(end.into());
        self
    }

    /// Whether the first candidate is `start` itself (`true`) or
    /// `start + step` (`false`).
    pub fn include_start(mut self, flag: bool) -> Self {
        self.include_start = flag;
        self
    }

    /// Whether a date equal to the end bound is yielded.
    pub fn include_end(mut self, flag: bool) -> Self {
        self.include_end = flag;
        self
    }

    /// Days per step; negative walks backward.  Must not be zero.
    pub fn with_step_days(mut self, step_days: i32) -> Self {
        self.step_days = step_days;
        self
    }

    /// Conversion applied to date-time bounds.
    pub fn with_datetime_handler(mut self, handler: DatetimeHandler) -> Self {
        self.datetime_handler = handler;
        self
    }

    /// Build the [`DateRange`].
    pub fn build(self) -> Result<DateRange> {
        ensure!(self.step_days != 0, "step_days must not be 0");

        let ascending = self.step_days > 0;
        let start = self.start.to_date(self.datetime_handler);
        let end = match self.end {
            Some(end) => end.to_date(self.datetime_handler),
            None if ascending => NaiveDate::MAX,
            None => NaiveDate::MIN,
        };

        Ok(DateRange::between(
            start,
            end,
            self.include_start,
            self.include_end,
            self.step_days,
        ))
    }
}

/// Shorthand for [`DateRangeBuilder`].
///
/// ```
/// use bizday_time::date_range::date_range;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 4, 25).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 4, 30).unwrap();
/// let dates: Vec<_> = date_range(start, Some(end), true, true, 1).unwrap().collect();
/// assert_eq!(dates.len(), 6);
/// ```
pub fn date_range(
    start: impl Into<DateLike>,
    end: Option<impl Into<DateLike>>,
    include_start: bool,
    include_end: bool,
    step_days: i32,
) -> Result<DateRange> {
    let mut builder = DateRangeBuilder::new(start)
        .include_start(include_start)
        .include_end(include_end)
        .with_step_days(step_days);
    if let Some(end) = end {
        builder = builder.with_end(end);
    }
    builder.build()
}
