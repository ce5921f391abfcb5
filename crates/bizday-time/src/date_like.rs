//! Date-like inputs accepted at the outer API boundary.
//!
//! The stepping and holiday logic only ever sees [`NaiveDate`].  Callers may
//! hand in a date, a date-time, or ISO-8601 text; date-times are reduced to a
//! date by a [`DatetimeHandler`] before anything else happens.

use bizday_core::errors::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime};

/// Conversion applied to date-time inputs.
pub type DatetimeHandler = fn(NaiveDateTime) -> NaiveDate;

/// The default [`DatetimeHandler`]: drop the time-of-day.
pub fn truncate_time(dt: NaiveDateTime) -> NaiveDate {
    dt.date()
}

/// A calendar date, or a date-time to be converted to one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateLike {
    /// A plain date.
    Date(NaiveDate),
    /// A date with a time-of-day component.
    DateTime(NaiveDateTime),
}

impl DateLike {
    /// Parse ISO-8601 text (`YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SS[.f]`).
    ///
    /// Returns [`Error::TypeMismatch`] if the text is neither.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if let Ok(d) = text.parse::<NaiveDate>() {
            return Ok(DateLike::Date(d));
        }
        if let Ok(dt) = text.parse::<NaiveDateTime>() {
            return Ok(DateLike::DateTime(dt));
        }
        Err(Error::TypeMismatch(format!(
            "expected a date or date-time, got {text:?}"
        )))
    }

    /// Reduce to a date, converting date-times with `handler`.
    pub fn to_date(self, handler: DatetimeHandler) -> NaiveDate {
        match self {
            DateLike::Date(d) => d,
            DateLike::DateTime(dt) => handler(dt),
        }
    }
}

impl From<NaiveDate> for DateLike {
    fn from(d: NaiveDate) -> Self {
        DateLike::Date(d)
    }
}

impl From<NaiveDateTime> for DateLike {
    fn from(dt: NaiveDateTime) -> Self {
        DateLike::DateTime(dt)
    }
}

impl TryFrom<&str> for DateLike {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        DateLike::parse(text)
    }
}
