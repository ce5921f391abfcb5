//! # bizday
//!
//! Business-day arithmetic over calendar dates, driven by composable holiday
//! rules.
//!
//! This crate is a **façade** that re-exports the public items of the
//! workspace crates. Application code should depend on this crate rather
//! than on `bizday-core` / `bizday-time` directly.
//!
//! ## Quick start
//!
//! ```rust
//! use bizday::time::{BizdayCalculator, HolidayDiscriminator, HolidayRule};
//! use chrono::NaiveDate;
//!
//! let holidays = HolidayDiscriminator::new([
//!     HolidayRule::saturday_or_sunday(),
//!     HolidayRule::between_1231_0103(),
//! ])?;
//! let calc = BizdayCalculator::with_holidays(&holidays);
//!
//! let eve = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
//! assert_eq!(
//!     calc.n_next_bizday(eve, 1)?,
//!     NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
//! );
//! # Ok::<(), bizday::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and tracing setup.
pub use bizday_core as core;

/// Date sequences, holiday discriminators, and business-day operations.
pub use bizday_time as time;

pub use bizday_core::{init_tracing, Error, Result};
pub use bizday_time::{BizdayCalculator, DefaultHolidays, HolidayDiscriminator, HolidayRule};
