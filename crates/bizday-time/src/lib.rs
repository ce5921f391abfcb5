//! # bizday-time
//!
//! Date sequences, holiday discriminators, and business-day operations.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day operations over an explicit holiday predicate.
pub mod bizday;

/// `BizdayCalculator` — operations over date-like inputs.
pub mod calculator;

/// Date and date-time inputs.
pub mod date_like;

/// `DateRange` — lazy date sequences.
pub mod date_range;

/// The process-wide default discriminator and scoped overrides.
pub mod default_discriminator;

/// `HolidayDiscriminator` — OR-composed named holiday rules.
pub mod discriminator;

/// Holiday predicates and built-in rules.
pub mod holiday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use bizday::{
    bizday_range, count_bizdays, is_bizday, n_next_bizday, n_prev_bizday, next_bizday,
    prev_bizday, BizdayRange,
};
pub use calculator::{BizdayCalculator, RangeOptions};
pub use date_like::{truncate_time, DateLike, DatetimeHandler};
pub use date_range::{date_range, DateRange, DateRangeBuilder};
pub use default_discriminator::{
    add_global_rules, global_rule_names, global_rules, remove_global_rules, with_holiday_rules,
    DefaultHolidays, ScopedHolidayRules,
};
pub use discriminator::HolidayDiscriminator;
pub use holiday::{HolidayPredicate, HolidayRule};
