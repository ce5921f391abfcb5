//! Process-wide default holiday discriminator.
//!
//! [`DefaultHolidays`] is a process-wide singleton accessed via a
//! `std::sync::OnceLock`.  It is created on first use and seeded with the
//! Saturday/Sunday rule.  Every business-day operation that is not handed an
//! explicit predicate consults it.
//!
//! Thread safety: the rules live behind an `RwLock`.  Each add/remove batch
//! runs under a single write lock, so it is atomic.  Scoped overrides are
//! not serialized against one another; code running overrides from several
//! threads must serialize them itself.  Code that needs isolation (tests in
//! particular) should build its own
//! [`HolidayDiscriminator`](crate::discriminator::HolidayDiscriminator) and
//! pass it explicitly.

use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use bizday_core::errors::{Error, Result};
use chrono::NaiveDate;
use tracing::debug;

use crate::discriminator::HolidayDiscriminator;
use crate::holiday::{HolidayPredicate, HolidayRule};

/// The process-wide default holiday discriminator.
pub struct DefaultHolidays {
    discriminator: RwLock<HolidayDiscriminator>,
}

static INSTANCE: OnceLock<DefaultHolidays> = OnceLock::new();

impl std::fmt::Debug for DefaultHolidays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultHolidays")
            .field("names", &self.names())
            .finish()
    }
}

impl DefaultHolidays {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static DefaultHolidays {
        INSTANCE.get_or_init(|| {
            debug!("initialising default holiday discriminator");
            DefaultHolidays {
                discriminator: RwLock::new(HolidayDiscriminator::weekends()),
            }
        })
    }

    // A panic while holding the lock cannot leave a half-applied batch
    // behind, so a poisoned lock is still safe to use.
    fn read(&self) -> RwLockReadGuard<'_, HolidayDiscriminator> {
        self.discriminator
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HolidayDiscriminator> {
        self.discriminator
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a batch of rules.  See [`HolidayDiscriminator::add_rules`].
    pub fn add_rules(
        &self,
        rules: impl IntoIterator<Item = HolidayRule>,
        allow_overwrite: bool,
    ) -> Result<()> {
        self.write().add_rules(rules, allow_overwrite)
    }

    /// Remove rules by name.  See [`HolidayDiscriminator::remove_rules`].
    pub fn remove_rules<I, S>(&self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.write().remove_rules(names)
    }

    /// Registered rule names, in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.read().names()
    }

    /// A copy of the registered rules.
    pub fn rules(&self) -> Vec<HolidayRule> {
        self.read().rules()
    }

    /// A detached copy of the current discriminator.
    pub fn snapshot(&self) -> HolidayDiscriminator {
        (*self.read()).clone()
    }

    /// Replace the whole rule set, returning the previous one.
    pub fn replace(&self, discriminator: HolidayDiscriminator) -> HolidayDiscriminator {
        std::mem::replace(&mut *self.write(), discriminator)
    }
}

impl HolidayPredicate for DefaultHolidays {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.read().is_holiday(date)
    }
}

// ── Free functions ───────────────────────────────────────────────────────────

/// Register rules on the default discriminator.
pub fn add_global_rules(
    rules: impl IntoIterator<Item = HolidayRule>,
    allow_overwrite: bool,
) -> Result<()> {
    DefaultHolidays::instance().add_rules(rules, allow_overwrite)
}

/// Remove rules from the default discriminator.
pub fn remove_global_rules<I, S>(names: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    DefaultHolidays::instance().remove_rules(names)
}

/// Rule names registered on the default discriminator.
pub fn global_rule_names() -> Vec<String> {
    DefaultHolidays::instance().names()
}

/// A copy of the rules registered on the default discriminator.
pub fn global_rules() -> Vec<HolidayRule> {
    DefaultHolidays::instance().rules()
}

// ── Scoped override ──────────────────────────────────────────────────────────

/// RAII guard that overrides the default discriminator's rules.
///
/// On drop the registry is put back exactly as it was when the guard was
/// created (same names, same order, same predicates), whatever happened in
/// between.  This includes unwinding from a panic.
#[must_use = "the override is undone as soon as the guard is dropped"]
pub struct ScopedHolidayRules {
    saved: Option<HolidayDiscriminator>,
}

impl ScopedHolidayRules {
    /// Install `rules` on the default discriminator.
    ///
    /// With `all_replace` the existing rules are removed first.  If
    /// installation fails the registry is left untouched and the error is
    /// returned.
    pub fn new(
        rules: impl IntoIterator<Item = HolidayRule>,
        allow_overwrite: bool,
        all_replace: bool,
    ) -> Result<Self> {
        let target = DefaultHolidays::instance();
        let mut current = target.write();
        let saved = (*current).clone();
        if all_replace {
            current.clear();
        }
        if let Err(e) = current.add_rules(rules, allow_overwrite) {
            *current = saved;
            return Err(e);
        }
        debug!(names = ?current.names(), all_replace, "installed scoped holiday rules");
        Ok(Self { saved: Some(saved) })
    }
}

impl Drop for ScopedHolidayRules {
    fn drop(&mut self) {
        if let Some(saved) = self.saved.take() {
            debug!(names = ?saved.names(), "restoring holiday rules");
            DefaultHolidays::instance().replace(saved);
        }
    }
}

/// Run `body` with `rules` installed on the default discriminator.
///
/// The previous rules are restored when `body` returns, whether it returns
/// `Ok` or `Err`, and also if it panics.
///
/// ```
/// use bizday_time::default_discriminator::{global_rule_names, with_holiday_rules};
/// use bizday_time::holiday::HolidayRule;
///
/// let before = global_rule_names();
/// let inside = with_holiday_rules([HolidayRule::new_year_day()], false, true, |hd| {
///     Ok::<_, bizday_core::Error>(hd.names())
/// })
/// .unwrap();
/// assert_eq!(inside, vec!["is_new_year_day"]);
/// assert_eq!(global_rule_names(), before);
/// ```
pub fn with_holiday_rules<T, E, F>(
    rules: impl IntoIterator<Item = HolidayRule>,
    allow_overwrite: bool,
    all_replace: bool,
    body: F,
) -> std::result::Result<T, E>
where
    F: FnOnce(&'static DefaultHolidays) -> std::result::Result<T, E>,
    E: From<Error>,
{
    let _scope = ScopedHolidayRules::new(rules, allow_overwrite, all_replace)?;
    body(DefaultHolidays::instance())
}
