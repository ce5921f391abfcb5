//! Holiday discriminator — an OR-composition of named holiday rules.
//!
//! A date is a holiday under a [`HolidayDiscriminator`] if **any** of its
//! registered rules flags it; an empty discriminator flags nothing.  Rules
//! are kept in insertion order and keyed by name.
//!
//! Batch mutations ([`add_rules`](HolidayDiscriminator::add_rules),
//! [`remove_rules`](HolidayDiscriminator::remove_rules)) check the whole batch
//! before touching the registry, so a failed call leaves it unchanged.

use bizday_core::errors::{Error, Result};
use chrono::NaiveDate;
use tracing::debug;

use crate::holiday::{HolidayPredicate, HolidayRule};

/// A registry of named holiday rules, callable as a single predicate.
#[derive(Debug, Clone, Default)]
pub struct HolidayDiscriminator {
    rules: Vec<HolidayRule>,
}

/// Collapse a batch so that later rules replace earlier ones with the same
/// name, keeping the position of the first occurrence.
fn collapse(rules: impl IntoIterator<Item = HolidayRule>) -> Result<Vec<HolidayRule>> {
    let mut batch: Vec<HolidayRule> = Vec::new();
    for rule in rules {
        if rule.name().trim().is_empty() {
            return Err(Error::InvalidArgument(
                "holiday rule has no name to register it under".into(),
            ));
        }
        match batch.iter_mut().find(|r| r.name() == rule.name()) {
            Some(slot) => *slot = rule,
            None => batch.push(rule),
        }
    }
    Ok(batch)
}

impl HolidayDiscriminator {
    /// Create a discriminator from zero or more rules.
    ///
    /// Duplicate names within `rules` resolve to the last one given.
    pub fn new(rules: impl IntoIterator<Item = HolidayRule>) -> Result<Self> {
        Ok(Self {
            rules: collapse(rules)?,
        })
    }

    /// A discriminator flagging Saturdays and Sundays.
    pub fn weekends() -> Self {
        Self {
            rules: vec![HolidayRule::saturday_or_sunday()],
        }
    }

    /// Registered rule names, in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.name().to_owned()).collect()
    }

    /// A copy of the registered rules, in insertion order.
    ///
    /// Changing the returned vector does not affect the discriminator.
    pub fn rules(&self) -> Vec<HolidayRule> {
        self.rules.clone()
    }

    /// Look up a rule by name.
    pub fn get(&self, name: &str) -> Option<&HolidayRule> {
        self.rules.iter().find(|r| r.name() == name)
    }

    /// Return `true` if a rule named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Return `true` if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Register a batch of rules.
    ///
    /// Within the batch the last rule for a name wins.  If any name is
    /// already registered and `allow_overwrite` is false, fails with
    /// [`Error::DuplicateName`] and registers nothing.  An overwritten rule
    /// keeps its original position.
    pub fn add_rules(
        &mut self,
        rules: impl IntoIterator<Item = HolidayRule>,
        allow_overwrite: bool,
    ) -> Result<()> {
        let batch = collapse(rules)?;
        if !allow_overwrite {
            if let Some(dup) = batch.iter().find(|r| self.contains(r.name())) {
                return Err(Error::DuplicateName(format!(
                    "'{}' already exists; allow overwriting to replace it",
                    dup.name()
                )));
            }
        }
        debug!(
            names = ?batch.iter().map(HolidayRule::name).collect::<Vec<_>>(),
            allow_overwrite,
            "adding holiday rules"
        );
        for rule in batch {
            match self.rules.iter_mut().find(|r| r.name() == rule.name()) {
                Some(slot) => *slot = rule,
                None => self.rules.push(rule),
            }
        }
        Ok(())
    }

    /// Register a single rule.
    pub fn add_rule(&mut self, rule: HolidayRule, allow_overwrite: bool) -> Result<()> {
        self.add_rules([rule], allow_overwrite)
    }

    /// Remove the rules with the given names.
    ///
    /// Fails with [`Error::UnknownName`] and removes nothing if any name is
    /// not registered.
    pub fn remove_rules<I, S>(&mut self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = names.into_iter().collect();
        if let Some(missing) = names.iter().find(|n| !self.contains(n.as_ref())) {
            return Err(Error::UnknownName(format!(
                "'{}' does not exist",
                missing.as_ref()
            )));
        }
        debug!(names = ?names.iter().map(|n| n.as_ref()).collect::<Vec<&str>>(), "removing holiday rules");
        self.rules
            .retain(|r| !names.iter().any(|n| n.as_ref() == r.name()));
        Ok(())
    }

    /// Remove every rule.
    pub fn clear(&mut self) {
        debug!(count = self.rules.len(), "clearing holiday rules");
        self.rules.clear();
    }
}

impl HolidayPredicate for HolidayDiscriminator {
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.rules.iter().any(|r| r.is_holiday(date))
    }
}
