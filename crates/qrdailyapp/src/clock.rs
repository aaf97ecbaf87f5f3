//! # Clock
//!
//! The tracker never calls `Local::now()` directly. It asks a [`Clock`] for
//! the current instant and for the calendar date of any instant. Dates are
//! taken under the zone rules in force at that instant, so a solve stored
//! before a daylight-saving change keeps the date it had when it happened.
//!
//! - [`SystemClock`]: the machine's local zone (`chrono::Local`).
//! - [`FixedClock`]: a settable clock for tests and replay, with [`ZoneRules`]
//!   standing in for a real time zone.

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, Utc};
use std::cell::Cell;

pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;

    /// Local calendar date of `at`.
    fn date_of(&self, at: DateTime<FixedOffset>) -> NaiveDate;

    fn today(&self) -> NaiveDate {
        self.date_of(self.now())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }

    fn date_of(&self, at: DateTime<FixedOffset>) -> NaiveDate {
        at.with_timezone(&Local).date_naive()
    }
}

/// A zone as a base offset plus offset changes at given UTC instants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneRules {
    base: FixedOffset,
    transitions: Vec<(DateTime<Utc>, FixedOffset)>,
}

impl ZoneRules {
    pub fn fixed(offset: FixedOffset) -> Self {
        Self {
            base: offset,
            transitions: Vec::new(),
        }
    }

    /// From `at` onwards the zone uses `offset`.
    pub fn with_transition(mut self, at: DateTime<Utc>, offset: FixedOffset) -> Self {
        self.transitions.push((at, offset));
        self.transitions.sort_by_key(|(t, _)| *t);
        self
    }

    pub fn offset_at(&self, at: DateTime<Utc>) -> FixedOffset {
        self.transitions
            .iter()
            .rev()
            .find(|(t, _)| *t <= at)
            .map(|(_, offset)| *offset)
            .unwrap_or(self.base)
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Cell<DateTime<Utc>>,
    zone: ZoneRules,
}

impl FixedClock {
    /// A clock at `now` in a zone fixed to `now`'s offset.
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self {
            now: Cell::new(now.to_utc()),
            zone: ZoneRules::fixed(now.timezone()),
        }
    }

    /// Parses an RFC 3339 timestamp, e.g. `"2024-03-10T09:00:00+01:00"`.
    pub fn at(rfc3339: &str) -> Result<Self, chrono::ParseError> {
        Ok(Self::new(DateTime::parse_from_rfc3339(rfc3339)?))
    }

    pub fn with_zone(mut self, zone: ZoneRules) -> Self {
        self.zone = zone;
        self
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_days(&self, days: i64) {
        self.advance(Duration::days(days));
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        let now = self.now.get();
        now.with_timezone(&self.zone.offset_at(now))
    }

    fn date_of(&self, at: DateTime<FixedOffset>) -> NaiveDate {
        let utc = at.to_utc();
        utc.with_timezone(&self.zone.offset_at(utc)).date_naive()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }

    fn date_of(&self, at: DateTime<FixedOffset>) -> NaiveDate {
        (**self).date_of(at)
    }
}
