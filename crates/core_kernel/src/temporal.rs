//! Calendar handling
//!
//! Claims are dated at day granularity, so everything here works on
//! `NaiveDate`. "Today" comes from a [`Clock`], which lets the store run on
//! the wall clock in a configured timezone while tests pin the date.

use chrono::{Datelike, Days, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::Arc;

/// Timezone used to decide which calendar day "today" is
///
/// Wraps chrono_tz::Tz with serialization by IANA name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Returns the IANA name, e.g. `Europe/London`
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// The current calendar date in this timezone
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.0).date_naive()
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::UTC)
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Timezone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s.trim())
            .map(Timezone)
            .map_err(|_| format!("Invalid timezone: {}", s))
    }
}

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Source of the current calendar date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Wall clock, read in a fixed timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    timezone: Timezone,
}

impl SystemClock {
    pub fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        self.timezone.today()
    }
}

/// A clock that only moves when told to
///
/// Clones share the same date, so a test can hand one clone to a store and
/// keep another to move time around.
#[derive(Debug, Clone)]
pub struct ManualClock {
    days_from_ce: Arc<AtomicI32>,
}

impl ManualClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            days_from_ce: Arc::new(AtomicI32::new(today.num_days_from_ce())),
        }
    }

    /// Starts at the current UTC date
    pub fn starting_today() -> Self {
        Self::new(Utc::now().date_naive())
    }

    pub fn set(&self, date: NaiveDate) {
        self.days_from_ce
            .store(date.num_days_from_ce(), Ordering::SeqCst);
    }

    /// Moves the date forward, stopping at [`NaiveDate::MAX`]
    pub fn advance_days(&self, days: u32) {
        let days = i32::try_from(days).unwrap_or(i32::MAX);
        let last = NaiveDate::MAX.num_days_from_ce();
        let _ = self
            .days_from_ce
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |current| {
                Some(current.saturating_add(days).min(last))
            });
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        let days = self.days_from_ce.load(Ordering::SeqCst);
        NaiveDate::from_num_days_from_ce_opt(days).unwrap_or(NaiveDate::MIN)
    }
}

/// A closed range of calendar days ending on a given date
///
/// `TrailingWindow::ending_on(today, 365)` spans from 365 days before today
/// through today, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailingWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl TrailingWindow {
    pub fn ending_on(end: NaiveDate, days: u32) -> Self {
        let start = end
            .checked_sub_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MIN);
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns true if `date` falls inside the window
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}
