//! # Events
//!
//! A named point in time. Persisted as `{"name": ..., "ts": ...}`.

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::core::countdown::countdown;

/// Name of the event seeded into a fresh events file.
pub const SEED_EVENT_NAME: &str = "Golang's Birthday";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    /// Epoch seconds.
    #[serde(rename = "ts")]
    pub time: i64,
}

impl Event {
    pub fn new(name: impl Into<String>, time: i64) -> Self {
        Self {
            name: name.into(),
            time,
        }
    }

    /// Primary line in the event list.
    pub fn title(&self) -> &str {
        &self.name
    }

    /// Secondary line in the event list: the live countdown.
    pub fn description(&self, now: i64) -> String {
        countdown(self.time, now).to_string()
    }

    /// Text matched by the list filter.
    pub fn filter_key(&self) -> &str {
        &self.name
    }

    pub fn local_time(&self) -> DateTime<Local> {
        Local
            .timestamp_opt(self.time, 0)
            .single()
            .unwrap_or_else(|| DateTime::<Utc>::UNIX_EPOCH.with_timezone(&Local))
    }

    /// `Mon, 02 Jan 2006 15:04:05 +01:00` style.
    pub fn rfc1123(&self) -> String {
        self.local_time()
            .format("%a, %d %b %Y %H:%M:%S %Z")
            .to_string()
    }

    /// `2006-01-02 15:04:05 +0100` style.
    pub fn basic_string(&self) -> String {
        self.local_time().format("%Y-%m-%d %H:%M:%S %z").to_string()
    }
}

/// Midnight of `date` in the local timezone.
///
/// Falls back to reading the wall time as UTC when local midnight does not exist.
pub fn local_midnight(date: NaiveDate) -> DateTime<Local> {
    let naive = date.and_hms_opt(0, 0, 0).unwrap_or_default();
    Local
        .from_local_datetime(&naive)
        .earliest()
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
}

/// The seed event: the next November 10 at local midnight strictly after `now`.
pub fn next_golang_anniversary(now: DateTime<Local>) -> Event {
    let anniversary = |year: i32| {
        NaiveDate::from_ymd_opt(year, 11, 10)
            .map(local_midnight)
            .unwrap_or(now)
    };
    let this_year = anniversary(now.year());
    let when = if now < this_year {
        this_year
    } else {
        anniversary(now.year() + 1)
    };
    Event::new(SEED_EVENT_NAME, when.timestamp())
}
