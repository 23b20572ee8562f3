//! # Countdown Formatter
//!
//! Turns a target timestamp and "now" into the remaining-time breakdown shown
//! next to every event.
//!
//! ```text
//! diff = target - now
//!
//!   diff < 0   →  Expired
//!   diff >= 0  →  Remaining { years, days, hours, minutes, seconds }
//! ```
//!
//! Units are fixed-size. A year is 365.25 days (31,557,600 s), not a calendar
//! year, so the breakdown never depends on which months lie in between.

use std::fmt;

pub const SECONDS_PER_YEAR: i64 = 31_557_600;
pub const SECONDS_PER_DAY: i64 = 86_400;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Literal shown in place of a breakdown once the target has passed.
pub const EXPIRED_MARKER: &str = "Expired";

/// Remaining time split into fixed-size units, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Breakdown {
    pub years: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Breakdown {
    /// Decompose a non-negative number of seconds.
    pub fn from_seconds(diff: i64) -> Self {
        let years = diff / SECONDS_PER_YEAR;
        let rest = diff - years * SECONDS_PER_YEAR;
        let days = rest / SECONDS_PER_DAY;
        let rest = rest - days * SECONDS_PER_DAY;
        let hours = rest / SECONDS_PER_HOUR;
        let rest = rest - hours * SECONDS_PER_HOUR;
        let minutes = rest / SECONDS_PER_MINUTE;
        let seconds = rest - minutes * SECONDS_PER_MINUTE;
        Self {
            years,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    /// Recompose the breakdown into seconds using the same unit constants.
    pub fn total_seconds(&self) -> i64 {
        self.years * SECONDS_PER_YEAR
            + self.days * SECONDS_PER_DAY
            + self.hours * SECONDS_PER_HOUR
            + self.minutes * SECONDS_PER_MINUTE
            + self.seconds
    }
}

impl fmt::Display for Breakdown {
    /// Prints from the largest non-zero unit down to seconds: `2y 15d 3h 4m 5s`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let units = [
            (self.years, 'y'),
            (self.days, 'd'),
            (self.hours, 'h'),
            (self.minutes, 'm'),
        ];
        let first = units.iter().position(|(n, _)| *n > 0);
        if let Some(start) = first {
            for (n, unit) in &units[start..] {
                write!(f, "{n}{unit} ")?;
            }
        }
        write!(f, "{}s", self.seconds)
    }
}

/// Result of comparing a target against "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Countdown {
    Expired,
    Remaining(Breakdown),
}

impl Countdown {
    pub fn is_expired(&self) -> bool {
        matches!(self, Countdown::Expired)
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Countdown::Expired => f.write_str(EXPIRED_MARKER),
            Countdown::Remaining(breakdown) => breakdown.fmt(f),
        }
    }
}

/// Countdown from `now` to `target`, both in epoch seconds.
///
/// Timestamps come from a hand-editable file, so the difference saturates
/// instead of overflowing. Only its sign matters at the extremes.
pub fn countdown(target: i64, now: i64) -> Countdown {
    let diff = target.saturating_sub(now);
    if diff < 0 {
        Countdown::Expired
    } else {
        Countdown::Remaining(Breakdown::from_seconds(diff))
    }
}

/// The same remaining time expressed in each unit on its own.
///
/// Used by the details pane. Values go negative once the target has passed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub seconds: i64,
    pub minutes: f64,
    pub hours: f64,
    pub days: f64,
    pub years: f64,
}

impl Totals {
    pub fn from_diff(diff: i64) -> Self {
        let d = diff as f64;
        Self {
            seconds: diff,
            minutes: d / SECONDS_PER_MINUTE as f64,
            hours: d / SECONDS_PER_HOUR as f64,
            days: d / SECONDS_PER_DAY as f64,
            years: d / SECONDS_PER_YEAR as f64,
        }
    }

    /// Rows of `(value, unit)` with the precision used on screen.
    pub fn rows(&self) -> [(String, &'static str); 5] {
        [
            (self.seconds.to_string(), "seconds"),
            (format!("{:.3}", self.minutes), "minutes"),
            (format!("{:.4}", self.hours), "hours"),
            (format!("{:.5}", self.days), "days"),
            (format!("{:.7}", self.years), "years"),
        ]
    }
}
