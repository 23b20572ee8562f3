//! # Input Validation
//!
//! Turns the raw add-form fields into an `Event`.
//!
//! Two time formats are accepted, chosen by length:
//!
//! | Input length | Format                 | Example               |
//! |--------------|------------------------|-----------------------|
//! | < 19         | `YYYY-MM-DD`           | `2030-01-01`          |
//! | >= 19        | `YYYY-MM-DD HH:MM:SS`  | `2030-01-01 18:30:00` |
//!
//! Both are read as local time. A date alone means local midnight.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use thiserror::Error;

use crate::core::event::{Event, local_midnight};

pub const SHORT_TIME_FORMAT: &str = "%Y-%m-%d";
pub const LONG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Length of an input in the long format, e.g. `2006-01-02 15:04:05`.
pub const LONG_TIME_LEN: usize = 19;

/// Digit positions (`0`) and separators of the long format. The short format
/// is its first ten characters.
const TIME_SHAPE: &[u8; LONG_TIME_LEN] = b"0000-00-00 00:00:00";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("empty fields")]
    EmptyFields,
    #[error("{0}")]
    InvalidTimeFormat(String),
    #[error("event time is in the past")]
    EventInPast,
}

/// Validate the add-form fields against `now`.
///
/// Only the both-empty case is rejected as empty: a nameless event with a valid
/// future time is accepted.
pub fn validate(name: &str, time: &str, now: DateTime<Local>) -> Result<Event, ValidationError> {
    if name.is_empty() && time.is_empty() {
        return Err(ValidationError::EmptyFields);
    }

    let when = parse_local_time(time)?;
    if when < now {
        return Err(ValidationError::EventInPast);
    }

    Ok(Event::new(name, when.timestamp()))
}

/// Parse `input` in the short or long format as local time.
pub fn parse_local_time(input: &str) -> Result<DateTime<Local>, ValidationError> {
    let invalid = |e: chrono::ParseError| {
        ValidationError::InvalidTimeFormat(format!("cannot parse \"{input}\": {e}"))
    };

    // chrono accepts one-digit fields such as `2030-1-2`
    if !has_fixed_width_shape(input) {
        return Err(ValidationError::InvalidTimeFormat(format!(
            "cannot parse \"{input}\": expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS"
        )));
    }

    if input.len() < LONG_TIME_LEN {
        let date = NaiveDate::parse_from_str(input, SHORT_TIME_FORMAT).map_err(invalid)?;
        return Ok(local_midnight(date));
    }

    let naive = NaiveDateTime::parse_from_str(input, LONG_TIME_FORMAT).map_err(invalid)?;
    Local.from_local_datetime(&naive).earliest().ok_or_else(|| {
        ValidationError::InvalidTimeFormat(format!(
            "\"{input}\" does not exist in the local timezone"
        ))
    })
}

fn has_fixed_width_shape(input: &str) -> bool {
    let shape: &[u8] = if input.len() < LONG_TIME_LEN {
        &TIME_SHAPE[..10]
    } else {
        TIME_SHAPE
    };
    input.len() == shape.len()
        && input.bytes().zip(shape).all(|(b, &s)| match s {
            b'0' => b.is_ascii_digit(),
            sep => b == sep,
        })
}
