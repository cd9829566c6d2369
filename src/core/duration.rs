//! Duration resolution and clock formatting.
//!
//! A session length comes from one of three places, first match wins:
//! - no argument: the configured default, in minutes
//! - a plain non-negative integer: whole minutes
//! - `until H(H)MM`: the time from now until that wall-clock time today,
//!   rolling forward exactly 24 hours if it has already passed
//!
//! Anything else is an `InvalidDuration` error. A resolved length of zero
//! is allowed and runs a zero-tick countdown.

use std::time::Duration;

use chrono::{Local, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::TempoError;

static UNTIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // 1-2 digit hour followed by an exactly 2-digit minute
    Regex::new(r"^until\s+(\d{1,2})(\d{2})$")
        .unwrap_or_else(|e| panic!("Invalid until regex: {e}"))
});

/// Resolve a session duration from the raw CLI input and the configured
/// default.
///
/// # Errors
///
/// Returns `InvalidDuration` when input is present but unparseable.
pub fn resolve(raw: Option<&str>, default_minutes: u32) -> Result<Duration, TempoError> {
    match raw {
        None => Ok(minutes(default_minutes)),
        Some(input) => parse(input),
    }
}

/// Parse an explicit duration argument.
///
/// # Errors
///
/// Returns `InvalidDuration` for anything that is neither a non-negative
/// whole minute count nor a valid `until H(H)MM` clock time.
pub fn parse(input: &str) -> Result<Duration, TempoError> {
    let input = input.trim();

    // u64 parsing rejects negatives and fractions outright; the seconds
    // conversion can still overflow for absurd minute counts, which get
    // the same rejection as unparseable input
    if let Ok(mins) = input.parse::<u64>() {
        return mins
            .checked_mul(60)
            .map(Duration::from_secs)
            .ok_or_else(|| TempoError::InvalidDuration(input.to_string()));
    }

    if let Some(duration) = parse_until(input, Local::now().naive_local()) {
        return Ok(duration);
    }

    Err(TempoError::InvalidDuration(input.to_string()))
}

/// A whole number of configured minutes as a `Duration`.
#[must_use]
pub fn minutes(m: u32) -> Duration {
    Duration::from_secs(u64::from(m) * 60)
}

/// Parse the `until H(H)MM` form against a given "now".
fn parse_until(input: &str, now: NaiveDateTime) -> Option<Duration> {
    let caps = UNTIL_PATTERN.captures(input)?;
    let hour: u32 = caps[1].parse().ok()?;
    let minute: u32 = caps[2].parse().ok()?;

    let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
    Some(until(now, time))
}

/// Time from `now` until the next occurrence of `target` on the clock.
fn until(now: NaiveDateTime, target: NaiveTime) -> Duration {
    let mut at = NaiveDateTime::new(now.date(), target);
    if at <= now {
        at += chrono::Duration::hours(24);
    }

    let secs = (at - now).num_seconds();
    Duration::from_secs(u64::try_from(secs).unwrap_or(0))
}

/// Format a duration for the countdown display.
///
/// `H:MM:SS` at an hour or more, `MM:SS` below, zero-padded to two digits
/// per field and rounded to the nearest second.
#[must_use]
pub fn format_clock(d: Duration) -> String {
    let total = d.as_secs() + u64::from(d.subsec_millis() >= 500);
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{hours}:{mins:02}:{secs:02}")
    } else {
        format!("{mins:02}:{secs:02}")
    }
}
