//! Terminal output for tempo.

mod progress;

pub use progress::ProgressDisplay;

use std::time::Duration;

use serde::Serialize;

use crate::error::TempoError;
use crate::session::SessionKind;

/// Sink for once-per-second remaining-time updates during a countdown.
pub trait TickDisplay {
    /// A session countdown is about to begin.
    fn session_started(&mut self, kind: SessionKind, total: Duration);

    /// `remaining` is left on the clock; called once per second, before
    /// the loop sleeps toward the next second.
    fn tick(&mut self, remaining: Duration);

    /// The countdown reached zero.
    fn session_finished(&mut self);
}

/// Generic JSON formatter for any serializable type.
///
/// # Errors
///
/// Returns `TempoError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TempoError> {
    Ok(serde_json::to_string_pretty(value)?)
}
