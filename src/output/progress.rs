//! Progress-bar rendering for the countdown.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::core::duration::format_clock;
use crate::output::TickDisplay;
use crate::session::SessionKind;

/// Renders the countdown as a terminal progress bar, cleared on finish.
pub struct ProgressDisplay {
    bar: Option<ProgressBar>,
}

impl ProgressDisplay {
    /// Create a display with no active bar.
    #[must_use]
    pub const fn new() -> Self {
        Self { bar: None }
    }
}

impl Default for ProgressDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TickDisplay for ProgressDisplay {
    fn session_started(&mut self, _kind: SessionKind, total: Duration) {
        let bar = ProgressBar::new(total.as_secs());
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg:.bold} [{bar:20.green/dim}]")
                .unwrap_or_else(|e| panic!("Invalid progress template: {e}"))
                .progress_chars("█▓▒░ "),
        );
        self.bar = Some(bar);
    }

    fn tick(&mut self, remaining: Duration) {
        if let Some(bar) = &self.bar {
            bar.set_message(format!("{} remaining", format_clock(remaining)));
            bar.inc(1);
        }
    }

    fn session_finished(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}
