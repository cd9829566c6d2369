//! The countdown tick loop.
//!
//! One tick per second of the total, each invoking the callback with the
//! remaining time *before* sleeping toward the next second. Sleeps are
//! anchored to the loop's start instant, so sleep error cannot accumulate
//! into visible drift over a long session.

use std::thread;
use std::time::{Duration, Instant};

/// Run a countdown over `total`, invoking `on_tick` once per remaining
/// second.
///
/// A zero-length total returns immediately without ticking.
pub fn run<F: FnMut(Duration)>(total: Duration, on_tick: F) {
    run_with_sleep(total, on_tick, thread::sleep);
}

/// The countdown loop with an injectable sleep, for tests.
fn run_with_sleep<F, S>(total: Duration, mut on_tick: F, mut sleep: S)
where
    F: FnMut(Duration),
    S: FnMut(Duration),
{
    let ticks = total.as_secs();
    let start = Instant::now();

    for elapsed in 0..ticks {
        on_tick(Duration::from_secs(ticks - elapsed));

        // Sleep until start + (elapsed + 1) seconds, not for a second.
        let target = start + Duration::from_secs(elapsed + 1);
        if let Some(wait) = target.checked_duration_since(Instant::now()) {
            sleep(wait);
        }
    }
}
