//! Start command implementation.
//!
//! Wires the loaded configuration, the progress-bar display, the audio
//! player, and stdin into the session machine, then runs it until the
//! user exits.

use std::io;

use crate::cli::args::StartArgs;
use crate::config::Config;
use crate::error::TempoError;
use crate::output::ProgressDisplay;
use crate::session::{SessionKind, SessionMachine};
use crate::sound::RodioPlayer;

/// Execute the start command.
///
/// # Errors
///
/// Returns an error if the duration argument is malformed or if audio
/// playback fails mid-session.
pub fn start(config: &Config, args: &StartArgs) -> Result<(), TempoError> {
    let stdin = io::stdin();
    let mut machine = SessionMachine::new(
        config,
        stdin.lock(),
        ProgressDisplay::new(),
        RodioPlayer::new(),
        args.silent,
    );

    machine.start(SessionKind::Focus, args.raw_duration().as_deref())
}
