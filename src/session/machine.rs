//! The focus/break session state machine.
//!
//! Owns the only mutable session state in the process and drives each
//! session through resolve -> announce -> countdown -> chime -> prompt.
//! Canonical transitions: focus -> break, break -> focus, either -> exit,
//! plus a same-kind repeat with a freshly prompted duration. Unrecognized
//! input at the prompt exits with a notice rather than an error.

use std::fmt;
use std::io::BufRead;
use std::time::Duration;

use colored::Colorize;

use crate::config::Config;
use crate::core::duration::{self, format_clock};
use crate::error::TempoError;
use crate::output::TickDisplay;
use crate::session::countdown;
use crate::sound::{SoundPlayer, SoundSource};

/// Kind of session being timed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    /// A focused work interval.
    Focus,
    /// A rest interval.
    Break,
}

impl SessionKind {
    /// Lowercase display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Focus => "focus",
            Self::Break => "break",
        }
    }

    /// The kind that canonically follows this one.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Focus => Self::Break,
            Self::Break => Self::Focus,
        }
    }

    /// The configured default length for this kind, in minutes.
    #[must_use]
    pub const fn default_minutes(self, config: &Config) -> u32 {
        match self {
            Self::Focus => config.default_session_duration,
            Self::Break => config.default_break_duration,
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The choice read at each session boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserChoice {
    /// Move on to the next kind with its default duration.
    Continue,
    /// Repeat the finished kind with a freshly prompted duration; a blank
    /// reply at the prompt reuses the finished session's length.
    NewDuration,
    /// Stop here.
    Exit,
}

impl UserChoice {
    /// Parse one line of input read after `finished` completed.
    ///
    /// The continue key depends on the finished kind: `b` starts the break
    /// after a focus session, `s` starts the next focus session after a
    /// break. Returns `None` for anything unrecognized, which callers
    /// treat as an implicit exit.
    #[must_use]
    pub fn from_input(finished: SessionKind, input: &str) -> Option<Self> {
        match (finished, input.trim().to_lowercase().as_str()) {
            (SessionKind::Focus, "b") | (SessionKind::Break, "s") => Some(Self::Continue),
            (_, "n") => Some(Self::NewDuration),
            (_, "x") => Some(Self::Exit),
            _ => None,
        }
    }
}

/// The currently active session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    /// Kind of the running session.
    pub kind: SessionKind,
    /// The resolved length it was started with.
    pub requested: Duration,
}

/// Orchestrates focus/break sessions over a display, a sound player, and
/// a line-based input source.
///
/// The input is any `BufRead` so tests can inject choices instead of
/// reading real stdin.
pub struct SessionMachine<'a, R, D, P> {
    config: &'a Config,
    input: R,
    display: D,
    player: P,
    silent: bool,
    state: Option<SessionState>,
}

impl<'a, R, D, P> SessionMachine<'a, R, D, P>
where
    R: BufRead,
    D: TickDisplay,
    P: SoundPlayer,
{
    /// Create a machine in the idle state.
    pub const fn new(config: &'a Config, input: R, display: D, player: P, silent: bool) -> Self {
        Self {
            config,
            input,
            display,
            player,
            silent,
            state: None,
        }
    }

    /// The active session, if any.
    #[must_use]
    pub const fn state(&self) -> Option<SessionState> {
        self.state
    }

    /// Run sessions starting from `kind` until the user exits.
    ///
    /// # Errors
    ///
    /// Returns an error if a duration argument cannot be parsed (before
    /// any countdown starts) or if audio playback fails. A missing custom
    /// sound file is not an error here: it degrades to the builtin chime
    /// with a warning.
    pub fn start(&mut self, kind: SessionKind, raw_duration: Option<&str>) -> Result<(), TempoError> {
        let length = duration::resolve(raw_duration, kind.default_minutes(self.config))?;

        let mut next = Some((kind, length));
        while let Some((kind, length)) = next {
            self.run_session(kind, length)?;
            next = self.next_transition(kind)?;
        }

        self.state = None;
        Ok(())
    }

    /// Run a single session to completion: announce, count down, chime.
    fn run_session(&mut self, kind: SessionKind, length: Duration) -> Result<(), TempoError> {
        self.state = Some(SessionState {
            kind,
            requested: length,
        });

        println!(
            "Starting {} timer for {}",
            kind.display_name().bold(),
            format_clock(length)
        );

        self.display.session_started(kind, length);
        let display = &mut self.display;
        countdown::run(length, |remaining| display.tick(remaining));
        self.display.session_finished();

        if self.silent {
            return Ok(());
        }
        self.signal_completion(kind)
    }

    /// Play the configured completion sound, falling back to the builtin
    /// chime when a custom file is missing.
    fn signal_completion(&mut self, kind: SessionKind) -> Result<(), TempoError> {
        let source = SoundSource::for_kind(kind, self.config);

        match self.player.play(&source) {
            Err(TempoError::SoundNotFound(path)) => {
                eprintln!(
                    "{}: custom sound not found at {}, using the builtin chime",
                    "warning".yellow().bold(),
                    path.display()
                );
                self.player.play(&SoundSource::Builtin)
            }
            other => other,
        }
    }

    /// Read one choice and compute the next session, if any.
    fn next_transition(
        &mut self,
        finished: SessionKind,
    ) -> Result<Option<(SessionKind, Duration)>, TempoError> {
        println!("{}", prompt_for(finished));
        let line = self.read_line()?;

        match UserChoice::from_input(finished, &line) {
            Some(UserChoice::Continue) => {
                let next = finished.next();
                let length = duration::resolve(None, next.default_minutes(self.config))?;
                Ok(Some((next, length)))
            }
            Some(UserChoice::NewDuration) => {
                let previous = self.state.map_or(Duration::ZERO, |state| state.requested);
                println!(
                    "How many minutes should the new {} session be? (blank repeats {})",
                    finished.display_name(),
                    format_clock(previous)
                );
                let reply = self.read_line()?;
                let length = if reply.trim().is_empty() {
                    previous
                } else {
                    // A bad reply here is fatal, matching the pre-countdown policy
                    duration::parse(&reply)?
                };
                Ok(Some((finished, length)))
            }
            Some(UserChoice::Exit) => {
                println!("Exiting.");
                Ok(None)
            }
            None => {
                println!("Invalid choice, exiting.");
                Ok(None)
            }
        }
    }

    fn read_line(&mut self) -> Result<String, TempoError> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line)
    }
}

/// The boundary prompt for a finished session kind.
fn prompt_for(finished: SessionKind) -> String {
    match finished {
        SessionKind::Focus => format!(
            "Take a {}reak, repeat with a {}ew duration, or e{}it?",
            "[b]".bold(),
            "[n]".bold(),
            "[x]".bold()
        ),
        SessionKind::Break => format!(
            "{}tart another focus session, repeat the break with a {}ew duration, or e{}it?",
            "[s]".bold(),
            "[n]".bold(),
            "[x]".bold()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io::Cursor;
    use std::path::PathBuf;
    use std::rc::Rc;

    use mockall::Sequence;

    use crate::sound::MockSoundPlayer;

    /// Records display calls for later inspection.
    #[derive(Default)]
    struct RecordingDisplay {
        started: Rc<RefCell<Vec<(SessionKind, Duration)>>>,
        ticks: Rc<RefCell<Vec<Duration>>>,
    }

    impl TickDisplay for RecordingDisplay {
        fn session_started(&mut self, kind: SessionKind, total: Duration) {
            self.started.borrow_mut().push((kind, total));
        }

        fn tick(&mut self, remaining: Duration) {
            self.ticks.borrow_mut().push(remaining);
        }

        fn session_finished(&mut self) {}
    }

    /// Config whose defaults are all zero minutes, so tests never sleep.
    fn zero_config() -> Config {
        Config {
            default_session_duration: 0,
            default_break_duration: 0,
            ..Config::default()
        }
    }

    fn quiet_player() -> MockSoundPlayer {
        let mut player = MockSoundPlayer::new();
        player.expect_play().returning(|_| Ok(()));
        player
    }

    #[test]
    fn test_choice_parsing_after_focus() {
        assert_eq!(
            UserChoice::from_input(SessionKind::Focus, "b\n"),
            Some(UserChoice::Continue)
        );
        assert_eq!(
            UserChoice::from_input(SessionKind::Focus, " X "),
            Some(UserChoice::Exit)
        );
        assert_eq!(
            UserChoice::from_input(SessionKind::Focus, "n"),
            Some(UserChoice::NewDuration)
        );
        // 's' only continues after a break
        assert_eq!(UserChoice::from_input(SessionKind::Focus, "s"), None);
        assert_eq!(UserChoice::from_input(SessionKind::Focus, "z"), None);
    }

    #[test]
    fn test_choice_parsing_after_break() {
        assert_eq!(
            UserChoice::from_input(SessionKind::Break, "s"),
            Some(UserChoice::Continue)
        );
        assert_eq!(UserChoice::from_input(SessionKind::Break, "b"), None);
        assert_eq!(
            UserChoice::from_input(SessionKind::Break, "x"),
            Some(UserChoice::Exit)
        );
    }

    #[test]
    fn test_exit_choice_ends_machine() {
        let config = zero_config();
        let display = RecordingDisplay::default();
        let started = Rc::clone(&display.started);

        let mut machine = SessionMachine::new(
            &config,
            Cursor::new("x\n"),
            display,
            quiet_player(),
            false,
        );

        machine.start(SessionKind::Focus, Some("0")).unwrap();

        assert_eq!(
            started.borrow().as_slice(),
            &[(SessionKind::Focus, Duration::ZERO)]
        );
        assert_eq!(machine.state(), None);
    }

    #[test]
    fn test_invalid_choice_exits_cleanly() {
        let config = zero_config();
        let mut machine = SessionMachine::new(
            &config,
            Cursor::new("definitely not a choice\n"),
            RecordingDisplay::default(),
            quiet_player(),
            false,
        );

        assert!(machine.start(SessionKind::Focus, Some("0")).is_ok());
    }

    #[test]
    fn test_focus_transitions_to_break() {
        let config = zero_config();
        let display = RecordingDisplay::default();
        let started = Rc::clone(&display.started);

        let mut machine = SessionMachine::new(
            &config,
            Cursor::new("b\nx\n"),
            display,
            quiet_player(),
            false,
        );

        machine.start(SessionKind::Focus, Some("0")).unwrap();

        assert_eq!(
            started.borrow().as_slice(),
            &[
                (SessionKind::Focus, Duration::ZERO),
                (SessionKind::Break, Duration::ZERO),
            ]
        );
    }

    #[test]
    fn test_break_transitions_back_to_focus() {
        let config = zero_config();
        let display = RecordingDisplay::default();
        let started = Rc::clone(&display.started);

        let mut machine = SessionMachine::new(
            &config,
            Cursor::new("s\nx\n"),
            display,
            quiet_player(),
            true,
        );

        machine.start(SessionKind::Break, None).unwrap();

        assert_eq!(
            started.borrow().as_slice(),
            &[
                (SessionKind::Break, Duration::ZERO),
                (SessionKind::Focus, Duration::ZERO),
            ]
        );
    }

    #[test]
    fn test_new_duration_repeats_same_kind() {
        let config = zero_config();
        let display = RecordingDisplay::default();
        let started = Rc::clone(&display.started);

        let mut machine = SessionMachine::new(
            &config,
            Cursor::new("n\n0\nx\n"),
            display,
            quiet_player(),
            true,
        );

        machine.start(SessionKind::Focus, Some("0")).unwrap();

        assert_eq!(
            started.borrow().as_slice(),
            &[
                (SessionKind::Focus, Duration::ZERO),
                (SessionKind::Focus, Duration::ZERO),
            ]
        );
    }

    #[test]
    fn test_blank_new_duration_reply_repeats_previous_length() {
        // Default is nonzero, so falling back to it instead of the
        // finished session's requested length would be visible
        let config = Config {
            default_session_duration: 25,
            ..zero_config()
        };
        let display = RecordingDisplay::default();
        let started = Rc::clone(&display.started);

        let mut machine = SessionMachine::new(
            &config,
            Cursor::new("n\n\nx\n"),
            display,
            quiet_player(),
            true,
        );

        machine.start(SessionKind::Focus, Some("0")).unwrap();

        assert_eq!(
            started.borrow().as_slice(),
            &[
                (SessionKind::Focus, Duration::ZERO),
                (SessionKind::Focus, Duration::ZERO),
            ]
        );
    }

    #[test]
    fn test_bad_new_duration_reply_is_fatal() {
        let config = zero_config();
        let mut machine = SessionMachine::new(
            &config,
            Cursor::new("n\nforever\n"),
            RecordingDisplay::default(),
            quiet_player(),
            true,
        );

        let result = machine.start(SessionKind::Focus, Some("0"));
        assert!(matches!(result, Err(TempoError::InvalidDuration(_))));
    }

    #[test]
    fn test_bad_initial_duration_fails_before_countdown() {
        let config = zero_config();
        let display = RecordingDisplay::default();
        let started = Rc::clone(&display.started);

        let mut player = MockSoundPlayer::new();
        player.expect_play().times(0);

        let mut machine =
            SessionMachine::new(&config, Cursor::new(""), display, player, false);

        let result = machine.start(SessionKind::Focus, Some("nope"));

        assert!(matches!(result, Err(TempoError::InvalidDuration(_))));
        assert!(started.borrow().is_empty());
    }

    #[test]
    fn test_silent_session_never_plays() {
        let config = zero_config();
        let mut player = MockSoundPlayer::new();
        player.expect_play().times(0);

        let mut machine = SessionMachine::new(
            &config,
            Cursor::new("x\n"),
            RecordingDisplay::default(),
            player,
            true,
        );

        machine.start(SessionKind::Focus, Some("0")).unwrap();
    }

    #[test]
    fn test_missing_custom_sound_falls_back_to_builtin() {
        let config = Config {
            focus_sound_type: crate::config::SoundType::Custom,
            custom_focus_sound: "sounds/missing.mp3".to_string(),
            ..zero_config()
        };

        let mut seq = Sequence::new();
        let mut player = MockSoundPlayer::new();
        player
            .expect_play()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(TempoError::SoundNotFound(PathBuf::from("sounds/missing.mp3"))));
        player
            .expect_play()
            .withf(|source| *source == SoundSource::Builtin)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let mut machine = SessionMachine::new(
            &config,
            Cursor::new("x\n"),
            RecordingDisplay::default(),
            player,
            false,
        );

        assert!(machine.start(SessionKind::Focus, Some("0")).is_ok());
    }

    #[test]
    fn test_playback_error_is_fatal() {
        let config = zero_config();
        let mut player = MockSoundPlayer::new();
        player
            .expect_play()
            .times(1)
            .returning(|_| Err(TempoError::Playback("no output device".to_string())));

        let mut machine = SessionMachine::new(
            &config,
            Cursor::new("x\n"),
            RecordingDisplay::default(),
            player,
            false,
        );

        let result = machine.start(SessionKind::Focus, Some("0"));
        assert!(matches!(result, Err(TempoError::Playback(_))));
    }

    #[test]
    fn test_zero_length_session_never_ticks() {
        let config = zero_config();
        let display = RecordingDisplay::default();
        let ticks = Rc::clone(&display.ticks);

        let mut machine = SessionMachine::new(
            &config,
            Cursor::new("x\n"),
            display,
            quiet_player(),
            true,
        );

        machine.start(SessionKind::Focus, Some("0")).unwrap();
        assert!(ticks.borrow().is_empty());
    }
}
