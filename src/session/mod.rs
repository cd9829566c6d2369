//! The session lifecycle engine.
//!
//! One session at a time: resolve the duration, run the countdown, play
//! the completion chime, then read one line of input to decide the next
//! transition.

pub mod countdown;
pub mod machine;

pub use machine::{SessionKind, SessionMachine, SessionState, UserChoice};
