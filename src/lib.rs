//! tempo - a focus/break interval timer for the command line
//!
//! This crate runs alternating focus and break sessions with a live
//! terminal countdown and an audible completion chime, prompting for the
//! next session at each boundary.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod session;
pub mod sound;

pub use cli::args::{Cli, Commands};
pub use config::Config;
pub use error::TempoError;
