//! Configuration management for tempo.
//!
//! This module handles loading and saving settings from `~/.tempo/` and
//! defines the schema the `config` command resolves setting names through.

mod paths;
mod schema;
mod settings;

pub use paths::Paths;
pub use schema::Setting;
pub use settings::{Config, SoundType};
