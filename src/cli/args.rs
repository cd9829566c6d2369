use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "tempo")]
#[command(about = "A focus/break interval timer for the command line")]
#[command(long_about = "tempo - a focus/break interval timer

Runs alternating focus and break sessions with a live countdown and an
audible chime when time is up. At the end of each session you choose what
happens next: start the break, start another focus session, or exit.

QUICK START:
  tempo start               Focus for the configured default (25 minutes)
  tempo start 45            Focus for 45 minutes
  tempo start until 1730    Focus until 5:30pm
  tempo config set break 10 Make breaks 10 minutes long

Settings live in ~/.tempo/config.yaml and can be changed with
'tempo config set'. Run 'tempo config show' to see them all.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a focus session
    ///
    /// Counts down from the given duration (or the configured default),
    /// plays a chime, then prompts for the next session. The duration is
    /// either a whole number of minutes or a target wall-clock time.
    ///
    /// # Examples
    ///
    ///   tempo start               Use the configured default
    ///   tempo start 25            25 minutes
    ///   tempo start 0             Degenerate session: chime immediately
    ///   tempo start until 0900    Until 9:00am (tomorrow if already past)
    #[command(alias = "s")]
    Start(StartArgs),

    /// Inspect or change settings
    ///
    /// Settings are stored in ~/.tempo/config.yaml. Recognized names:
    /// session, break, focus-sound, break-sound, focus-sound-type,
    /// break-sound-type.
    ///
    /// # Examples
    ///
    ///   tempo config show
    ///   tempo config set session 30
    ///   tempo config set focus-sound sounds/gong.mp3
    ///   tempo config set focus-sound-type custom
    Config(ConfigArgs),

    /// Generate shell completions
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the start command.
#[derive(Args)]
pub struct StartArgs {
    /// Session length: whole minutes ("25") or a clock time ("until 1730").
    /// Omitted, the configured default applies.
    #[arg(num_args = 0..=2)]
    pub duration: Vec<String>,

    /// Skip the completion chime
    #[arg(long)]
    pub silent: bool,
}

impl StartArgs {
    /// The raw duration input, if one was given.
    ///
    /// The `until HHMM` form arrives as two shell words, so the positional
    /// arguments are rejoined here before parsing.
    #[must_use]
    pub fn raw_duration(&self) -> Option<String> {
        if self.duration.is_empty() {
            None
        } else {
            Some(self.duration.join(" "))
        }
    }
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Change a setting and write it to the config file
    Set {
        /// Setting name (e.g. session, break, focus-sound-type)
        setting: String,
        /// New value
        value: String,
    },
    /// Show all settings and their current values
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value = "pretty")]
        output: OutputFormat,
    },
}

/// Output format for config show.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}
