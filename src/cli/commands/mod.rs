//! Command implementations for tempo.

mod config;
mod start;

pub use config::config;
pub use start::start;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;

/// Write shell completions for the given shell to stdout.
pub fn completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
