//! Config command implementation.
//!
//! Inspects and changes settings through the schema in `config::schema`,
//! so every settable name shares one validation path.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::{Config, Paths, Setting};
use crate::error::TempoError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// # Errors
///
/// Returns an error for unknown setting names, invalid values, or config
/// file I/O failures.
pub fn config(cmd: ConfigCommands) -> Result<String, TempoError> {
    match cmd {
        ConfigCommands::Set { setting, value } => set(&setting, &value),
        ConfigCommands::Show { output } => show(output),
    }
}

/// Validate and persist a single setting.
fn set(name: &str, value: &str) -> Result<String, TempoError> {
    let setting = Setting::parse(name)?;

    let mut config = Config::load()?;
    setting.apply(&mut config, value)?;
    config.save()?;

    Ok(format!("Updated {} to {}", setting.name().bold(), value))
}

/// List every setting with its current value.
fn show(format: OutputFormat) -> Result<String, TempoError> {
    let config = Config::load()?;

    match format {
        OutputFormat::Json => to_json(&config),
        OutputFormat::Pretty => {
            let paths = Paths::new()?;
            let mut output = Vec::new();

            output.push(
                format!("Settings from {}", paths.config_file.display())
                    .dimmed()
                    .to_string(),
            );

            for setting in Setting::ALL {
                let current = setting.current(&config);
                let default = setting.default_value();

                if current == default {
                    output.push(format!("  {:<17} {current}", setting.name()));
                } else {
                    output.push(format!(
                        "  {:<17} {current} {}",
                        setting.name(),
                        format!("(default: {default})").dimmed()
                    ));
                }
            }

            Ok(output.join("\n"))
        }
    }
}
