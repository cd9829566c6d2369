use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use tempo::cli::args::{Cli, Commands};
use tempo::cli::commands;
use tempo::config::Config;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Start(args) => {
            let config = Config::load()?;
            commands::start(&config, &args)?;
        }
        Commands::Config(args) => {
            let output = commands::config(args.command)?;
            println!("{output}");
        }
        Commands::Completions { shell } => commands::completions(shell),
    }

    Ok(())
}
