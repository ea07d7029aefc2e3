use std::str::FromStr;

use clap::Parser;
use glyphgrid::cli::{Cli, Commands};
use log::{debug, LevelFilter};
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = LevelFilter::from_str(&cli.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", cli.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();
    debug!(command:? = cli.command; "Parsed arguments");

    match cli.command {
        Commands::Build(args) => glyphgrid::cli::build::run(args)?,
        Commands::Check(args) => glyphgrid::cli::check::run(args)?,
        Commands::Convert(args) => glyphgrid::cli::convert::run(args)?,
        Commands::Circle(args) => glyphgrid::cli::circle::run(args)?,
        Commands::Completions(args) => glyphgrid::cli::completions::run(args)?,
    }

    Ok(())
}
