pub mod build;
pub mod check;
pub mod circle;
pub mod completions;
pub mod convert;

use clap::{Parser, Subcommand};

/// glyphgrid - composite glyph placements onto occupancy grids
#[derive(Parser, Debug)]
#[command(name = "glyphgrid")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse, composite and render grid definition files
    Build(build::BuildArgs),

    /// Parse and validate definition files without rendering
    Check(check::CheckArgs),

    /// Rewrite a definition file in another dialect
    Convert(convert::ConvertArgs),

    /// Generate a document with a rasterized circle glyph
    Circle(circle::CircleArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::OutputFormat;
    use crate::types::Dialect;

    #[test]
    fn test_cli_is_well_formed() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }

    #[test]
    fn test_parse_build_flags() {
        let cli = Cli::parse_from([
            "glyphgrid", "build", "a.txt", "b.txt", "-o", "out", "--dialect", "unit",
            "--format", "csv", "--format", "json", "--log-level", "debug",
        ]);

        assert_eq!(cli.log_level, "debug");
        let Commands::Build(args) = cli.command else {
            panic!("expected build");
        };
        assert_eq!(args.files.len(), 2);
        assert_eq!(args.dialect, Some(Dialect::Unit));
        assert_eq!(args.format, vec![OutputFormat::Csv, OutputFormat::Json]);
    }

    #[test]
    fn test_parse_convert() {
        let cli = Cli::parse_from(["glyphgrid", "convert", "page.txt", "--to", "named", "--name", "dot"]);

        let Commands::Convert(args) = cli.command else {
            panic!("expected convert");
        };
        assert_eq!(args.to, Dialect::Named);
        assert_eq!(args.name, "dot");
    }
}
