//! Build command implementation.
//!
//! Composites each input file and writes the requested renderings.

use std::path::PathBuf;

use clap::Args;

use crate::batch::{build_files, BuildOptions};
use crate::error::{GridError, Result};
use crate::manifest::{Manifest, OutputFormat};
use crate::output::{display_path, plural, Printer};
use crate::render::BoundaryPolicy;
use crate::types::Dialect;

/// Parse, composite and render grid definition files
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Input files to process
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output directory
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Force a dialect instead of detecting it
    #[arg(long, value_enum)]
    pub dialect: Option<Dialect>,

    /// Handling of glyph cells outside the grid
    #[arg(long, value_enum)]
    pub boundary: Option<BoundaryPolicy>,

    /// Output format (repeatable)
    #[arg(long, value_enum)]
    pub format: Vec<OutputFormat>,

    /// Scale factor for PNG output (integer upscaling)
    #[arg(long)]
    pub scale: Option<u32>,

    /// Render counts at or above this value as an occupancy mask
    #[arg(long)]
    pub threshold: Option<u32>,

    /// Background colour for empty cells (#RRGGBB)
    #[arg(long)]
    pub background: Option<String>,

    /// Path to glyphgrid.yaml
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl BuildArgs {
    /// Overlay the command-line flags on a manifest.
    pub fn apply_to(&self, manifest: &mut Manifest) {
        if let Some(output) = &self.output {
            manifest.output = output.clone();
        }
        if self.dialect.is_some() {
            manifest.dialect = self.dialect;
        }
        if let Some(boundary) = self.boundary {
            manifest.boundary = boundary;
        }
        if !self.format.is_empty() {
            manifest.formats = self.format.clone();
        }
        if self.scale.is_some() {
            manifest.scale = self.scale;
        }
        if self.threshold.is_some() {
            manifest.threshold = self.threshold;
        }
        if let Some(background) = &self.background {
            manifest.background = Some(background.clone());
        }
    }
}

pub fn run(args: BuildArgs) -> Result<()> {
    let printer = Printer::new();

    let mut manifest = Manifest::discover(args.config.as_deref(), &std::env::current_dir()?)?;
    args.apply_to(&mut manifest);

    let options = BuildOptions::from_manifest(&manifest)?;
    let report = build_files(&args.files, &options)?;

    for built in &report.built {
        printer.status(
            "Composed",
            &format!(
                "{} ({}, {}, {})",
                display_path(&built.input),
                built.document.grid,
                built.document.dialect,
                plural(built.document.placements.len(), "placement", "placements"),
            ),
        );
        for output in &built.outputs {
            printer.info("Wrote", &display_path(output));
        }
    }

    let reporter = miette::GraphicalReportHandler::new();
    for err in &report.failed {
        if let GridError::File { path, .. } = err {
            printer.error("Failed", &display_path(path));
        }
        let mut rendered = String::new();
        if reporter.render_report(&mut rendered, err).is_ok() {
            eprintln!("{rendered}");
        }
    }

    let built = report.into_result()?;
    printer.status(
        "Finished",
        &format!(
            "{} to {}",
            plural(built.len(), "grid", "grids"),
            display_path(&options.output)
        ),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: BuildArgs,
    }

    #[test]
    fn test_flags_override_manifest() {
        let mut manifest = Manifest::parse("output: dist\nscale: 2\nformats: [png]").unwrap();
        let harness = Harness::parse_from([
            "build", "page.txt", "-o", "out", "--format", "csv", "--boundary", "reject",
        ]);

        harness.args.apply_to(&mut manifest);

        assert_eq!(manifest.output, PathBuf::from("out"));
        assert_eq!(manifest.formats, vec![OutputFormat::Csv]);
        assert_eq!(manifest.boundary, BoundaryPolicy::Reject);
        assert_eq!(manifest.effective_scale(), 2);
    }
}
