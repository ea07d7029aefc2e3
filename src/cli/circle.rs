//! Circle command: generate a named-dialect document around a circle glyph.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use log::info;

use crate::error::{GridError, Result};
use crate::parser::write_document;
use crate::types::{Dialect, Glyph, GridSpec, ParsedDocument, Placement};

/// Generate a document with a rasterized circle glyph
#[derive(Args, Debug)]
pub struct CircleArgs {
    /// Circle radius in grid units
    #[arg(long, default_value_t = 0.02)]
    pub radius: f64,

    /// Grid width in cells
    #[arg(long, default_value_t = 500)]
    pub width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = 500)]
    pub height: usize,

    /// Glyph name
    #[arg(long, default_value = "circle")]
    pub name: String,

    /// Place the circle at a normalized origin (repeatable), e.g. `--at 0.4,0.5`
    #[arg(long, value_parser = parse_origin)]
    pub at: Vec<(f64, f64)>,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

fn parse_origin(s: &str) -> std::result::Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but found `{}`", s))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("`{}` is not a finite number", v.trim()))
    };
    Ok((coord(x)?, coord(y)?))
}

/// Build the document described by the arguments.
pub fn circle_document(args: &CircleArgs) -> Result<ParsedDocument> {
    let grid = GridSpec::new(args.width, args.height);
    if args.width == 0 || args.height == 0 || !grid.within_limit() {
        return Err(GridError::Config {
            message: format!("Invalid grid size {}", grid),
            help: Some(format!("Use positive dimensions up to {} cells", GridSpec::MAX_CELLS)),
        });
    }
    if args.name.trim().is_empty() {
        return Err(GridError::Config {
            message: "Glyph name must not be empty".to_string(),
            help: None,
        });
    }

    let glyph = Glyph::circle(args.name.trim(), args.radius, grid)?;
    info!(radius = args.radius, size:? = glyph.size(), cells = glyph.coverage(); "Rasterized circle");

    let mut doc = ParsedDocument::new(Dialect::Named, grid);
    doc.add_glyph(glyph);
    for &(x, y) in &args.at {
        doc.add_placement(Placement::named(args.name.trim(), x, y));
    }
    Ok(doc)
}

pub fn run(args: CircleArgs) -> Result<()> {
    let text = write_document(&circle_document(&args)?)?;

    match &args.output {
        Some(path) => fs::write(path, text).map_err(|e| GridError::Io {
            path: path.clone(),
            message: format!("Failed to write document: {}", e),
        }),
        None => {
            print!("{}", text);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;
    use crate::render::Compositor;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: CircleArgs,
    }

    #[test]
    fn test_generated_document_round_trips() {
        let harness = Harness::parse_from([
            "circle", "--radius", "0.25", "--width", "20", "--height", "20", "--at", "0.5,0.5",
            "--at", "0,0",
        ]);

        let text = write_document(&circle_document(&harness.args).unwrap()).unwrap();
        let doc = parse_document(&text).unwrap();

        assert_eq!(doc.dialect, Dialect::Named);
        assert_eq!(doc.placements.len(), 2);
        let grid = Compositor::new().compose(&doc).unwrap();
        assert_eq!(grid.get(15, 15), Some(1));
        assert_eq!(grid.max(), 1);
    }

    #[test]
    fn test_parse_origin() {
        assert_eq!(parse_origin("0.25, 0.5"), Ok((0.25, 0.5)));
        assert!(parse_origin("0.25").is_err());
        assert!(parse_origin("inf,0").is_err());
    }

    #[test]
    fn test_rejects_empty_grid() {
        let harness = Harness::parse_from(["circle", "--width", "0"]);
        assert!(matches!(
            circle_document(&harness.args),
            Err(GridError::Config { .. })
        ));
    }
}
