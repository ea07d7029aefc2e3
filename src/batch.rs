//! Per-file build pipeline.
//!
//! Each input is read, parsed, composited and rendered on its own. A file
//! that fails does not stop the others; the failures are collected in the
//! [`BuildReport`] with the path attached.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::{GridError, Result};
use crate::manifest::{Manifest, OutputFormat};
use crate::parser::read_document;
use crate::render::{
    write_csv, write_png, write_summary_json, BoundaryPolicy, Compositor, GridSummary, OutputGrid,
};
use crate::types::{DensityRamp, Dialect, ParsedDocument};

/// Settings for one build run, resolved from the manifest and CLI flags.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub output: PathBuf,
    pub dialect: Option<Dialect>,
    pub boundary: BoundaryPolicy,
    pub formats: Vec<OutputFormat>,
    pub scale: u32,
    pub ramp: DensityRamp,
}

impl BuildOptions {
    pub fn from_manifest(manifest: &Manifest) -> Result<Self> {
        Ok(Self {
            output: manifest.output.clone(),
            dialect: manifest.dialect,
            boundary: manifest.boundary,
            formats: manifest.formats.clone(),
            scale: manifest.effective_scale(),
            ramp: manifest.ramp()?,
        })
    }
}

/// A successfully built input.
#[derive(Debug)]
pub struct BuiltFile {
    pub input: PathBuf,
    pub document: ParsedDocument,
    pub grid: OutputGrid,
    /// Files written, in format order.
    pub outputs: Vec<PathBuf>,
}

/// Outcome of a batch build.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub built: Vec<BuiltFile>,
    /// Errors are wrapped with [`GridError::File`].
    pub failed: Vec<GridError>,
}

impl BuildReport {
    /// Collapse the report into an error if any file failed.
    pub fn into_result(self) -> Result<Vec<BuiltFile>> {
        if self.failed.is_empty() {
            return Ok(self.built);
        }

        Err(GridError::Build {
            message: format!(
                "{} of {} file(s) failed",
                self.failed.len(),
                self.failed.len() + self.built.len()
            ),
            help: Some("See the errors above for each failing file".to_string()),
        })
    }
}

/// Read and parse one file.
pub fn load_document(path: &Path, dialect: Option<Dialect>) -> Result<ParsedDocument> {
    let file = fs::File::open(path).map_err(|e| GridError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to open file: {}", e),
    })?;
    read_document(file, dialect)
}

/// Build one file into `options.output`.
pub fn build_file(path: &Path, options: &BuildOptions) -> Result<BuiltFile> {
    let document = load_document(path, options.dialect)?;
    info!(
        path:? = path,
        dialect = document.dialect.name(),
        glyphs = document.glyphs.len(),
        placements = document.placements.len();
        "Parsed document"
    );

    let grid = Compositor::new()
        .with_boundary(options.boundary)
        .compose(&document)?;

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("grid")
        .to_string();

    let mut outputs = Vec::with_capacity(options.formats.len());
    for format in &options.formats {
        let target = options.output.join(format!("{}.{}", stem, format.extension()));
        match format {
            OutputFormat::Png => write_png(&grid, &target, options.scale, &options.ramp)?,
            OutputFormat::Csv => write_csv(&grid, &target)?,
            OutputFormat::Json => {
                write_summary_json(&GridSummary::new(&stem, &document, &grid), &target)?
            }
        }
        info!(path:? = target; "Wrote output");
        outputs.push(target);
    }

    Ok(BuiltFile {
        input: path.to_path_buf(),
        document,
        grid,
        outputs,
    })
}

/// Build every file, continuing past failures.
///
/// Only a failure to create the output directory aborts the batch.
pub fn build_files(paths: &[PathBuf], options: &BuildOptions) -> Result<BuildReport> {
    fs::create_dir_all(&options.output).map_err(|e| GridError::Io {
        path: options.output.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let mut report = BuildReport::default();
    for path in paths {
        match build_file(path, options) {
            Ok(built) => report.built.push(built),
            Err(err) => {
                warn!(path:? = path, error:% = err; "Build failed");
                report.failed.push(err.in_file(path));
            }
        }
    }

    Ok(report)
}
