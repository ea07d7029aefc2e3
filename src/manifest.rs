//! Project manifest (glyphgrid.yaml) parsing.
//!
//! The manifest holds defaults for the build command. Every field is
//! optional and command-line flags override it.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::render::BoundaryPolicy;
use crate::types::{Colour, DensityRamp, Dialect};

/// Default manifest file name looked up in the working directory.
pub const MANIFEST_FILENAME: &str = "glyphgrid.yaml";

/// An output format produced by the build command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

/// Project manifest loaded from glyphgrid.yaml.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    /// Output directory for rendered grids.
    pub output: PathBuf,

    /// Force a dialect instead of detecting it per file.
    pub dialect: Option<Dialect>,

    /// Handling of glyph cells outside the grid.
    pub boundary: BoundaryPolicy,

    /// Formats to write for each input.
    pub formats: Vec<OutputFormat>,

    /// Integer PNG upscale factor.
    pub scale: Option<u32>,

    /// Render counts at or above this value as an occupancy mask.
    pub threshold: Option<u32>,

    /// Colour of empty cells, as hex.
    pub background: Option<String>,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: default_output(),
            dialect: None,
            boundary: BoundaryPolicy::default(),
            formats: vec![OutputFormat::Png],
            scale: None,
            threshold: None,
            background: None,
        }
    }
}

impl Manifest {
    /// Load manifest from a glyphgrid.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| GridError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load an explicit manifest, or glyphgrid.yaml from `dir` if present,
    /// or fall back to defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let implicit = dir.join(MANIFEST_FILENAME);
        if implicit.is_file() {
            log::info!(path:? = implicit; "Loading manifest");
            return Self::load(&implicit);
        }

        Ok(Self::default())
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let manifest: Manifest = serde_yaml::from_str(content).map_err(|e| GridError::Config {
            message: format!("Invalid manifest: {}", e),
            help: Some(format!("Check {} syntax", MANIFEST_FILENAME)),
        })?;
        manifest.background_colour()?;
        Ok(manifest)
    }

    /// Get the effective scale factor.
    pub fn effective_scale(&self) -> u32 {
        self.scale.unwrap_or(1).max(1)
    }

    pub fn background_colour(&self) -> Result<Colour> {
        match &self.background {
            Some(hex) => Colour::from_hex(hex),
            None => Ok(Colour::BLACK),
        }
    }

    /// Ramp used by the PNG renderer.
    pub fn ramp(&self) -> Result<DensityRamp> {
        Ok(DensityRamp::new(self.background_colour()?, self.threshold))
    }
}
