use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for glyphgrid operations
#[derive(Error, Diagnostic, Debug)]
pub enum GridError {
    #[error("IO error: {0}")]
    #[diagnostic(code(glyphgrid::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {}: {message}", path.display())]
    #[diagnostic(code(glyphgrid::io))]
    Io { path: PathBuf, message: String },

    /// A literal line, numeric field or line count did not match the grammar.
    #[error("Format error on line {line}: expected `{expected}`, found `{found}`")]
    #[diagnostic(code(glyphgrid::format))]
    Format {
        line: usize,
        expected: String,
        found: String,
        #[help]
        help: Option<String>,
    },

    /// A placement names a glyph the document never defined.
    #[error("Placement {index} references unknown glyph '{name}'")]
    #[diagnostic(
        code(glyphgrid::reference),
        help("Define the glyph in the glyph section or fix the placement name")
    )]
    Reference { index: usize, name: String },

    /// A stamped rectangle leaves the grid under the `reject` boundary policy.
    #[error(
        "Placement {index} at ({x}, {y}) with a {width}x{height} glyph exceeds the {grid_width}x{grid_height} grid"
    )]
    #[diagnostic(
        code(glyphgrid::bounds),
        help("Use the `clip` boundary policy to drop out-of-range cells instead")
    )]
    Bounds {
        index: usize,
        x: i64,
        y: i64,
        width: usize,
        height: usize,
        grid_width: usize,
        grid_height: usize,
    },

    #[error("Conversion error: {message}")]
    #[diagnostic(code(glyphgrid::convert))]
    Convert {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(glyphgrid::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(glyphgrid::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Any of the above, tagged with the input file it came from.
    #[error("Failed to process {}", path.display())]
    #[diagnostic(code(glyphgrid::file))]
    File {
        path: PathBuf,
        #[source]
        source: Box<GridError>,
    },
}

impl GridError {
    /// Build a format error for a line that did not match what the grammar expected.
    pub fn format(line: usize, expected: impl Into<String>, found: impl Into<String>) -> Self {
        GridError::Format {
            line,
            expected: expected.into(),
            found: found.into(),
            help: None,
        }
    }

    /// Attach help text to a format error; other variants are returned unchanged.
    pub fn with_help(self, text: impl Into<String>) -> Self {
        match self {
            GridError::Format {
                line,
                expected,
                found,
                ..
            } => GridError::Format {
                line,
                expected,
                found,
                help: Some(text.into()),
            },
            other => other,
        }
    }

    /// Wrap the error with the identity of the file being processed.
    pub fn in_file(self, path: impl Into<PathBuf>) -> Self {
        GridError::File {
            path: path.into(),
            source: Box::new(self),
        }
    }

    /// Line number for format errors, used to rank failed dialect attempts.
    pub fn line(&self) -> Option<usize> {
        match self {
            GridError::Format { line, .. } => Some(*line),
            GridError::File { source, .. } => source.line(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, GridError>;
