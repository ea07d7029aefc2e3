//! Convert command: rewrite a document in another dialect.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use log::info;

use crate::batch::load_document;
use crate::error::{GridError, Result};
use crate::parser::write_document;
use crate::types::Dialect;

/// Rewrite a definition file in another dialect
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input file
    pub file: PathBuf,

    /// Target dialect
    #[arg(long, value_enum)]
    pub to: Dialect,

    /// Glyph name used when converting to the named dialect
    #[arg(long, default_value = "glyph")]
    pub name: String,

    /// Force the input dialect instead of detecting it
    #[arg(long, value_enum)]
    pub from: Option<Dialect>,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Convert a file and return the serialized text.
pub fn convert_file(args: &ConvertArgs) -> Result<String> {
    let doc = load_document(&args.file, args.from).map_err(|e| e.in_file(&args.file))?;
    info!(from = doc.dialect.name(), to = args.to.name(); "Converting document");

    let converted = doc.convert(args.to, &args.name)?;
    write_document(&converted)
}

pub fn run(args: ConvertArgs) -> Result<()> {
    let text = convert_file(&args)?;

    match &args.output {
        Some(path) => fs::write(path, text).map_err(|e| GridError::Io {
            path: path.clone(),
            message: format!("Failed to write converted document: {}", e),
        }),
        None => {
            print!("{}", text);
            Ok(())
        }
    }
}
