//! `glyphgrid completions`: print or save a shell completion script.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::{Args, CommandFactory};
use clap_complete::Shell;

use crate::error::{GridError, Result};

use super::Cli;

/// Generate shell completions
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();

    match &args.out {
        Some(path) => {
            let mut file = File::create(path).map_err(|e| GridError::Io {
                path: path.clone(),
                message: format!("Failed to create completion script: {}", e),
            })?;
            clap_complete::generate(args.shell, &mut cmd, "glyphgrid", &mut file);
        }
        None => clap_complete::generate(args.shell, &mut cmd, "glyphgrid", &mut io::stdout()),
    }

    Ok(())
}
