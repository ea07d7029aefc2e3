//! Check command: parse and validate without rendering.

use std::path::PathBuf;

use clap::Args;

use crate::batch::load_document;
use crate::error::{GridError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::BoundaryPolicy;
use crate::types::Dialect;
use crate::validation::{print_diagnostics, validate_document};

/// Parse and validate definition files without rendering
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Force a dialect instead of detecting it
    #[arg(long, value_enum)]
    pub dialect: Option<Dialect>,

    /// Boundary policy the files will be built with
    #[arg(long, value_enum, default_value_t = BoundaryPolicy::Clip)]
    pub boundary: BoundaryPolicy,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let printer = Printer::new();
    let mut errors = 0;
    let mut warnings = 0;

    for path in &args.files {
        let shown = display_path(path);
        let doc = match load_document(path, args.dialect) {
            Ok(doc) => doc,
            Err(err) => {
                printer.error("Failed", &shown);
                eprintln!("{:?}", miette::Report::new(err.in_file(path)));
                errors += 1;
                continue;
            }
        };

        let result = validate_document(&doc, args.boundary);
        if result.is_ok() {
            printer.status("Checked", &format!("{} ({})", shown, doc.dialect));
        } else {
            printer.warning("Checked", &format!("{} ({})", shown, doc.dialect));
            print_diagnostics(&result, &printer);
        }
        errors += result.error_count();
        warnings += result.warning_count();
    }

    let failing = errors + if args.strict { warnings } else { 0 };
    if failing > 0 {
        return Err(GridError::Build {
            message: format!(
                "Check found {} and {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
            help: args
                .strict
                .then(|| "Warnings count as errors with --strict".to_string()),
        });
    }

    printer.status(
        "Finished",
        &format!(
            "{}, {}",
            plural(args.files.len(), "file", "files"),
            plural(warnings, "warning", "warnings")
        ),
    );
    Ok(())
}
