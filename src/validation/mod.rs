//! Validation system for parsed documents.
//!
//! Runs a suite of checks against a document and reports errors and
//! warnings. Used by `glyphgrid check`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::output::Printer;
use crate::render::BoundaryPolicy;
use crate::types::ParsedDocument;

/// Run all validation checks against a document.
pub fn validate_document(doc: &ParsedDocument, boundary: BoundaryPolicy) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_unknown_glyphs(doc));
    result.merge(checks::check_unused_glyphs(doc));
    result.merge(checks::check_empty_glyphs(doc));
    result.merge(checks::check_bounds(doc, boundary));
    result.merge(checks::check_origin_range(doc));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        eprintln!("  {}[{}]: {}", label, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    {}", printer.dim(&format!("help: {}", help)));
        }
    }
}
