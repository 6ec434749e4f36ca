//! Check command implementation.

use anyhow::{Context, Result};
use stylecheck_core::{CheckResult, Checker, FileOutcome, Spec};
use stylecheck_rules::builtin_registry;

use super::output;
use crate::OutputFormat;

/// Runs the checking pass over the given files.
///
/// Per-file failures and unresolvable rules are reported on the error
/// stream and never abort the run; the process exits nonzero when any
/// diagnostic was emitted.
pub fn run(files: &[String], selection: &str, format: OutputFormat, color: bool) -> Result<()> {
    anyhow::ensure!(!files.is_empty(), "no input files given");

    let registry = builtin_registry().context("failed to build rule registry")?;
    let resolution = Spec::resolve(selection, &registry)
        .with_context(|| format!("failed to resolve spec '{selection}'"))?;

    for identifier in &resolution.unresolved {
        eprintln!("Rule does not exist: {identifier}");
    }
    anyhow::ensure!(
        !resolution.spec.is_empty(),
        "spec '{selection}' resolved to no rules"
    );

    tracing::debug!(
        "Checking {} file(s) with {} rule(s)",
        files.len(),
        resolution.spec.len()
    );

    let checker = Checker::new(resolution.spec);
    let mut result = CheckResult::new();

    for file in files {
        match checker.check_file(file) {
            FileOutcome::Skipped => {
                eprintln!("Skipping input '{file}': Can't open for reading");
                result.files_skipped.push(file.clone());
            }
            FileOutcome::Checked { diagnostics, .. } => {
                if matches!(format, OutputFormat::Text) {
                    output::print_text(&diagnostics, color);
                }
                result.diagnostics.extend(diagnostics);
                result.files_checked += 1;
            }
        }
    }

    if matches!(format, OutputFormat::Json) {
        output::print_json(&result)?;
    }

    // Exit code convention: nonzero when any diagnostic was emitted.
    if result.has_violations() {
        std::process::exit(1);
    }

    Ok(())
}
