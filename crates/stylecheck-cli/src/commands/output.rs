//! Shared output formatting for check results.

use anyhow::Result;
use stylecheck_core::{CheckResult, Diagnostic};

const COLOR_RED: &str = "\x1b[31m";
const COLOR_RESET: &str = "\x1b[0m";

/// Prints diagnostics to the error stream in the stable text format,
/// each line wrapped in red when `color` is set.
pub fn print_text(diagnostics: &[Diagnostic], color: bool) {
    for diagnostic in diagnostics {
        eprintln!("{}", format_diagnostic(diagnostic, color));
    }
}

/// Prints the whole run as pretty JSON on standard output.
pub fn print_json(result: &CheckResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn format_diagnostic(diagnostic: &Diagnostic, color: bool) -> String {
    if color {
        format!("{COLOR_RED}{diagnostic}{COLOR_RESET}")
    } else {
        diagnostic.to_string()
    }
}
