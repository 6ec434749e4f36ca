//! List command implementation.

use anyhow::{Context, Result};
use stylecheck_rules::builtin_registry;

/// Prints registered rule identifiers to stdout, one per line.
///
/// `langs` is a comma-separated list of language namespaces; an empty
/// string lists every registered rule. Unknown languages simply produce
/// no output, matching the spec-resolution policy of never failing on a
/// name that matches nothing.
pub fn run(langs: &str) -> Result<()> {
    let registry = builtin_registry().context("failed to build rule registry")?;

    if langs.is_empty() {
        for identifier in registry.identifiers() {
            println!("{identifier}");
        }
        return Ok(());
    }

    for lang in langs.split(',').map(str::trim).filter(|l| !l.is_empty()) {
        for identifier in registry.list(lang) {
            println!("{identifier}");
        }
    }

    Ok(())
}
