//! Spec resolution: turning a user-supplied selection into a rule set.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};

use crate::registry::Registry;
use crate::rule::RuleBox;

/// Errors raised while resolving a spec.
///
/// Unresolvable identifiers are not errors (they are dropped and reported
/// through [`Resolution::unresolved`]); only spec-file I/O aborts
/// resolution.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    /// A spec file could not be read.
    #[error("failed to read spec file {path}: {source}")]
    Io {
        /// Path of the spec file.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// A resolved, deduplicated rule set for one checking run.
///
/// Rules are held together with the identifier that selected them and are
/// ordered alphabetically by identifier, so a given selection always
/// resolves to the same sequence and diagnostics come out in a
/// reproducible order.
#[derive(Default)]
pub struct Spec {
    rules: Vec<(String, RuleBox)>,
}

/// Outcome of resolving a selection against a registry.
pub struct Resolution {
    /// The resolved rule set.
    pub spec: Spec,
    /// Identifiers that matched no registered rule, in the order they
    /// were attempted. The caller decides how to report them; resolution
    /// itself never fails on them.
    pub unresolved: Vec<String>,
}

impl Spec {
    /// Resolves a selection into a rule set.
    ///
    /// The selection is either a comma-separated list of rule identifiers
    /// or, when it contains no comma and names an existing file, a path to
    /// a spec file to expand recursively.
    ///
    /// # Errors
    ///
    /// Returns an error if a spec file cannot be read. Identifiers that do
    /// not resolve are dropped into [`Resolution::unresolved`] instead.
    pub fn resolve(selection: &str, registry: &Registry) -> Result<Resolution, SpecError> {
        let parts: Vec<&str> = selection.split(',').collect();

        // Both branches land in a BTreeSet: deduplicated by identifier and
        // resolved in alphabetical order, so the same selection always
        // yields the same rule sequence.
        let entries: BTreeSet<String> = if parts.len() == 1 && Path::new(parts[0]).is_file() {
            aggregate_entries(Path::new(parts[0]))?
        } else {
            parts
                .into_iter()
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(String::from)
                .collect()
        };

        let mut spec = Spec::default();
        let mut unresolved = Vec::new();
        for identifier in entries {
            match registry.lookup(&identifier) {
                Some(rule) => spec.rules.push((identifier, rule)),
                None => {
                    tracing::debug!("Dropping unresolvable rule {identifier}");
                    unresolved.push(identifier);
                }
            }
        }

        Ok(Resolution { spec, unresolved })
    }

    /// Iterates over the resolved rules with their identifiers, in
    /// resolution order.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &dyn crate::Rule)> {
        self.rules
            .iter()
            .map(|(id, rule)| (id.as_str(), rule.as_ref()))
    }

    /// Returns the resolved identifiers in resolution order.
    #[must_use]
    pub fn identifiers(&self) -> Vec<&str> {
        self.rules.iter().map(|(id, _)| id.as_str()).collect()
    }

    /// Returns the number of resolved rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the spec resolved to no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Recursively aggregates rule identifiers from a spec file.
///
/// A spec file is plain text: lines whose first character is `#` are
/// comments and whitespace-only lines are ignored. Every other line is
/// either a rule identifier or a path, relative to the containing spec
/// file's directory, to another spec file to expand. Only leaf
/// identifiers end up in the result.
///
/// Each file is expanded at most once per resolution, so spec files that
/// reference each other cyclically (or themselves) still terminate.
///
/// # Errors
///
/// Returns an error if a referenced spec file cannot be read.
pub(crate) fn aggregate_entries(path: &Path) -> Result<BTreeSet<String>, SpecError> {
    let mut visited = HashSet::new();
    let mut entries = BTreeSet::new();
    aggregate_into(path, &mut visited, &mut entries)?;
    Ok(entries)
}

fn aggregate_into(
    path: &Path,
    visited: &mut HashSet<PathBuf>,
    entries: &mut BTreeSet<String>,
) -> Result<(), SpecError> {
    // Canonicalize so the same file reached through different relative
    // paths is still expanded only once.
    let canonical = path.canonicalize().map_err(|source| SpecError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if !visited.insert(canonical) {
        return Ok(());
    }

    let content = std::fs::read_to_string(path).map_err(|source| SpecError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dir = path.parent().unwrap_or(Path::new("."));

    for line in content.lines() {
        if line.starts_with('#') {
            continue;
        }
        let entry = line.trim();
        if entry.is_empty() {
            continue;
        }

        let referenced = dir.join(entry);
        if referenced.is_file() {
            aggregate_into(&referenced, visited, entries)?;
        } else {
            entries.insert(entry.to_string());
        }
    }

    Ok(())
}
