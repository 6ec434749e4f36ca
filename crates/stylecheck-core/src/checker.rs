//! Line checker: drives a resolved spec across input lines.

use tracing::{debug, warn};

use crate::scanner::read_lines;
use crate::spec::Spec;
use crate::types::Diagnostic;

/// Outcome of checking one input file.
#[derive(Debug)]
pub enum FileOutcome {
    /// The file was read and every line checked.
    Checked {
        /// Diagnostics in emission order: by line, then by the spec's
        /// rule order within a line.
        diagnostics: Vec<Diagnostic>,
        /// Whether CRLF line endings were observed (informational).
        crlf_found: bool,
    },
    /// The file could not be opened for reading and contributed no
    /// diagnostics. Never aborts the run.
    Skipped,
}

/// Applies a resolved [`Spec`] to lines and files.
///
/// The spec is read-only after construction; a checker is safe to reuse
/// across any number of files.
pub struct Checker {
    spec: Spec,
}

impl Checker {
    /// Creates a checker over a resolved spec.
    #[must_use]
    pub fn new(spec: Spec) -> Self {
        Self { spec }
    }

    /// Returns the spec this checker runs.
    #[must_use]
    pub fn spec(&self) -> &Spec {
        &self.spec
    }

    /// Checks a single line against every rule in the spec.
    ///
    /// Every rule is evaluated regardless of earlier failures; a line may
    /// produce multiple diagnostics, one per failing rule, in the spec's
    /// deterministic order.
    #[must_use]
    pub fn check_line(&self, filename: &str, linenum: usize, line: &str) -> Vec<Diagnostic> {
        self.spec
            .rules()
            .filter(|(_, rule)| !rule.check(line))
            .map(|(_, rule)| {
                Diagnostic::new(filename, linenum, rule.description(), rule.category())
            })
            .collect()
    }

    /// Reads and checks one file (or stdin when the path is `-`).
    ///
    /// An unreadable file yields [`FileOutcome::Skipped`]; the caller is
    /// expected to report the skip and continue with remaining files.
    pub fn check_file(&self, path: &str) -> FileOutcome {
        debug!("Checking {path} with {} rules", self.spec.len());

        let scanned = match read_lines(path) {
            Ok(scanned) => scanned,
            Err(e) => {
                warn!("Cannot open {path} for reading: {e}");
                return FileOutcome::Skipped;
            }
        };
        if scanned.crlf_found {
            debug!("CRLF line endings found in {path}");
        }

        let mut diagnostics = Vec::new();
        for (linenum, line) in scanned.iter() {
            diagnostics.extend(self.check_line(path, linenum, line));
        }

        FileOutcome::Checked {
            diagnostics,
            crlf_found: scanned.crlf_found,
        }
    }
}
