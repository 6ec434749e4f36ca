//! Core types for reported violations and run results.

use serde::Serialize;

/// One reported rule violation, bound to a file and 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Name of the checked file (as given on the command line, or `-`).
    pub filename: String,
    /// Line number, 1-based.
    pub line: usize,
    /// The violated rule's description.
    pub message: String,
    /// The violated rule's category; may be empty.
    pub category: String,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    #[must_use]
    pub fn new(
        filename: impl Into<String>,
        line: usize,
        message: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            line,
            message: message.into(),
            category: category.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    /// Stable diagnostic line format:
    /// `<filename>:<linenum>:  <message>  [<category>]`, with the
    /// bracketed suffix omitted when the category is empty.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:  {}", self.filename, self.line, self.message)?;
        if !self.category.is_empty() {
            write!(f, "  [{}]", self.category)?;
        }
        Ok(())
    }
}

/// Aggregate result of one checking run.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    /// All diagnostics, in emission order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of files fully checked.
    pub files_checked: usize,
    /// Files skipped because they could not be opened for reading.
    pub files_skipped: Vec<String>,
}

impl CheckResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any diagnostic was emitted.
    #[must_use]
    pub fn has_violations(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
