//! File scanning: reading input into checkable lines.

use std::io::{self, Read};

/// Path sentinel selecting standard input, following the UNIX convention.
pub const STDIN_PATH: &str = "-";

/// The lines of one input file, ready for checking.
#[derive(Debug)]
pub struct ScannedFile {
    /// Lines in file order, line endings stripped.
    pub lines: Vec<String>,
    /// Whether any line ended in `\r\n`. Informational only; CRLF endings
    /// do not change what the rules see.
    pub crlf_found: bool,
}

impl ScannedFile {
    /// Iterates over `(line_number, text)` pairs, line numbers 1-based.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| (i + 1, line.as_str()))
    }
}

/// Reads a file (or stdin when the path is `-`) into lines.
///
/// Invalid byte sequences are replaced with U+FFFD rather than failing
/// the read. Content is split on `\n`; a trailing `\r` on a line is
/// stripped and recorded in [`ScannedFile::crlf_found`].
///
/// # Errors
///
/// Returns an error if the path cannot be opened or read. Callers treat
/// this as a per-file skip, not a fatal failure.
pub fn read_lines(path: &str) -> io::Result<ScannedFile> {
    let bytes = if path == STDIN_PATH {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf)?;
        buf
    } else {
        std::fs::read(path)?
    };
    let content = String::from_utf8_lossy(&bytes);

    let mut crlf_found = false;
    let lines = content
        .split('\n')
        .map(|line| match line.strip_suffix('\r') {
            Some(stripped) => {
                crlf_found = true;
                stripped.to_string()
            }
            None => line.to_string(),
        })
        .collect();

    Ok(ScannedFile { lines, crlf_found })
}
