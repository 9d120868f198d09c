/*!
 * Core types and data structures for the repotext application
 */

use std::path::PathBuf;

/// A file whose content made it into the output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludedFile {
    /// Path relative to the workspace root
    pub path: PathBuf,
    /// Number of lines in the content
    pub lines: usize,
    /// Number of characters in the content
    pub chars: usize,
}

/// A file that passed the filter but could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    /// Path relative to the workspace root
    pub path: PathBuf,
    /// Why the read failed
    pub reason: String,
}

/// The assembled document plus what went into it
#[derive(Debug, Clone, Default)]
pub struct FormattedOutput {
    /// Tree header followed by one block per included file
    pub text: String,
    /// Files written to the output, in output order
    pub included: Vec<IncludedFile>,
    /// Files dropped by the default filter before reading
    pub excluded: Vec<PathBuf>,
    /// Files dropped because reading failed
    pub skipped: Vec<SkippedFile>,
    /// Number of directories shown in the tree header
    pub directories: usize,
}

impl FormattedOutput {
    /// Total lines across included files
    pub fn total_lines(&self) -> usize {
        self.included.iter().map(|f| f.lines).sum()
    }

    /// Total characters across included files
    pub fn total_chars(&self) -> usize {
        self.included.iter().map(|f| f.chars).sum()
    }
}
