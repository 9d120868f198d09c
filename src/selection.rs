/*!
 * Non-interactive file selection over the enumerated candidates
 */

use std::path::{Path, PathBuf};

use glob_match::glob_match;

use crate::config::Config;
use crate::filter;

/// Outcome of choosing files from the candidates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The chosen files, in candidate order
    Files(Vec<PathBuf>),
    /// Nothing chosen; there is nothing to do
    Empty,
}

impl Selection {
    fn from_files(files: Vec<PathBuf>) -> Self {
        if files.is_empty() {
            Self::Empty
        } else {
            Self::Files(files)
        }
    }
}

/// How to pick from the candidates
#[derive(Debug, Clone, Default)]
pub struct Criteria {
    /// Take every candidate
    pub select_all: bool,
    /// Take the candidates matching any of these globs
    pub include_patterns: Vec<String>,
}

impl Criteria {
    pub fn from_config(config: &Config) -> Self {
        Self {
            select_all: config.select_all,
            include_patterns: config.include_patterns.clone(),
        }
    }
}

/// Choose files from `candidates`.
///
/// `--all` wins over include patterns; include patterns win over the
/// preselection. Include patterns are matched against the path relative to
/// `root` and against the file name.
pub fn select(
    candidates: &[PathBuf],
    preselected: &[PathBuf],
    root: &Path,
    criteria: &Criteria,
) -> Selection {
    if criteria.select_all {
        return Selection::from_files(candidates.to_vec());
    }

    if criteria.include_patterns.is_empty() {
        return Selection::from_files(preselected.to_vec());
    }

    let files = candidates
        .iter()
        .filter(|path| matches_any(path, root, &criteria.include_patterns))
        .cloned()
        .collect();
    Selection::from_files(files)
}

/// Select with the default preselection derived from the candidates.
///
/// Eligibility is decided on the path relative to `root`, the same form the
/// formatter filters, so directories above the workspace never count.
pub fn select_with_defaults(candidates: &[PathBuf], root: &Path, criteria: &Criteria) -> Selection {
    let relative: Vec<&Path> = candidates
        .iter()
        .map(|path| path.strip_prefix(root).unwrap_or(path.as_path()))
        .collect();
    let preselected: Vec<PathBuf> = filter::select_default(&relative)
        .into_iter()
        .map(|rel| root.join(rel))
        .collect();
    select(candidates, &preselected, root, criteria)
}

fn matches_any(path: &Path, root: &Path, patterns: &[String]) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
    patterns
        .iter()
        .any(|pattern| glob_match(pattern, &relative) || glob_match(pattern, &file_name))
}
