/*!
 * Workspace enumeration: lists candidate files under the workspace root
 */

use std::path::{Path, PathBuf};
use std::sync::Arc;

use glob_match::glob_match;
use ignore::WalkBuilder;
use tracing::debug;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{RepoTextError, Result};
use crate::utils::DEFAULT_EXCLUDE;

/// Scanner for workspace files
pub struct Scanner {
    /// Workspace root
    root: PathBuf,
    /// Shared exclusion rules, also handed to the walker's entry filter
    rules: Arc<ExcludeRules>,
    /// Whether to respect .gitignore files
    respect_gitignore: bool,
}

/// Names and patterns pruned from enumeration
#[derive(Debug, Clone, Default)]
struct ExcludeRules {
    root: PathBuf,
    patterns: Vec<String>,
    output_file: Option<PathBuf>,
}

impl ExcludeRules {
    fn excludes(&self, path: &Path) -> bool {
        let file_name = path.file_name().unwrap_or_default().to_string_lossy();

        // Check default exclusions (dependency and VCS directories)
        if DEFAULT_EXCLUDE.iter().any(|&name| name == file_name) {
            return true;
        }

        // Check custom patterns against the name and the relative path
        let relative = path.strip_prefix(&self.root).unwrap_or(path).to_string_lossy();
        for pattern in &self.patterns {
            if glob_match(pattern, &file_name) || glob_match(pattern, &relative) {
                return true;
            }
        }

        // Don't offer the output file itself
        if let Some(output) = &self.output_file {
            if path == output {
                return true;
            }
        }

        false
    }
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: &Config) -> Result<Self> {
        let root = config
            .workspace_root
            .canonicalize()
            .map_err(|_| RepoTextError::NoWorkspace)?;

        // The output file may not exist yet; resolve it through its parent.
        let output_file = config.output_file.as_ref().and_then(|out| {
            let parent = match out.parent() {
                Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
                _ => PathBuf::from("."),
            };
            let canonical = parent.canonicalize().ok()?;
            Some(canonical.join(out.file_name()?))
        });

        let rules = ExcludeRules {
            root: root.clone(),
            patterns: config.exclude_patterns.clone(),
            output_file,
        };

        Ok(Self {
            root,
            rules: Arc::new(rules),
            respect_gitignore: config.respect_gitignore,
        })
    }

    /// The canonical workspace root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Check if a path is excluded from enumeration
    pub fn should_exclude(&self, path: &Path) -> bool {
        self.rules.excludes(path)
    }

    /// List absolute paths of all candidate files, sorted by name within each directory
    pub fn enumerate(&self) -> Result<Vec<PathBuf>> {
        let files = if self.respect_gitignore {
            self.enumerate_with_gitignore()
        } else {
            self.enumerate_all()
        };
        debug!(count = files.len(), root = %self.root.display(), "Enumerated files");
        Ok(files)
    }

    fn enumerate_with_gitignore(&self) -> Vec<PathBuf> {
        let rules = Arc::clone(&self.rules);
        let mut walker = WalkBuilder::new(&self.root);
        walker
            .hidden(false)
            .require_git(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| entry.depth() == 0 || !rules.excludes(entry.path()));

        walker
            .build()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().map_or(false, |ft| ft.is_file()))
            .map(|entry| entry.into_path())
            .collect()
    }

    fn enumerate_all(&self) -> Vec<PathBuf> {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.should_exclude(entry.path()))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .collect()
    }
}

/// Enumerate candidate files for `config`, failing when there are none
pub fn enumerate_files(config: &Config) -> Result<(PathBuf, Vec<PathBuf>)> {
    let scanner = Scanner::new(config)?;
    let files = scanner.enumerate()?;
    if files.is_empty() {
        return Err(RepoTextError::NoCandidates);
    }
    Ok((scanner.root().to_path_buf(), files))
}
