/*!
 * Text document assembly: tree header followed by fenced file blocks
 */

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use indicatif::ProgressBar;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::{RepoTextError, Result};
use crate::filter;
use crate::language;
use crate::tree::{build_tree, render_tree};
use crate::types::{FormattedOutput, IncludedFile, SkippedFile};

/// Width of the `=` line closing the header and every file block
pub const SEPARATOR_WIDTH: usize = 72;

/// Title line of the header
pub const TITLE: &str = "# Directory Structure";

/// Source of file contents
pub trait FileReader: Sync {
    /// Read the whole file as text
    fn read_text(&self, path: &Path) -> io::Result<String>;
}

/// Reads straight from the file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FsReader;

impl FileReader for FsReader {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}

impl<F> FileReader for F
where
    F: Fn(&Path) -> io::Result<String> + Sync,
{
    fn read_text(&self, path: &Path) -> io::Result<String> {
        self(path)
    }
}

/// A path as given, resolved against the workspace
#[derive(Debug)]
struct Entry {
    absolute: PathBuf,
    relative: PathBuf,
}

/// Assembles the output document
pub struct Formatter {
    /// Progress bar, advanced once per file read
    progress: Arc<ProgressBar>,
}

impl Formatter {
    /// Create a new formatter
    pub fn new(progress: Arc<ProgressBar>) -> Self {
        Self { progress }
    }

    /// Format `paths` relative to `workspace_root`, reading contents through `reader`.
    ///
    /// Ineligible files are dropped before anything is read. Files that fail to
    /// read are logged, recorded in [`FormattedOutput::skipped`] and left out of
    /// the text; they never abort the whole document.
    pub fn format<P, R>(
        &self,
        paths: &[P],
        workspace_root: &Path,
        reader: &R,
    ) -> Result<FormattedOutput>
    where
        P: AsRef<Path>,
        R: FileReader + ?Sized,
    {
        if workspace_root.as_os_str().is_empty() {
            return Err(RepoTextError::NoWorkspace);
        }
        let root = absolutize(workspace_root)?;

        let (included, excluded): (Vec<Entry>, Vec<Entry>) = paths
            .iter()
            .map(|p| resolve(&root, p.as_ref()))
            .partition(|entry| filter::is_eligible(&entry.relative));
        debug!(
            included = included.len(),
            excluded = excluded.len(),
            "Filtered input paths"
        );

        let mut output = FormattedOutput {
            excluded: excluded.into_iter().map(|e| e.relative).collect(),
            ..Default::default()
        };

        let relative: Vec<&Path> = included.iter().map(|e| e.relative.as_path()).collect();
        let tree = build_tree(relative.as_slice());
        output.directories = tree.count().0;

        let separator = "=".repeat(SEPARATOR_WIDTH);
        output.text.push_str(TITLE);
        output.text.push_str("\n\n");
        output.text.push_str(&render_tree(&tree, ""));
        output.text.push('\n');
        output.text.push_str(&separator);
        output.text.push('\n');

        // Reads may finish in any order; collect keeps input order.
        self.progress.set_length(included.len() as u64);
        let contents: Vec<io::Result<String>> = included
            .par_iter()
            .map(|entry| {
                let result = reader.read_text(&entry.absolute);
                self.progress.inc(1);
                result
            })
            .collect();

        for (entry, content) in included.into_iter().zip(contents) {
            match content {
                Ok(content) => {
                    write_block(&mut output.text, &entry.relative, &content, &separator);
                    output.included.push(IncludedFile {
                        lines: content.lines().count(),
                        chars: content.chars().count(),
                        path: entry.relative,
                    });
                }
                Err(source) => {
                    let err = RepoTextError::Read {
                        path: entry.absolute,
                        source,
                    };
                    warn!("Skipping file: {}", err);
                    output.skipped.push(SkippedFile {
                        path: entry.relative,
                        reason: err.to_string(),
                    });
                }
            }
        }

        Ok(output)
    }
}

/// Format with the file system reader and no progress display
pub fn format_files<P: AsRef<Path>>(paths: &[P], workspace_root: &Path) -> Result<FormattedOutput> {
    Formatter::new(Arc::new(ProgressBar::hidden())).format(paths, workspace_root, &FsReader)
}

fn write_block(out: &mut String, relative: &Path, content: &str, separator: &str) {
    let rel = relative.to_string_lossy();
    let tag = language::tag_for_path(relative);

    out.push_str(&format!("# File: {}\n\n", rel));
    out.push_str(&format!("```{}\n", tag));
    out.push_str(&format!("// Content of {} starts here\n\n", rel));
    out.push_str(content);
    out.push('\n');
    out.push_str(&format!("\n// Content of {} ends here\n", rel));
    out.push_str("```\n");
    out.push_str(separator);
    out.push('\n');
}

fn resolve(root: &Path, path: &Path) -> Entry {
    let absolute = normalize(&root.join(path));
    let relative = match absolute.strip_prefix(root) {
        Ok(rel) => rel.to_path_buf(),
        Err(_) => absolute.clone(),
    };
    Entry { absolute, relative }
}

fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(normalize(path))
    } else {
        Ok(normalize(&std::env::current_dir()?.join(path)))
    }
}

// Lexical only: no symlink resolution, the file need not exist.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
