/*!
 * repotext - Concatenate project files into one text document for LLM context
 *
 * This library filters candidate files, renders a directory tree of the
 * ones that remain and appends each file's content in a fenced,
 * language-tagged block.
 */

pub mod clipboard;
pub mod config;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod language;
pub mod report;
pub mod scanner;
pub mod selection;
pub mod tree;
pub mod types;
pub mod utils;

#[cfg(test)]
mod tests;

// Re-export main components for easier access
pub use config::Config;
pub use error::{RepoTextError, Result};
pub use filter::{is_eligible, select_default};
pub use formatter::{format_files, FileReader, Formatter, FsReader};
pub use report::{ReportFormat, Reporter, RunReport};
pub use scanner::{enumerate_files, Scanner};
pub use selection::{select, Criteria, Selection};
pub use tree::{build_tree, render_tree, TreeNode};
pub use types::{FormattedOutput, IncludedFile, SkippedFile};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
