/*!
 * Configuration handling for repotext
 */

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::error::{RepoTextError, Result};

/// Command-line arguments for repotext
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "repotext",
    version = env!("CARGO_PKG_VERSION"),
    about = "Concatenate project files into one text document for LLM prompts",
    long_about = "Collects the files of a project, prefixes them with a directory tree and wraps each one in a fenced, language-tagged block, ready to paste into a language-model prompt."
)]
pub struct Args {
    /// Workspace root to collect files from
    #[clap(default_value = ".")]
    pub directory: String,

    /// Write the document to this file instead of stdout
    #[clap(short, long)]
    pub output: Option<String>,

    /// Comma-separated glob patterns selecting which files to include
    #[clap(long, value_delimiter = ',')]
    pub include: Vec<String>,

    /// Comma-separated glob patterns of files or directories to skip during enumeration
    #[clap(long, value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Select every enumerated file instead of the default-eligible ones
    #[clap(long)]
    pub all: bool,

    /// Number of threads to use for reading files
    #[clap(long, default_value = "4")]
    pub threads: usize,

    /// Respect .gitignore files
    #[clap(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub respect_gitignore: bool,

    /// Copy output to clipboard
    #[clap(long, help = "Copy output to system clipboard")]
    pub clip: bool,

    /// Suppress the progress bar and the summary report
    #[clap(short, long)]
    pub quiet: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Workspace root
    pub workspace_root: PathBuf,

    /// Output file path (stdout when absent)
    pub output_file: Option<PathBuf>,

    /// Patterns selecting files (if empty, the default selection applies)
    pub include_patterns: Vec<String>,

    /// Patterns skipped during enumeration
    pub exclude_patterns: Vec<String>,

    /// Select every candidate
    pub select_all: bool,

    /// Number of threads to use for reading files
    pub num_threads: usize,

    /// Whether to respect .gitignore files
    pub respect_gitignore: bool,

    /// Copy output to clipboard
    pub clip: bool,

    /// Hide progress and report
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace_root: PathBuf::from("."),
            output_file: None,
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
            select_all: false,
            num_threads: 4,
            respect_gitignore: true,
            clip: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            workspace_root: PathBuf::from(args.directory),
            output_file: args.output.map(PathBuf::from),
            include_patterns: args.include,
            exclude_patterns: args.exclude,
            select_all: args.all,
            num_threads: args.threads,
            respect_gitignore: args.respect_gitignore,
            clip: args.clip,
            quiet: args.quiet,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.workspace_root.as_os_str().is_empty() || !self.workspace_root.is_dir() {
            return Err(RepoTextError::NoWorkspace);
        }

        if self.num_threads == 0 {
            crate::bail!(Config, "thread count must be at least 1");
        }

        // Check if output file directory exists
        if let Some(parent) = self.output_file.as_ref().and_then(|p| p.parent()) {
            crate::ensure!(
                parent.as_os_str().is_empty() || parent.is_dir(),
                Config,
                "Output directory not found: {}",
                parent.display()
            );
        }

        Ok(())
    }
}
