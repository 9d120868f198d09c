/*!
 * Command-line interface for repotext
 */

use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::ThreadPoolBuilder;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use repotext::clipboard::copy_to_clipboard;
use repotext::config::{Args, Config};
use repotext::error::{RepoTextError, Result, ResultExt};
use repotext::formatter::{Formatter, FsReader};
use repotext::report::{ReportFormat, Reporter, RunReport};
use repotext::scanner::enumerate_files;
use repotext::selection::{select_with_defaults, Criteria, Selection};

fn main() -> ExitCode {
    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "repotext", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    init_logging();

    // Create configuration
    let config = Config::from_args(args);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e @ (RepoTextError::NoWorkspace | RepoTextError::NoCandidates)) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error formatting files: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(config: &Config) -> Result<()> {
    // Validate configuration
    config.validate()?;

    // Configure thread pool
    if let Err(e) = ThreadPoolBuilder::new()
        .num_threads(config.num_threads)
        .build_global()
    {
        warn!("Failed to set thread pool size: {}", e);
    }

    let start_time = Instant::now();

    let (root, candidates) = enumerate_files(config)?;
    debug!(candidates = candidates.len(), "Enumeration finished");

    let selected = match select_with_defaults(&candidates, &root, &Criteria::from_config(config)) {
        Selection::Files(files) => files,
        Selection::Empty => {
            eprintln!("No files selected.");
            return Ok(());
        }
    };

    let progress = if config.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(selected.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {pos}/{len} ({percent}%) {elapsed_precise}")
        {
            bar.set_style(style);
        }
        bar.set_prefix("📄 Reading");
        bar
    };

    let formatter = Formatter::new(Arc::new(progress.clone()));
    let output = formatter.format(&selected, &root, &FsReader)?;
    progress.finish_and_clear();

    let destination = match &config.output_file {
        Some(path) => {
            fs::write(path, &output.text)
                .with_context(|| format!("writing {}", path.display()))?;
            path.display().to_string()
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(output.text.as_bytes())
                .and_then(|()| stdout.flush())
                .with_context(|| "writing to stdout")?;
            "stdout".to_string()
        }
    };

    if config.clip {
        match copy_to_clipboard(&output.text) {
            Ok(()) => eprintln!("📋 Copied to clipboard"),
            Err(e) => warn!("Failed to copy to clipboard: {}", e),
        }
    }

    if !config.quiet {
        let report = RunReport {
            destination,
            duration: start_time.elapsed(),
            candidates: candidates.len(),
            output: &output,
        };
        Reporter::new(ReportFormat::ConsoleTable).print_report(&report);
    }

    Ok(())
}
