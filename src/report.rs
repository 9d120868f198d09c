/*!
 * Reporting functionality for repotext
 *
 * Summarizes what went into the document using the tabled library.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::FormattedOutput;
use crate::utils::format_file_size;

/// Files listed individually before the table switches to the largest ones
const MAX_LISTED_FILES: usize = 15;
/// Files shown when the list is truncated
const TOP_FILES: usize = 10;

/// Statistics for one run
#[derive(Debug, Clone)]
pub struct RunReport<'a> {
    /// Where the document went
    pub destination: String,
    /// Time taken to enumerate, read and assemble
    pub duration: Duration,
    /// Number of files offered by enumeration
    pub candidates: usize,
    /// The formatter result
    pub output: &'a FormattedOutput,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for run results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Generate a report string
    pub fn generate_report(&self, report: &RunReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stderr, keeping stdout for the document
    pub fn print_report(&self, report: &RunReport) {
        eprintln!("\n{}", self.generate_report(report));
    }

    fn create_summary_table(&self, report: &RunReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let output = report.output;
        let mut rows = vec![
            SummaryRow {
                key: "📂 Output".to_string(),
                value: report.destination.clone(),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "🔎 Candidates".to_string(),
                value: self.format_number(report.candidates),
            },
            SummaryRow {
                key: "📄 Files Included".to_string(),
                value: self.format_number(output.included.len()),
            },
            SummaryRow {
                key: "📁 Directories".to_string(),
                value: self.format_number(output.directories),
            },
            SummaryRow {
                key: "🚫 Excluded by Filter".to_string(),
                value: self.format_number(output.excluded.len()),
            },
            SummaryRow {
                key: "📝 Total Lines".to_string(),
                value: self.format_number(output.total_lines()),
            },
            SummaryRow {
                key: "🔤 Content Characters".to_string(),
                value: self.format_number(output.total_chars()),
            },
            SummaryRow {
                key: "📦 Document Size".to_string(),
                value: format_file_size(output.text.len() as u64),
            },
            SummaryRow {
                key: "🧮 LLM Tokens".to_string(),
                value: format!(
                    "{} tokens (estimated)",
                    self.format_number(output.text.chars().count() / 4)
                ),
            },
        ];

        if !output.skipped.is_empty() {
            rows.push(SummaryRow {
                key: "⚠️ Unreadable".to_string(),
                value: self.format_number(output.skipped.len()),
            });
        }

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn create_files_table(&self, report: &RunReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Est. Tokens")]
            tokens: String,
        }

        let mut files: Vec<_> = report.output.included.iter().collect();
        if files.len() > MAX_LISTED_FILES {
            files.sort_by(|a, b| b.chars.cmp(&a.chars));
            files.truncate(TOP_FILES);
        }

        let rows: Vec<FileRow> = files
            .iter()
            .map(|file| FileRow {
                path: file.path.display().to_string(),
                lines: self.format_number(file.lines),
                tokens: self.format_number(file.chars / 4),
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    fn generate_console_report(&self, report: &RunReport) -> String {
        let files_title = if report.output.included.len() > MAX_LISTED_FILES {
            "📋  TOP 10 LARGEST FILES BY CHARACTER COUNT  📋"
        } else {
            "📋  INCLUDED FILES"
        };

        let mut sections = vec![
            format!("{}\n{}", files_title, self.create_files_table(report)),
            format!("✅  DOCUMENT COMPLETE\n{}", self.create_summary_table(report)),
        ];

        if !report.output.skipped.is_empty() {
            let skipped: Vec<String> = report
                .output
                .skipped
                .iter()
                .map(|s| format!("  {}: {}", s.path.display(), s.reason))
                .collect();
            sections.push(format!("⚠️  SKIPPED FILES\n{}", skipped.join("\n")));
        }

        sections.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{IncludedFile, SkippedFile};
    use std::path::PathBuf;

    fn sample_output(files: usize) -> FormattedOutput {
        FormattedOutput {
            text: "x".repeat(400),
            included: (0..files)
                .map(|i| IncludedFile {
                    path: PathBuf::from(format!("src/file{}.rs", i)),
                    lines: i + 1,
                    chars: (i + 1) * 10,
                })
                .collect(),
            excluded: vec![PathBuf::from("logo.png")],
            skipped: vec![],
            directories: 1,
        }
    }

    #[test]
    fn test_format_number() {
        let reporter = Reporter::new(ReportFormat::ConsoleTable);
        assert_eq!(reporter.format_number(999), "999");
        assert_eq!(reporter.format_number(1_500), "1.5K");
        assert_eq!(reporter.format_number(2_000_000), "2.0M");
    }

    #[test]
    fn test_report_lists_files() {
        let output = sample_output(2);
        let report = RunReport {
            destination: "stdout".to_string(),
            duration: Duration::from_millis(5),
            candidates: 3,
            output: &output,
        };
        let text = Reporter::new(ReportFormat::ConsoleTable).generate_report(&report);
        assert!(text.contains("INCLUDED FILES"));
        assert!(text.contains("src/file0.rs"));
        assert!(text.contains("src/file1.rs"));
        assert!(text.contains("100 tokens (estimated)"));
        assert!(text.contains("Content Characters"));
        assert!(!text.contains("SKIPPED FILES"));
    }

    #[test]
    fn test_report_truncates_long_lists() {
        let output = sample_output(20);
        let report = RunReport {
            destination: "out.txt".to_string(),
            duration: Duration::from_millis(5),
            candidates: 20,
            output: &output,
        };
        let text = Reporter::new(ReportFormat::ConsoleTable).generate_report(&report);
        assert!(text.contains("TOP 10 LARGEST FILES"));
        assert!(text.contains("src/file19.rs"));
        assert!(!text.contains("src/file0.rs"));
    }

    #[test]
    fn test_report_mentions_skipped() {
        let mut output = sample_output(1);
        output.skipped.push(SkippedFile {
            path: PathBuf::from("locked.rs"),
            reason: "permission denied".to_string(),
        });
        let report = RunReport {
            destination: "stdout".to_string(),
            duration: Duration::from_millis(1),
            candidates: 2,
            output: &output,
        };
        let text = Reporter::new(ReportFormat::ConsoleTable).generate_report(&report);
        assert!(text.contains("SKIPPED FILES"));
        assert!(text.contains("locked.rs: permission denied"));
    }
}
