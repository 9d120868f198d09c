/*!
 * Utility functions for repotext
 */

use once_cell::sync::Lazy;

/// Format a human-readable size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Directory and file names never offered as candidates
pub static DEFAULT_EXCLUDE: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        // Dependencies
        "node_modules",
        "bower_components",
        // Version Control
        ".git",
        ".svn",
        ".hg",
        "CVS",
        // OS Files
        ".DS_Store",
        "Thumbs.db",
    ]
});
