//! Extension to code-fence language tag lookup

use std::path::Path;

/// Fence tag for a file extension, or `""` when the extension is not known.
///
/// The comparison ignores case, so `TS` and `ts` both give `typescript`.
pub fn tag_for_extension(ext: &str) -> &'static str {
    match ext.to_lowercase().as_str() {
        "ts" | "tsx" => "typescript",
        "js" | "jsx" => "javascript",
        "json" => "json",
        "html" => "html",
        "css" => "css",
        "md" => "markdown",
        "py" => "python",
        "java" => "java",
        "c" => "c",
        "cpp" | "h" => "cpp",
        "cs" => "csharp",
        "rb" => "ruby",
        "php" => "php",
        "go" => "go",
        "rs" => "rust",
        "swift" => "swift",
        "kt" => "kotlin",
        "sh" => "bash",
        "yaml" | "yml" => "yaml",
        "xml" => "xml",
        "vue" => "vue",
        "scss" => "scss",
        "less" => "less",
        "lua" => "lua",
        "sql" => "sql",
        "r" => "r",
        "pl" => "perl",
        "dart" => "dart",
        _ => "",
    }
}

/// Fence tag for a path, based on its final extension
pub fn tag_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or("", tag_for_extension)
}
