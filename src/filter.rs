/*!
 * Default eligibility rules for candidate files
 */

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

/// Extensions excluded by default (binary, media, archives, bundles, source maps)
pub static BINARY_EXTENSIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Images
        "png", "jpg", "jpeg", "gif", "bmp", "tiff", "ico", "svg", "webp",
        // Documents & executables
        "pdf", "exe", "dll", "bin", "iso",
        // Archives
        "zip", "tar", "gz", "rar", "7z", "vsix",
        // Build output
        "mjs", "map",
    ]
    .into_iter()
    .collect()
});

/// Editor configuration directories excluded by default
pub const EDITOR_DIRS: &[&str] = &[".vscode"];

/// Check whether a path should be included when the user makes no explicit choice
pub fn is_eligible(path: &Path) -> bool {
    !has_binary_extension(path) && !in_editor_dir(path)
}

/// Keep the eligible paths, in their original order
pub fn select_default<P: AsRef<Path>>(paths: &[P]) -> Vec<PathBuf> {
    paths
        .iter()
        .filter(|p| is_eligible(p.as_ref()))
        .map(|p| p.as_ref().to_path_buf())
        .collect()
}

fn has_binary_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map_or(false, |ext| BINARY_EXTENSIONS.contains(ext.as_str()))
}

// Only directory segments count; a file named `.vscode` is fine.
fn in_editor_dir(path: &Path) -> bool {
    let Some(parent) = path.parent() else {
        return false;
    };
    parent.components().any(|component| {
        let segment = component.as_os_str().to_string_lossy();
        EDITOR_DIRS.iter().any(|dir| segment.contains(dir))
    })
}
