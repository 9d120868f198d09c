/*!
 * End-to-end tests for the enumerate, select and format pipeline
 */

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use tempfile::tempdir;

use crate::config::Config;
use crate::formatter::{Formatter, FsReader, SEPARATOR_WIDTH};
use crate::scanner::enumerate_files;
use crate::selection::{select_with_defaults, Criteria, Selection};

// Helper function to create a test project
fn setup_test_project() -> io::Result<tempfile::TempDir> {
    let temp_dir = tempdir()?;

    fs::create_dir_all(temp_dir.path().join("src").join("util"))?;
    fs::create_dir(temp_dir.path().join(".vscode"))?;
    fs::create_dir_all(temp_dir.path().join("node_modules").join("left-pad"))?;

    let mut readme = File::create(temp_dir.path().join("README.md"))?;
    writeln!(readme, "# Demo project")?;

    let mut main = File::create(temp_dir.path().join("src").join("main.rs"))?;
    write!(main, "fn main() {{\n    println!(\"hi\");\n}}")?;

    let mut helper = File::create(temp_dir.path().join("src").join("util").join("helper.py"))?;
    writeln!(helper, "def helper():\n    return 1")?;

    let mut settings = File::create(temp_dir.path().join(".vscode").join("settings.json"))?;
    writeln!(settings, "{{}}")?;

    let mut dep = File::create(
        temp_dir
            .path()
            .join("node_modules")
            .join("left-pad")
            .join("index.js"),
    )?;
    writeln!(dep, "module.exports = 1;")?;

    let mut logo = File::create(temp_dir.path().join("logo.png"))?;
    logo.write_all(&[0x89, b'P', b'N', b'G', 0, 1, 2, 3])?;

    Ok(temp_dir)
}

fn config_for(root: &Path) -> Config {
    Config {
        workspace_root: root.to_path_buf(),
        ..Config::default()
    }
}

fn run_pipeline(config: &Config) -> crate::Result<Option<crate::FormattedOutput>> {
    let (root, candidates) = enumerate_files(config)?;
    let selected = match select_with_defaults(&candidates, &root, &Criteria::from_config(config)) {
        Selection::Files(files) => files,
        Selection::Empty => return Ok(None),
    };
    let formatter = Formatter::new(Arc::new(ProgressBar::hidden()));
    formatter.format(&selected, &root, &FsReader).map(Some)
}

#[test]
fn test_default_pipeline() -> crate::Result<()> {
    let temp_dir = setup_test_project()?;
    let output = run_pipeline(&config_for(temp_dir.path()))?.expect("files selected");

    let expected_tree = "\
├── README.md
└── src
    ├── main.rs
    └── util
        └── helper.py
";
    assert!(output.text.starts_with("# Directory Structure\n\n"));
    assert!(
        output.text.contains(expected_tree),
        "unexpected tree:\n{}",
        output.text
    );

    assert!(output.text.contains("# File: src/main.rs\n\n```rust\n"));
    assert!(output.text.contains("```python\n// Content of src/util/helper.py starts here"));
    assert!(output.text.contains("```markdown\n"));
    assert!(!output.text.contains("settings.json"));
    assert!(!output.text.contains("left-pad"));
    assert!(!output.text.contains("logo.png"));

    let separators = output
        .text
        .lines()
        .filter(|line| *line == "=".repeat(SEPARATOR_WIDTH))
        .count();
    assert_eq!(separators, 1 + output.included.len());
    assert_eq!(output.included.len(), 3);

    Ok(())
}

#[test]
fn test_select_all_still_filters() -> crate::Result<()> {
    let temp_dir = setup_test_project()?;
    let config = Config {
        select_all: true,
        ..config_for(temp_dir.path())
    };
    let output = run_pipeline(&config)?.expect("files selected");

    assert!(!output.text.contains("logo.png"));
    assert_eq!(output.excluded.len(), 2);
    Ok(())
}

#[test]
fn test_include_patterns_narrow_selection() -> crate::Result<()> {
    let temp_dir = setup_test_project()?;
    let config = Config {
        include_patterns: vec!["src/**/*.py".to_string()],
        ..config_for(temp_dir.path())
    };
    let output = run_pipeline(&config)?.expect("files selected");

    assert_eq!(output.included.len(), 1);
    assert!(output
        .text
        .contains("└── src\n    └── util\n        └── helper.py\n"));
    Ok(())
}

#[test]
fn test_no_matching_include_is_noop() -> crate::Result<()> {
    let temp_dir = setup_test_project()?;
    let config = Config {
        include_patterns: vec!["*.java".to_string()],
        ..config_for(temp_dir.path())
    };
    assert!(run_pipeline(&config)?.is_none());
    Ok(())
}

#[test]
fn test_content_round_trip() -> crate::Result<()> {
    let temp_dir = setup_test_project()?;
    let output = run_pipeline(&config_for(temp_dir.path()))?.expect("files selected");

    let original = fs::read_to_string(temp_dir.path().join("src").join("main.rs"))?;
    let start = "// Content of src/main.rs starts here\n\n";
    let end = "\n// Content of src/main.rs ends here\n";
    let from = output.text.find(start).expect("start marker") + start.len();
    let to = output.text.find(end).expect("end marker");
    assert_eq!(&output.text[from..to], format!("{}\n", original));
    Ok(())
}

#[test]
fn test_unreadable_file_skipped() -> crate::Result<()> {
    let temp_dir = setup_test_project()?;
    // Invalid UTF-8 fails read_to_string regardless of permissions
    fs::write(temp_dir.path().join("src").join("blob.rs"), [0xff, 0xfe, 0xfd])?;

    let output = run_pipeline(&config_for(temp_dir.path()))?.expect("files selected");

    assert!(!output.text.contains("# File: src/blob.rs"));
    assert_eq!(output.skipped.len(), 1);
    assert!(output.text.contains("# File: src/main.rs"));
    Ok(())
}

#[test]
fn test_workspace_under_editor_dir() -> crate::Result<()> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path().join(".vscode-server").join("proj");
    fs::create_dir_all(root.join("src"))?;
    fs::write(root.join("src").join("main.rs"), "fn main() {}\n")?;

    let output = run_pipeline(&config_for(&root))?.expect("files selected");

    assert_eq!(output.included.len(), 1);
    assert!(output.text.contains("# File: src/main.rs"));
    Ok(())
}
