/*!
 * Directory tree built from relative paths, rendered with box-drawing connectors
 */

use std::path::{Component, Path};

/// Connector for an entry that has later siblings
const BRANCH: &str = "├── ";
/// Connector for the last entry at a level
const CORNER: &str = "└── ";
/// Continuation below a branch entry
const PIPE: &str = "│   ";
/// Continuation below the last entry
const BLANK: &str = "    ";

/// A node in the rendered tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// A file (leaf)
    File,
    /// A directory holding its entries in insertion order
    Directory(Vec<(String, TreeNode)>),
}

impl Default for TreeNode {
    fn default() -> Self {
        Self::Directory(Vec::new())
    }
}

impl TreeNode {
    /// Entries of a directory; files have none
    pub fn entries(&self) -> &[(String, TreeNode)] {
        match self {
            Self::Directory(entries) => entries,
            Self::File => &[],
        }
    }

    /// Count (directories, files) below this node, excluding the node itself
    pub fn count(&self) -> (usize, usize) {
        self.entries()
            .iter()
            .fold((0, 0), |(dirs, files), (_, child)| match child {
                Self::File => (dirs, files + 1),
                Self::Directory(_) => {
                    let (d, f) = child.count();
                    (dirs + d + 1, files + f)
                }
            })
    }

    /// Insert a path below this node, reusing existing segments
    pub fn insert(&mut self, path: &Path) {
        let mut node = self;
        for segment in segments(path) {
            let entries = node.entries_mut();
            let index = match entries.iter().position(|(name, _)| *name == segment) {
                Some(index) => index,
                None => {
                    entries.push((segment, Self::File));
                    entries.len() - 1
                }
            };
            node = &mut entries[index].1;
        }
    }

    // A file that gains children becomes a directory.
    fn entries_mut(&mut self) -> &mut Vec<(String, TreeNode)> {
        if let Self::File = self {
            *self = Self::Directory(Vec::new());
        }
        match self {
            Self::Directory(entries) => entries,
            Self::File => unreachable!("file nodes are promoted before access"),
        }
    }
}

fn segments(path: &Path) -> impl Iterator<Item = String> + '_ {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
}

/// Build a tree from relative paths, keeping first-seen order at every level
pub fn build_tree<P: AsRef<Path>>(paths: &[P]) -> TreeNode {
    let mut root = TreeNode::default();
    for path in paths {
        root.insert(path.as_ref());
    }
    root
}

/// Render the entries of `node`, one line each, every line starting with `prefix`
pub fn render_tree(node: &TreeNode, prefix: &str) -> String {
    let mut output = String::new();
    render_into(node, prefix, &mut output);
    output
}

fn render_into(node: &TreeNode, prefix: &str, output: &mut String) {
    let entries = node.entries();
    for (index, (name, child)) in entries.iter().enumerate() {
        let is_last = index + 1 == entries.len();
        let (connector, continuation) = if is_last {
            (CORNER, BLANK)
        } else {
            (BRANCH, PIPE)
        };

        output.push_str(prefix);
        output.push_str(connector);
        output.push_str(name);
        output.push('\n');

        if !child.entries().is_empty() {
            render_into(child, &format!("{}{}", prefix, continuation), output);
        }
    }
}
