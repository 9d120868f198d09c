/*!
 * Clipboard support for repotext
 *
 * Pipes the finished document into whichever clipboard command the
 * platform provides.
 */

use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::debug;

/// Error type for clipboard operations
#[derive(Error, Debug)]
pub enum ClipboardError {
    /// Failed to execute the command
    #[error("Command failed: {0}")]
    CommandFailed(String),

    /// No suitable clipboard mechanism was found
    #[error("No suitable clipboard mechanism found")]
    NoClipboardFound,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for clipboard operations
pub type Result<T> = std::result::Result<T, ClipboardError>;

/// Clipboard commands, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Provider {
    Tmux,
    Wayland,
    Xsel,
    Xclip,
    MacOS,
    Wsl,
    Termux,
}

impl Provider {
    fn command(self) -> (&'static str, Vec<&'static str>) {
        match self {
            Self::Tmux => ("tmux", vec!["load-buffer", "-w", "-"]),
            Self::Wayland => ("wl-copy", vec![]),
            Self::Xsel => ("xsel", vec!["-b", "-i"]),
            Self::Xclip => ("xclip", vec!["-selection", "clipboard", "-in"]),
            Self::MacOS => ("pbcopy", vec![]),
            Self::Wsl => ("clip.exe", vec![]),
            Self::Termux => ("termux-clipboard-set", vec![]),
        }
    }

    fn copy(self, text: &str) -> Result<()> {
        let (cmd, args) = self.command();
        pipe_to(cmd, &args, text)
    }
}

/// Run `cmd` with `text` on its stdin and wait for it to exit
fn pipe_to(cmd: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(cmd)
        .args(args)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|_| ClipboardError::CommandFailed(format!("Failed to spawn {}", cmd)))?;

    // Dropping stdin closes the pipe so the command sees EOF
    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(text.as_bytes()).map_err(ClipboardError::from),
        None => Err(ClipboardError::CommandFailed(format!(
            "Failed to open stdin for {}",
            cmd
        ))),
    };

    // Reap the child even when the write failed
    let status = child.wait()?;
    written?;

    if status.success() {
        Ok(())
    } else {
        Err(ClipboardError::CommandFailed(format!(
            "{} exited with status: {}",
            cmd, status
        )))
    }
}

/// Copy text to the system clipboard using the first available mechanism
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let provider = available_providers()
        .into_iter()
        .next()
        .ok_or(ClipboardError::NoClipboardFound)?;
    debug!(?provider, "Copying to clipboard");
    provider.copy(text)
}

/// Check if a command exists on the PATH
pub fn command_exists(command: &str) -> bool {
    env::var_os("PATH")
        .map(|paths| env::split_paths(&paths).any(|dir| dir.join(command).is_file()))
        .unwrap_or(false)
}

fn available_providers() -> Vec<Provider> {
    let mut providers = Vec::new();

    if env::var_os("TMUX").is_some() && command_exists("tmux") {
        providers.push(Provider::Tmux);
    }

    let platform: &[Provider] = if cfg!(target_os = "macos") {
        &[Provider::MacOS]
    } else if cfg!(target_os = "android") {
        &[Provider::Termux]
    } else if cfg!(target_os = "windows") || env::var_os("WSL_DISTRO_NAME").is_some() {
        &[Provider::Wsl]
    } else {
        &[Provider::Wayland, Provider::Xsel, Provider::Xclip]
    };

    providers.extend(
        platform
            .iter()
            .copied()
            .filter(|p| command_exists(p.command().0)),
    );
    providers
}
