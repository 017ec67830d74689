/*!
 * Clipboard delivery for PasteFlow reports
 *
 * The report is piped into whichever clipboard command the platform offers.
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

/// Trait for clipboard operations
pub trait Clipboard {
    /// Copy text to the clipboard
    fn copy_to_clipboard(&self, text: &str) -> Result<()>;
}

/// Command-line clipboard tools, in order of preference per platform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardProvider {
    /// macOS pbcopy
    MacOS,
    /// Windows clip.exe, also reachable from WSL
    Windows,
    /// Wayland wl-copy
    Wayland,
    /// X11 xclip
    Xclip,
    /// X11 xsel
    Xsel,
    /// tmux paste buffer
    Tmux,
}

impl ClipboardProvider {
    /// Program and arguments that read the clipboard text from stdin
    pub fn command(self) -> (&'static str, &'static [&'static str]) {
        const NO_ARGS: &[&str] = &[];
        const XCLIP_ARGS: &[&str] = &["-selection", "clipboard", "-in"];
        const XSEL_ARGS: &[&str] = &["-b", "-i"];
        const TMUX_ARGS: &[&str] = &["load-buffer", "-w", "-"];

        match self {
            Self::MacOS => ("pbcopy", NO_ARGS),
            Self::Windows => ("clip.exe", NO_ARGS),
            Self::Wayland => ("wl-copy", NO_ARGS),
            Self::Xclip => ("xclip", XCLIP_ARGS),
            Self::Xsel => ("xsel", XSEL_ARGS),
            Self::Tmux => ("tmux", TMUX_ARGS),
        }
    }
}

impl Clipboard for ClipboardProvider {
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        let (program, args) = self.command();
        debug!(provider = ?self, program, bytes = text.len(), "Copying to clipboard");

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|e| ClipboardError::CommandFailed(format!("Failed to spawn {}: {}", program, e)))?;

        {
            let stdin = child.stdin.as_mut().ok_or_else(|| {
                ClipboardError::CommandFailed(format!("Failed to open stdin for {}", program))
            })?;
            stdin.write_all(text.as_bytes())?;
        }

        let status = child.wait()?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::CommandFailed(format!(
                "{} exited with status: {}",
                program, status
            )))
        }
    }
}

/// Copy text using the first clipboard provider available on this system
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let provider = available_providers()
        .into_iter()
        .next()
        .ok_or(ClipboardError::NoClipboardFound)?;
    provider.copy_to_clipboard(text)
}

/// Clipboard providers usable here, most preferred first
pub fn available_providers() -> Vec<ClipboardProvider> {
    candidate_providers()
        .into_iter()
        .filter(|provider| command_exists(provider.command().0))
        .collect()
}

/// Providers worth trying on the current platform
fn candidate_providers() -> Vec<ClipboardProvider> {
    let mut providers = Vec::new();

    if cfg!(target_os = "macos") {
        providers.push(ClipboardProvider::MacOS);
    } else if cfg!(target_os = "windows") || env::var_os("WSL_DISTRO_NAME").is_some() {
        providers.push(ClipboardProvider::Windows);
    } else {
        if env::var_os("WAYLAND_DISPLAY").is_some() {
            providers.push(ClipboardProvider::Wayland);
        }
        if env::var_os("DISPLAY").is_some() {
            providers.push(ClipboardProvider::Xclip);
            providers.push(ClipboardProvider::Xsel);
        }
    }

    if env::var_os("TMUX").is_some() {
        providers.push(ClipboardProvider::Tmux);
    }

    providers
}

/// Check whether `command` resolves to a file on PATH
pub fn command_exists(command: &str) -> bool {
    let Some(paths) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&paths).any(|dir| dir.join(command).is_file())
}
