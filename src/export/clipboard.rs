//! Clipboard writes with a fallback path.
//!
//! The primary mechanism pipes text into the host's clipboard tool. When no tool
//! is installed or it fails (headless sessions, SSH), the fallback asks the
//! terminal emulator to set the clipboard through an OSC 52 escape sequence.

use crate::error::ClipboardError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

/// A mechanism able to place text on the system clipboard.
pub trait ClipboardBackend {
    fn name(&self) -> &str;
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Writes `text` to the clipboard, trying the platform tool first and the terminal second.
///
/// Returns `true` if either mechanism succeeded. Never panics and never returns an error.
pub fn copy_text(text: &str) -> bool {
    copy_text_with(&mut SystemClipboard::new(), &mut TerminalClipboard, text)
}

/// Two-stage copy: `primary`, then `fallback` if the first one failed.
pub fn copy_text_with(
    primary: &mut dyn ClipboardBackend,
    fallback: &mut dyn ClipboardBackend,
    text: &str,
) -> bool {
    match primary.write_text(text) {
        Ok(()) => {
            info!(backend = primary.name(), bytes = text.len(), "Copied to clipboard");
            return true;
        }
        Err(e) => warn!(backend = primary.name(), error = %e, "Primary clipboard write failed"),
    }

    match fallback.write_text(text) {
        Ok(()) => {
            info!(backend = fallback.name(), bytes = text.len(), "Copied to clipboard");
            true
        }
        Err(e) => {
            warn!(backend = fallback.name(), error = %e, "Fallback clipboard write failed");
            false
        }
    }
}

/// An external program that reads clipboard contents from stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ClipboardCommand {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// The host's native clipboard, reached through its command line tool.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    candidates: Vec<ClipboardCommand>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClipboard {
    /// Uses the clipboard tools known for the current platform, in order of preference.
    pub fn new() -> Self {
        Self {
            candidates: platform_commands(),
        }
    }

    /// Uses exactly `candidates`, tried in order.
    pub fn with_commands(candidates: Vec<ClipboardCommand>) -> Self {
        Self { candidates }
    }

    fn run(command: &ClipboardCommand, text: &str) -> Result<(), ClipboardError> {
        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // The pipe is closed at the end of this block so the tool sees EOF.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        // Always reap the child, even when it stopped reading early.
        let status = child.wait()?;
        if !status.success() {
            return Err(ClipboardError::CommandFailed {
                program: command.program.clone(),
                status: status.to_string(),
            });
        }
        written.map_err(ClipboardError::from)
    }
}

impl ClipboardBackend for SystemClipboard {
    fn name(&self) -> &str {
        "system"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let mut last_error = None;
        for command in &self.candidates {
            match Self::run(command, text) {
                Ok(()) => return Ok(()),
                Err(ClipboardError::Io(e)) if e.kind() == ErrorKind::NotFound => {
                    debug!(program = %command.program, "Clipboard tool not installed");
                }
                Err(e) => {
                    debug!(program = %command.program, error = %e, "Clipboard tool failed");
                    last_error = Some(e);
                }
            }
        }
        Err(last_error.unwrap_or_else(|| {
            ClipboardError::Unavailable("no clipboard tool found on this host".to_string())
        }))
    }
}

fn platform_commands() -> Vec<ClipboardCommand> {
    if cfg!(target_os = "macos") {
        vec![ClipboardCommand::new("pbcopy", &[])]
    } else if cfg!(target_os = "windows") {
        vec![ClipboardCommand::new("clip", &[])]
    } else {
        vec![
            ClipboardCommand::new("wl-copy", &[]),
            ClipboardCommand::new("xclip", &["-selection", "clipboard"]),
            ClipboardCommand::new("xsel", &["--clipboard", "--input"]),
        ]
    }
}

/// Sets the clipboard by emitting an OSC 52 sequence to `out`.
pub struct Osc52Clipboard<W: Write> {
    out: W,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

impl<W: Write> ClipboardBackend for Osc52Clipboard<W> {
    fn name(&self) -> &str {
        "osc52"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.out.write_all(osc52_sequence(text).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// OSC 52 written straight to the controlling terminal, bypassing redirected stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalClipboard;

#[cfg(windows)]
const TERMINAL_DEVICE: &str = "CONOUT$";
#[cfg(not(windows))]
const TERMINAL_DEVICE: &str = "/dev/tty";

impl ClipboardBackend for TerminalClipboard {
    fn name(&self) -> &str {
        "terminal"
    }

    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let tty = OpenOptions::new()
            .write(true)
            .open(TERMINAL_DEVICE)
            .map_err(|e| ClipboardError::Unavailable(format!("{}: {}", TERMINAL_DEVICE, e)))?;
        Osc52Clipboard::new(tty).write_text(text)
    }
}
