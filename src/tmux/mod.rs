//! Wrappers around the tmux CLI.
//!
//! Every operation shells out to the `tmux` binary and reports failures
//! through [`TmuxError`]. Nothing here talks to the tmux server directly;
//! the CLI is the protocol.

mod capture;
mod create;
mod exec;
mod info;
mod kill;
mod list;
mod send;

pub use capture::capture_pane;
pub use create::create_session;
pub use exec::{execute_and_capture, CommandResult};
pub use info::{pane_info, PaneInfo};
pub use kill::{kill_pane, kill_session};
pub use list::{list_sessions, Pane, Session, Window};
pub use send::{send_escape, send_keys};

use std::env;
use std::process::{Command, Output};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum TmuxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("tmux command failed: {0}")]
    Command(String),
}

/// Name of the binary to invoke, overridable for nonstandard installs.
fn tmux_bin() -> String {
    env::var("TMUX_CONTROLLER_BIN").unwrap_or_else(|_| "tmux".to_string())
}

pub(crate) fn run(args: &[&str]) -> Result<Output, TmuxError> {
    tracing::debug!("tmux {:?}", args);
    Command::new(tmux_bin())
        .args(args)
        .output()
        .map_err(TmuxError::Io)
}

/// Run tmux and fail with its stderr on a nonzero exit.
pub(crate) fn run_checked(args: &[&str]) -> Result<String, TmuxError> {
    let output = run(args)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(TmuxError::Command(stderr.trim().to_string()));
    }
    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// Check whether a session with the given name exists.
///
/// `has-session` answers through its exit status, so a missing session is
/// not an error here.
pub fn has_session(name: &str) -> Result<bool, TmuxError> {
    let output = run(&["has-session", "-t", name])?;
    Ok(output.status.success())
}

/// The per-session operations a scripted driver needs from a multiplexer:
/// existence check, pane metadata, command execution with captured output,
/// raw capture, and fire-and-forget input.
pub trait SessionControl {
    fn session_exists(&self) -> Result<bool, TmuxError>;
    fn pane_info(&self) -> Result<PaneInfo, TmuxError>;
    fn execute_and_capture(
        &self,
        command: &str,
        wait: Duration,
    ) -> Result<CommandResult, TmuxError>;
    fn capture_pane(&self, lines: u32) -> Result<String, TmuxError>;
    fn send_command(&self, command: &str) -> Result<(), TmuxError>;
}

/// Handle for driving one session's active pane through the tmux CLI.
#[derive(Debug, Clone)]
pub struct TmuxController {
    session: String,
}

impl TmuxController {
    pub fn new(session: impl Into<String>) -> Self {
        Self {
            session: session.into(),
        }
    }

    /// All sessions known to the server, empty when no server is running.
    pub fn list_sessions() -> Result<Vec<Session>, TmuxError> {
        list::list_sessions()
    }

    pub fn session(&self) -> &str {
        &self.session
    }
}

impl SessionControl for TmuxController {
    fn session_exists(&self) -> Result<bool, TmuxError> {
        has_session(&self.session)
    }

    fn pane_info(&self) -> Result<PaneInfo, TmuxError> {
        info::pane_info(&self.session)
    }

    fn execute_and_capture(
        &self,
        command: &str,
        wait: Duration,
    ) -> Result<CommandResult, TmuxError> {
        exec::execute_and_capture(&self.session, command, wait)
    }

    fn capture_pane(&self, lines: u32) -> Result<String, TmuxError> {
        capture::capture_pane(&self.session, lines)
    }

    fn send_command(&self, command: &str) -> Result<(), TmuxError> {
        send::send_keys(&self.session, command)
    }
}
