//! Demonstration flows for scripted control of a running tmux server.
//!
//! Both routines take the session roster and a connect function instead of
//! touching the server themselves, so their control branches can be
//! exercised without tmux.

use std::thread;
use std::time::Duration;

use crate::tmux::{Session, SessionControl, TmuxError};

/// Pause after `pwd` before capturing its output.
const PWD_WAIT: Duration = Duration::from_millis(300);
/// Pause after `ls -la`, which prints more and needs a little longer.
const LS_WAIT: Duration = Duration::from_millis(500);
/// Pacing between sends in the interactive walkthrough.
const SEND_PACING: Duration = Duration::from_millis(200);
/// How much pane history the basic walkthrough shows at the end.
const TAIL_LINES: u32 = 10;

/// Commands replayed by the interactive walkthrough.
const SCRIPTED_COMMANDS: [&str; 4] = [
    "echo 'Starting task...'",
    "date",
    "hostname",
    "echo 'Task complete!'",
];

/// Walk the controller surface against the first available session: roster,
/// existence check, pane metadata, two captured commands, and a tail of the
/// pane content.
pub fn run_basic<C, F>(sessions: Vec<Session>, connect: F) -> Result<(), TmuxError>
where
    C: SessionControl,
    F: FnOnce(&str) -> C,
{
    println!("=== Available Sessions ===");
    if sessions.is_empty() {
        println!("No sessions found. Create one with: tmux new-session -d -s mysession");
        return Ok(());
    }
    for session in &sessions {
        println!("  - {}", session.name);
    }

    let name = &sessions[0].name;
    println!("\n=== Connecting to '{name}' ===");
    let ctrl = connect(name.as_str());

    if !ctrl.session_exists()? {
        println!("Session '{name}' not found!");
        return Ok(());
    }

    println!("\n=== Pane Info ===");
    for (label, value) in ctrl.pane_info()?.fields() {
        println!("  {label}: {value}");
    }

    println!("\n=== Execute 'pwd' ===");
    let result = ctrl.execute_and_capture("pwd", PWD_WAIT)?;
    println!("Output: {}", result.output);

    println!("\n=== Execute 'ls -la' ===");
    let result = ctrl.execute_and_capture("ls -la", LS_WAIT)?;
    println!("Output:\n{}", result.output);

    println!("\n=== Current Pane Content (last {TAIL_LINES} lines) ===");
    println!("{}", ctrl.capture_pane(TAIL_LINES)?);

    Ok(())
}

/// Replay a fixed command script into the first available session, pacing
/// the sends instead of waiting for output.
pub fn run_interactive<C, F>(sessions: Vec<Session>, connect: F) -> Result<(), TmuxError>
where
    C: SessionControl,
    F: FnOnce(&str) -> C,
{
    if sessions.is_empty() {
        println!("No sessions available");
        return Ok(());
    }

    let ctrl = connect(sessions[0].name.as_str());
    for command in SCRIPTED_COMMANDS {
        println!("Sending: {command}");
        ctrl.send_command(command)?;
        thread::sleep(SEND_PACING);
    }

    Ok(())
}
