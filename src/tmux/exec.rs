use std::thread;
use std::time::Duration;

use serde::Serialize;

use crate::tmux::{capture_pane, send_keys, TmuxError};

/// How many trailing pane rows are searched for command output.
const CAPTURE_WINDOW: u32 = 50;

/// What a shell command left on screen after it ran.
#[derive(Debug, Clone, Serialize)]
pub struct CommandResult {
    pub command: String,
    pub output: String,
}

/// Send `command` to the target pane, give it `wait` to produce output, then
/// capture what it printed.
///
/// Pacing is a fixed sleep. There is no completion detection, so a command
/// still running after `wait` yields whatever it had written by then.
pub fn execute_and_capture(
    target: &str,
    command: &str,
    wait: Duration,
) -> Result<CommandResult, TmuxError> {
    send_keys(target, command)?;
    thread::sleep(wait);

    let captured = capture_pane(target, CAPTURE_WINDOW)?;
    let output = extract_output(&captured, command);
    tracing::debug!("captured {} bytes from {}", output.len(), target);

    Ok(CommandResult {
        command: command.to_string(),
        output,
    })
}

/// Cut the captured tail down to what the command printed: everything after
/// the echoed command line, minus trailing blanks and the fresh prompt.
fn extract_output(captured: &str, command: &str) -> String {
    let lines: Vec<&str> = captured.lines().collect();
    let mut tail: Vec<&str> = match lines.iter().rposition(|l| l.contains(command)) {
        Some(echo) => lines[echo + 1..].to_vec(),
        None => lines,
    };

    while tail.last().is_some_and(|l| l.trim().is_empty()) {
        tail.pop();
    }
    if tail.last().is_some_and(|l| looks_like_prompt(l)) {
        tail.pop();
    }
    while tail.last().is_some_and(|l| l.trim().is_empty()) {
        tail.pop();
    }

    tail.join("\n")
}

/// The prompt string is unknowable from here; a trailing line ending in a
/// common prompt glyph is taken to be the shell re-prompting.
fn looks_like_prompt(line: &str) -> bool {
    matches!(
        line.trim_end().chars().last(),
        Some('$' | '#' | '%' | '>')
    )
}
