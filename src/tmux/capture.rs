use crate::tmux::{run_checked, TmuxError};

/// Capture the last `lines` rows of a pane, scrollback included. tmux clamps
/// a start line beyond the history itself, so no range validation happens
/// here.
pub fn capture_pane(target: &str, lines: u32) -> Result<String, TmuxError> {
    let start_line = format!("-{lines}");
    run_checked(&["capture-pane", "-t", target, "-p", "-S", &start_line])
}
