use crate::tmux::{run_checked, TmuxError};

/// Create a detached session named `name`, with its shell started in `cwd`.
/// tmux itself rejects a duplicate name.
pub fn create_session(name: &str, cwd: &str) -> Result<(), TmuxError> {
    run_checked(&["new-session", "-d", "-s", name, "-c", cwd])?;
    tracing::info!("created session {}", name);
    Ok(())
}
