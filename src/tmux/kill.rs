use crate::tmux::{has_session, run_checked, TmuxError};

/// Kill a whole session. A session that is already gone is not an error.
pub fn kill_session(name: &str) -> Result<(), TmuxError> {
    if !has_session(name)? {
        return Ok(());
    }
    run_checked(&["kill-session", "-t", name])?;
    tracing::info!("killed session {}", name);
    Ok(())
}

pub fn kill_pane(target: &str) -> Result<(), TmuxError> {
    run_checked(&["kill-pane", "-t", target])?;
    Ok(())
}
