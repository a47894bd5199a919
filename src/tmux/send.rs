use crate::tmux::{run_checked, TmuxError};

/// Type `text` into the target pane exactly as written, then press Enter.
/// The literal flag keeps tmux from treating words like `Enter` or `Space`
/// in the payload as key names.
pub fn send_keys(target: &str, text: &str) -> Result<(), TmuxError> {
    run_checked(&["send-keys", "-t", target, "-l", text])?;
    run_checked(&["send-keys", "-t", target, "Enter"])?;
    Ok(())
}

pub fn send_escape(target: &str) -> Result<(), TmuxError> {
    run_checked(&["send-keys", "-t", target, "Escape"])?;
    Ok(())
}
