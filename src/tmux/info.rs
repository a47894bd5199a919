use serde::Serialize;

use crate::tmux::{run_checked, TmuxError};

/// Pipe-separated `display-message` reply; path last for the same reason as
/// the session listing.
const INFO_FORMAT: &str = "#{session_name}|#{window_index}|#{window_name}|#{pane_index}|#{pane_id}|#{pane_width}|#{pane_height}|#{pane_current_command}|#{pane_title}|#{pane_current_path}";
const INFO_FIELDS: usize = 10;

/// Metadata for the active pane of a target.
#[derive(Debug, Clone, Serialize)]
pub struct PaneInfo {
    pub session: String,
    pub window_index: u32,
    pub window_name: String,
    pub pane_index: u32,
    pub pane_id: String,
    pub width: u32,
    pub height: u32,
    pub current_command: String,
    pub title: String,
    pub current_path: String,
}

impl PaneInfo {
    /// Ordered label/value pairs for key-value rendering.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("session", self.session.clone()),
            (
                "window",
                format!("{} ({})", self.window_index, self.window_name),
            ),
            ("pane", self.pane_index.to_string()),
            ("pane_id", self.pane_id.clone()),
            ("size", format!("{}x{}", self.width, self.height)),
            ("command", self.current_command.clone()),
            ("title", self.title.clone()),
            ("path", self.current_path.clone()),
        ]
    }

    fn parse(line: &str) -> Option<Self> {
        let mut parts = line.splitn(INFO_FIELDS, '|');
        let session = parts.next().filter(|s| !s.is_empty())?.to_string();
        let window_index = parts.next()?.parse().ok()?;
        let window_name = parts.next()?.to_string();
        let pane_index = parts.next()?.parse().ok()?;
        let pane_id = parts.next()?.to_string();
        let width = parts.next()?.parse().ok()?;
        let height = parts.next()?.parse().ok()?;
        let current_command = parts.next()?.to_string();
        let title = parts.next()?.to_string();
        let current_path = parts.next()?.to_string();
        Some(Self {
            session,
            window_index,
            window_name,
            pane_index,
            pane_id,
            width,
            height,
            current_command,
            title,
            current_path,
        })
    }
}

/// Query metadata for the active pane of `target`.
pub fn pane_info(target: &str) -> Result<PaneInfo, TmuxError> {
    let stdout = run_checked(&["display-message", "-p", "-t", target, INFO_FORMAT])?;
    stdout
        .lines()
        .next()
        .and_then(PaneInfo::parse)
        .ok_or_else(|| {
            TmuxError::Command(format!("unexpected display-message reply: {stdout:?}"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_display_message_reply() {
        let info =
            PaneInfo::parse("dev|1|editor|0|%3|120|40|vim|notes.txt|/home/user/project").unwrap();
        assert_eq!(info.session, "dev");
        assert_eq!(info.window_index, 1);
        assert_eq!(info.window_name, "editor");
        assert_eq!(info.pane_id, "%3");
        assert_eq!(info.width, 120);
        assert_eq!(info.height, 40);
        assert_eq!(info.current_command, "vim");
        assert_eq!(info.current_path, "/home/user/project");
    }

    #[test]
    fn rejects_truncated_replies() {
        assert!(PaneInfo::parse("dev|1|editor").is_none());
        assert!(PaneInfo::parse("").is_none());
    }

    #[test]
    fn fields_render_in_a_stable_order() {
        let info = PaneInfo::parse("dev|0|sh|0|%0|80|24|sh|sh|/tmp").unwrap();
        let fields = info.fields();
        assert_eq!(fields[0], ("session", "dev".to_string()));
        assert_eq!(fields[1].1, "0 (sh)");
        assert_eq!(fields[4].1, "80x24");
    }
}
