use serde::Serialize;

use crate::tmux::{run, TmuxError};

/// One `list-panes -a` line per pane, pipe-separated. The path goes last so
/// a pipe inside it cannot shift the other fields.
const LIST_FORMAT: &str = "#{session_name}|#{session_attached}|#{window_index}|#{window_name}|#{window_active}|#{pane_index}|#{pane_active}|#{pane_current_path}";
const LIST_FIELDS: usize = 8;

#[derive(Debug, Clone, Serialize)]
pub struct Pane {
    pub index: u32,
    pub active: bool,
    /// Canonical `session:window.pane` addressing string.
    pub target: String,
    pub current_path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Window {
    pub index: u32,
    pub name: String,
    pub active: bool,
    pub panes: Vec<Pane>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub name: String,
    pub attached: bool,
    pub windows: Vec<Window>,
}

/// Enumerate every session on the server, with its windows and panes.
///
/// A stopped server and a server with zero sessions both come back as an
/// empty list rather than an error.
pub fn list_sessions() -> Result<Vec<Session>, TmuxError> {
    let output = run(&["list-panes", "-a", "-F", LIST_FORMAT])?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        if stderr.contains("no server running") || stderr.contains("no sessions") {
            return Ok(Vec::new());
        }
        return Err(TmuxError::Command(stderr.trim().to_string()));
    }

    Ok(parse_sessions(&String::from_utf8_lossy(&output.stdout)))
}

struct PaneRecord {
    session: String,
    attached: bool,
    window_index: u32,
    window_name: String,
    window_active: bool,
    pane_index: u32,
    pane_active: bool,
    current_path: String,
}

impl PaneRecord {
    fn parse(line: &str) -> Option<Self> {
        let mut parts = line.splitn(LIST_FIELDS, '|');
        let session = parts.next().filter(|s| !s.is_empty())?.to_string();
        // session_attached is a client count, not a flag.
        let attached = parts.next()? != "0";
        let window_index = parts.next()?.parse().ok()?;
        let window_name = parts.next()?.to_string();
        let window_active = parts.next()? == "1";
        let pane_index = parts.next()?.parse().ok()?;
        let pane_active = parts.next()? == "1";
        let current_path = parts.next()?.to_string();
        Some(Self {
            session,
            attached,
            window_index,
            window_name,
            window_active,
            pane_index,
            pane_active,
            current_path,
        })
    }
}

/// Fold per-pane records into the session → window → pane tree. Lines that
/// do not parse are dropped.
fn parse_sessions(raw: &str) -> Vec<Session> {
    let mut sessions: Vec<Session> = Vec::new();

    for line in raw.lines() {
        let Some(record) = PaneRecord::parse(line) else {
            continue;
        };

        let pane = Pane {
            index: record.pane_index,
            active: record.pane_active,
            target: format!(
                "{}:{}.{}",
                record.session, record.window_index, record.pane_index
            ),
            current_path: record.current_path,
        };

        match sessions.iter_mut().find(|s| s.name == record.session) {
            Some(session) => {
                match session
                    .windows
                    .iter_mut()
                    .find(|w| w.index == record.window_index)
                {
                    Some(window) => window.panes.push(pane),
                    None => session.windows.push(Window {
                        index: record.window_index,
                        name: record.window_name,
                        active: record.window_active,
                        panes: vec![pane],
                    }),
                }
            }
            None => sessions.push(Session {
                name: record.session,
                attached: record.attached,
                windows: vec![Window {
                    index: record.window_index,
                    name: record.window_name,
                    active: record.window_active,
                    panes: vec![pane],
                }],
            }),
        }
    }

    sessions
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "dev|1|0|editor|1|0|1|/home/user/project\n\
                          dev|1|0|editor|1|1|0|/home/user\n\
                          dev|1|1|logs|0|0|1|/var/log\n\
                          scratch|0|0|sh|1|0|1|/tmp\n";

    #[test]
    fn groups_panes_into_windows_and_sessions() {
        let sessions = parse_sessions(SAMPLE);
        assert_eq!(sessions.len(), 2);

        let dev = &sessions[0];
        assert_eq!(dev.name, "dev");
        assert!(dev.attached);
        assert_eq!(dev.windows.len(), 2);
        assert_eq!(dev.windows[0].name, "editor");
        assert_eq!(dev.windows[0].panes.len(), 2);
        assert_eq!(dev.windows[0].panes[0].target, "dev:0.0");
        assert_eq!(dev.windows[1].panes[0].current_path, "/var/log");

        let scratch = &sessions[1];
        assert!(!scratch.attached);
        assert_eq!(scratch.windows.len(), 1);
    }

    #[test]
    fn attached_reflects_client_count() {
        let sessions = parse_sessions("dev|2|0|sh|1|0|1|/tmp\n");
        assert!(sessions[0].attached);

        let sessions = parse_sessions("dev|0|0|sh|1|0|1|/tmp\n");
        assert!(!sessions[0].attached);
    }

    #[test]
    fn malformed_lines_are_dropped() {
        let raw = "garbage\nnot|enough|fields\ndev|1|0|sh|1|0|1|/tmp\n";
        let sessions = parse_sessions(raw);
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].name, "dev");
    }

    #[test]
    fn path_may_contain_the_separator() {
        let sessions = parse_sessions("dev|1|0|sh|1|0|1|/odd|path\n");
        assert_eq!(sessions[0].windows[0].panes[0].current_path, "/odd|path");
    }

    #[test]
    fn sessions_serialize_for_data_exchange() {
        let sessions = parse_sessions(SAMPLE);
        let value = serde_json::to_value(&sessions).unwrap();
        assert_eq!(value[0]["name"], "dev");
        assert_eq!(value[0]["attached"], true);
        assert_eq!(value[0]["windows"][0]["panes"][1]["target"], "dev:0.1");
    }
}
