//! Scripted control of tmux sessions through the tmux CLI.
//!
//! The [`tmux`] module wraps the handful of tmux commands needed to drive a
//! running server: enumerating sessions, reading pane metadata, injecting
//! keystrokes, and capturing pane content. The [`demo`] module holds the
//! walkthroughs run by the `tmux-demo` binary.
//!
//! ```no_run
//! use tmux_controller::tmux::{SessionControl, TmuxController};
//!
//! # fn main() -> Result<(), tmux_controller::tmux::TmuxError> {
//! let sessions = TmuxController::list_sessions()?;
//! if let Some(first) = sessions.first() {
//!     let ctrl = TmuxController::new(first.name.as_str());
//!     println!("{}", ctrl.capture_pane(10)?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod demo;
pub mod tmux;
