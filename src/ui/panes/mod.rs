//! TUI pane rendering modules
//!
//! - [`terminal`]: Transcript and the live input line
//! - [`environment`]: Variables, classes and imports of the active Java session
//! - [`status`]: Status bar with mode, message and keybindings
//!
//! Each pane module exports a `render_*` function plus the small state or
//! data structs it needs. Panes never mutate the shell.

pub mod environment;
pub mod status;
pub mod terminal;

pub use environment::{render_environment_pane, EnvironmentScrollState};
pub use status::{render_status_bar, StatusRenderData};
pub use terminal::{render_terminal_pane, TerminalRenderData, TerminalScrollState};
