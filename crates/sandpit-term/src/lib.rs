//! Terminal user interface for the sandpit learning sandbox.
//!
//! This crate hosts the interactive side of the sandbox: an editor pane with
//! tabs, a resizable output workspace with output/problems/terminal
//! surfaces, keyboard-driven commands with a palette, and a browser preview
//! affordance. The execution engine itself lives in `sandpit-core`; the
//! editing widget is consumed through a narrow contract and can be swapped.

pub mod application;
pub mod configuration;
pub mod domain;
pub mod infrastructure;

pub use application::ui::{destruct_terminal_for_panic, start_loop, TerminalFullscreenHost};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{Action, EditorTab, EditorTheme, EditorWidget, Event, SessionCommand};
pub use domain::services::{EditorSession, SessionProps};
pub use infrastructure::editors::TextAreaEditor;
