pub mod action;
pub mod command;
pub mod editor;
pub mod event;
pub mod tab;

pub use action::Action;
pub use command::{PaletteEntry, SessionCommand, PALETTE};
pub use editor::{EditorTheme, EditorWidget, EditorWidgetBox};
pub use event::Event;
pub use tab::EditorTab;
