//! The contract for the embedded editor widget.
//!
//! The sandbox never reaches past this trait into the widget's internals,
//! so any text-editing widget with equivalent capabilities can sit behind
//! it. Keyboard shortcuts deliberately do not go through the widget: the
//! session owns all bindings so that every shortcut and every on-screen
//! control share one action path.

use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::Frame;
use sandpit_core::Diagnostic;
use tui_textarea::Input;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorTheme {
    pub background: Color,
    pub foreground: Color,
    pub line_numbers: Color,
    pub cursor_line: Color,
}

impl EditorTheme {
    pub fn named(name: &str) -> EditorTheme {
        match name {
            "light" => EditorTheme {
                background: Color::White,
                foreground: Color::Black,
                line_numbers: Color::Gray,
                cursor_line: Color::Gray,
            },
            _ => EditorTheme {
                background: Color::Reset,
                foreground: Color::Reset,
                line_numbers: Color::DarkGray,
                cursor_line: Color::Black,
            },
        }
    }
}

pub trait EditorWidget: Send {
    fn name(&self) -> String;
    fn value(&self) -> String;
    fn set_value(&mut self, text: &str);
    fn line_count(&self) -> usize;
    /// Zero-based (row, column) of the cursor.
    fn cursor(&self) -> (usize, usize);
    /// Feeds one input into the widget. Returns true when the buffer
    /// content changed (cursor motion alone returns false).
    fn handle_input(&mut self, input: Input) -> bool;
    fn insert_text(&mut self, text: &str);
    /// Diagnostics from the widget's own language services, if it has any.
    /// The sandbox surfaces these verbatim; it never produces its own.
    fn diagnostics(&self) -> Vec<Diagnostic> {
        vec![]
    }
    /// Asks the widget to recompute its internal layout for a new area.
    fn layout(&mut self, area: Rect);
    fn apply_theme(&mut self, theme: &EditorTheme);
    fn render(&self, frame: &mut Frame, area: Rect);
}

pub type EditorWidgetBox = Box<dyn EditorWidget>;
