//! The default editor widget: a `tui-textarea` adapter.
//!
//! Everything the session knows about editing goes through the
//! `EditorWidget` contract, so this adapter can be swapped for any other
//! text-editing widget without touching orchestration code.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::Frame;
use tui_textarea::{Input, TextArea};

use crate::domain::models::{EditorTheme, EditorWidget};

#[cfg(test)]
#[path = "textarea_test.rs"]
mod tests;

pub struct TextAreaEditor {
    inner: TextArea<'static>,
    theme: EditorTheme,
}

impl Default for TextAreaEditor {
    fn default() -> TextAreaEditor {
        let mut editor = TextAreaEditor {
            inner: TextArea::default(),
            theme: EditorTheme::named("dark"),
        };
        editor.apply_styles();
        editor
    }
}

impl TextAreaEditor {
    pub fn new() -> TextAreaEditor {
        TextAreaEditor::default()
    }

    fn apply_styles(&mut self) {
        self.inner.set_style(
            Style::default()
                .fg(self.theme.foreground)
                .bg(self.theme.background),
        );
        self.inner
            .set_line_number_style(Style::default().fg(self.theme.line_numbers));
        self.inner
            .set_cursor_line_style(Style::default().bg(self.theme.cursor_line));
    }
}

impl EditorWidget for TextAreaEditor {
    fn name(&self) -> String {
        "tui-textarea".to_string()
    }

    fn value(&self) -> String {
        self.inner.lines().join("\n")
    }

    fn set_value(&mut self, text: &str) {
        // Replacing the widget resets its styles along with its buffer.
        self.inner = TextArea::from(text.lines());
        self.apply_styles();
    }

    fn line_count(&self) -> usize {
        self.inner.lines().len()
    }

    fn cursor(&self) -> (usize, usize) {
        self.inner.cursor()
    }

    fn handle_input(&mut self, input: Input) -> bool {
        self.inner.input(input)
    }

    fn insert_text(&mut self, text: &str) {
        self.inner.insert_str(text);
    }

    fn layout(&mut self, _area: Rect) {
        // The textarea measures itself against the render area each frame;
        // the contract call exists for widgets with a retained canvas.
    }

    fn apply_theme(&mut self, theme: &EditorTheme) {
        self.theme = theme.clone();
        self.apply_styles();
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.inner, area);
    }
}
