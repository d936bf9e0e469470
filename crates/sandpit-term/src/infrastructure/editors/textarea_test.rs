use tui_textarea::{Input, Key};

use super::*;

fn char_input(c: char) -> Input {
    Input {
        key: Key::Char(c),
        ctrl: false,
        alt: false,
        shift: false,
    }
}

#[test]
fn value_round_trips_through_the_contract() {
    let mut editor = TextAreaEditor::new();
    editor.set_value("line one\nline two");
    assert_eq!(editor.value(), "line one\nline two");
    assert_eq!(editor.line_count(), 2);
}

#[test]
fn typed_characters_change_the_buffer() {
    let mut editor = TextAreaEditor::new();
    assert!(editor.handle_input(char_input('h')));
    assert!(editor.handle_input(char_input('i')));
    assert_eq!(editor.value(), "hi");
}

#[test]
fn cursor_motion_reports_no_content_change() {
    let mut editor = TextAreaEditor::new();
    editor.set_value("abc");
    let moved = editor.handle_input(Input {
        key: Key::Left,
        ctrl: false,
        alt: false,
        shift: false,
    });
    assert!(!moved);
    assert_eq!(editor.value(), "abc");
}

#[test]
fn insert_text_lands_at_the_cursor() {
    let mut editor = TextAreaEditor::new();
    editor.insert_text("print(");
    editor.insert_text("1)");
    assert_eq!(editor.value(), "print(1)");
}

#[test]
fn set_value_resets_the_cursor_to_origin() {
    let mut editor = TextAreaEditor::new();
    editor.set_value("first buffer");
    editor.set_value("second");
    assert_eq!(editor.cursor(), (0, 0));
}
