use std::path::Path;

use super::*;

#[test]
fn tabs_start_clean_and_inactive() {
    let tab = EditorTab::new("scratch.py", "python", "print(1)");
    assert!(!tab.dirty);
    assert!(!tab.active);
    assert_eq!(tab.content, "print(1)");
}

#[test]
fn tab_ids_are_unique() {
    let a = EditorTab::new("a", "python", "");
    let b = EditorTab::new("a", "python", "");
    assert_ne!(a.id, b.id);
}

#[test]
fn file_tabs_take_name_and_language_from_the_path() {
    let tab = EditorTab::from_file(Path::new("lessons/intro.py"), "x = 1".to_string());
    assert_eq!(tab.name, "intro.py");
    assert_eq!(tab.language, "python");
    assert_eq!(tab.content, "x = 1");
}

#[test]
fn unknown_extensions_become_plaintext() {
    assert_eq!(language_for_path(Path::new("notes.rb")), "plaintext");
    assert_eq!(language_for_path(Path::new("no_extension")), "plaintext");
    assert_eq!(language_for_path(Path::new("page.html")), "html");
    assert_eq!(language_for_path(Path::new("app.tsx")), "typescript");
}
