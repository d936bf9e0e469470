use std::path::Path;

use uuid::Uuid;

#[cfg(test)]
#[path = "tab_test.rs"]
mod tests;

/// An open buffer. Tabs are owned by the session; at most one is active at
/// a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorTab {
    pub id: String,
    pub name: String,
    pub language: String,
    pub content: String,
    pub dirty: bool,
    pub active: bool,
}

impl EditorTab {
    pub fn new(name: &str, language: &str, content: &str) -> EditorTab {
        EditorTab {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            language: language.to_string(),
            content: content.to_string(),
            dirty: false,
            active: false,
        }
    }

    pub fn from_file(path: &Path, content: String) -> EditorTab {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let language = language_for_path(path);
        let mut tab = EditorTab::new(&name, language, &content);
        tab.content = content;
        tab
    }
}

/// Language guess from the file extension; used only to pick an executor,
/// so unknown extensions land on the verbatim echo path.
pub fn language_for_path(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
    {
        "py" => "python",
        "js" | "mjs" | "cjs" => "javascript",
        "ts" | "tsx" => "typescript",
        "html" | "htm" => "html",
        "css" => "css",
        _ => "plaintext",
    }
}
