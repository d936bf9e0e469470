//! The output workspace: the three surfaces below the editor.
//!
//! `Output` holds the append-only execution log, `Problems` mirrors the
//! diagnostics the editor's own language services report, and `Terminal` is
//! a placeholder surface. Clearing affects the execution log alone —
//! problems track the live buffer and are replaced wholesale, never cleared
//! by the user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[cfg(test)]
#[path = "workspace_test.rs"]
mod tests;

/// Cap on rendered diagnostics; everything past it collapses into a single
/// "and N more" notice so a pathological buffer cannot flood the panel.
pub const MAX_VISIBLE_DIAGNOSTICS: usize = 50;

pub const EMPTY_OUTPUT_PLACEHOLDER: &str =
    "Run your code (F5) to see the output here.";
pub const NO_PROBLEMS_PLACEHOLDER: &str = "No problems detected";
pub const TERMINAL_PLACEHOLDER: &str =
    "A real terminal is not part of the sandbox yet.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Display)]
pub enum Surface {
    #[default]
    Output,
    Problems,
    Terminal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A diagnostic surfaced by the editor widget's language services. The
/// workspace only renders and counts these; it never produces them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub line: u32,
    pub column: u32,
    pub message: String,
    pub severity: Severity,
}

/// One completed run. Immutable once appended; the timestamp is metadata
/// for the log entry header and never part of the executor's own lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionRecord {
    pub timestamp: DateTime<Utc>,
    pub language: String,
    pub lines: Vec<String>,
}

impl ExecutionRecord {
    pub fn new(language: &str, lines: Vec<String>) -> ExecutionRecord {
        ExecutionRecord {
            timestamp: Utc::now(),
            language: language.to_string(),
            lines,
        }
    }
}

#[derive(Default)]
pub struct OutputWorkspace {
    records: Vec<ExecutionRecord>,
    diagnostics: Vec<Diagnostic>,
    selected: Surface,
}

impl OutputWorkspace {
    pub fn new() -> OutputWorkspace {
        OutputWorkspace::default()
    }

    pub fn select(&mut self, surface: Surface) {
        self.selected = surface;
    }

    pub fn selected(&self) -> Surface {
        self.selected
    }

    /// Appends one run to the log. The log is append-only: entries are never
    /// reordered, merged, or dropped, even under rapid repeated runs.
    pub fn append(&mut self, record: ExecutionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ExecutionRecord] {
        &self.records
    }

    /// Empties the execution log and nothing else. Diagnostics mirror the
    /// live buffer and are untouched.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn set_diagnostics(&mut self, diagnostics: Vec<Diagnostic>) {
        self.diagnostics = diagnostics;
    }

    pub fn diagnostic_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn visible_diagnostics(&self) -> &[Diagnostic] {
        let end = self.diagnostics.len().min(MAX_VISIBLE_DIAGNOSTICS);
        &self.diagnostics[..end]
    }

    pub fn overflow_notice(&self) -> Option<String> {
        let hidden = self
            .diagnostics
            .len()
            .saturating_sub(MAX_VISIBLE_DIAGNOSTICS);
        if hidden > 0 {
            Some(format!("… and {hidden} more problems"))
        } else {
            None
        }
    }
}
