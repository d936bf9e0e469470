//! Per-language executors for the sandbox "Run" action.
//!
//! Each executor maps source text to terminal-style output lines. Runs are
//! short and synchronous; any pacing (the "running…" indicator) belongs to
//! the caller. Executors convert failures of the *executed* code into output
//! lines rather than errors, so a broken snippet never breaks the sandbox.

use crate::detect::ContentType;
use crate::errors::SandboxError;

pub mod javascript;
pub mod markup;
pub mod python;

pub use javascript::JavaScriptExecutor;
pub use markup::MarkupExecutor;
pub use python::PythonSimulator;

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;

/// Output of a single run: ordered lines destined for the output surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionOutput {
    pub lines: Vec<String>,
}

impl ExecutionOutput {
    pub fn from_line(line: impl Into<String>) -> ExecutionOutput {
        ExecutionOutput {
            lines: vec![line.into()],
        }
    }
}

pub trait CodeExecutor: Send + Sync {
    fn run(&self, source: &str) -> Result<ExecutionOutput, SandboxError>;
}

/// Routes a buffer to the executor for its declared language, falling back
/// to content detection for languages the sandbox has no executor for.
pub struct ExecutorRegistry {
    javascript: JavaScriptExecutor,
    markup: MarkupExecutor,
    python: PythonSimulator,
}

impl Default for ExecutorRegistry {
    fn default() -> ExecutorRegistry {
        ExecutorRegistry {
            javascript: JavaScriptExecutor,
            markup: MarkupExecutor,
            python: PythonSimulator,
        }
    }
}

impl ExecutorRegistry {
    pub fn new() -> ExecutorRegistry {
        ExecutorRegistry::default()
    }

    pub fn execute(&self, language: &str, source: &str) -> Result<ExecutionOutput, SandboxError> {
        match language {
            "javascript" | "typescript" => self.javascript.run(source),
            "html" | "css" => self.markup.run(source),
            "python" => self.python.run(source),
            other => match ContentType::detect(source) {
                // Markup pasted into a tab with the wrong language still gets
                // the structural summary; everything else is echoed verbatim.
                ContentType::Html | ContentType::Css => self.markup.run(source),
                ContentType::Javascript => Ok(no_executor_echo(other, source)),
            },
        }
    }
}

fn no_executor_echo(language: &str, source: &str) -> ExecutionOutput {
    let mut lines = vec![
        format!("📝 Code preview for {}:", language.to_uppercase()),
        String::new(),
    ];
    lines.extend(source.lines().map(str::to_string));
    lines.push(String::new());
    lines.push(format!(
        "📝 Execution support for {language} can be added with an appropriate backend service."
    ));
    ExecutionOutput { lines }
}
