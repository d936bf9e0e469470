//! Line-oriented Python simulation.
//!
//! The sandbox cannot run real Python, so this executor fakes it well enough
//! for a beginner to follow along: every source line is echoed behind a REPL
//! prompt and answered with a plausible reaction. It is a single forward
//! pass driven by a small state machine, not an interpreter. There is no
//! expression evaluation, no branching, and no randomness; identical source
//! always produces an identical transcript.
//!
//! The state machine has three modes: top level, inside a function body, and
//! inside a class body. Block bodies are echoed behind a continuation prompt
//! and otherwise swallowed until indentation returns to the defining level.

use super::{CodeExecutor, ExecutionOutput};
use crate::errors::SandboxError;

#[cfg(test)]
#[path = "python_test.rs"]
mod tests;

pub const BANNER: &str = "Python 3.11.4 (sandpit learning simulator)";
pub const PLACEHOLDER_INPUT: &str = "student";
pub const WAITING_NOTICE: &str = "[waiting for user input...]";
pub const EXECUTION_COMPLETE: &str = "=== Execution complete ===";
pub const DISCLAIMER: &str = "💡 This was a simulated run. For real Python, install it from python.org or try a notebook like Jupyter or Google Colab.";

pub struct PythonSimulator;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Mode {
    #[default]
    TopLevel,
    InFunctionBody {
        indent: usize,
    },
    InClassBody {
        indent: usize,
    },
}

/// Per-run scratch state. Created fresh for every run and discarded after
/// the transcript is produced; nothing survives between runs.
#[derive(Default)]
struct SimulatorState {
    variables: Vec<(String, String)>,
    functions: Vec<String>,
    classes: Vec<String>,
    mode: Mode,
}

impl SimulatorState {
    fn block_indent(&self) -> Option<usize> {
        match self.mode {
            Mode::TopLevel => None,
            Mode::InFunctionBody { indent } | Mode::InClassBody { indent } => Some(indent),
        }
    }

    fn assign(&mut self, name: &str, value: &str) {
        if let Some(entry) = self.variables.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value.to_string();
        } else {
            self.variables.push((name.to_string(), value.to_string()));
        }
    }

    fn lookup(&self, name: &str) -> Option<&str> {
        self.variables
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl CodeExecutor for PythonSimulator {
    fn run(&self, source: &str) -> Result<ExecutionOutput, SandboxError> {
        let mut state = SimulatorState::default();
        let mut lines = Vec::with_capacity(source.lines().count() * 2 + 8);

        lines.push(BANNER.to_string());
        lines.push(String::new());

        for raw in source.lines() {
            let trimmed = raw.trim();
            let indent = leading_whitespace(raw);

            // Leaving a def/class body happens before this line is classified,
            // so the line that dedents is interpreted normally.
            if let Some(block_indent) = state.block_indent() {
                if !trimmed.is_empty() && indent <= block_indent {
                    state.mode = Mode::TopLevel;
                }
            }

            let prompt = if state.block_indent().is_some() {
                "... "
            } else {
                ">>> "
            };
            lines.push(format!("{prompt}{raw}"));

            step(trimmed, indent, &mut state, &mut lines);
        }

        summarize(&state, &mut lines);
        Ok(ExecutionOutput { lines })
    }
}

fn step(trimmed: &str, indent: usize, state: &mut SimulatorState, lines: &mut Vec<String>) {
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return;
    }

    // Function and class bodies are echoed but not interpreted.
    if state.block_indent().is_some() {
        return;
    }

    if let Some(rest) = trimmed.strip_prefix("import ") {
        let module = rest.split_whitespace().next().unwrap_or(rest);
        lines.push(format!("📦 Imported module '{module}'"));
        return;
    }
    if trimmed.starts_with("from ") && trimmed.contains(" import ") {
        let module = trimmed["from ".len()..]
            .split_whitespace()
            .next()
            .unwrap_or_default();
        lines.push(format!("📦 Imported from '{module}'"));
        return;
    }

    if let Some(rest) = trimmed.strip_prefix("def ") {
        let name = rest
            .split(['(', ':'])
            .next()
            .unwrap_or(rest)
            .trim()
            .to_string();
        if !state.functions.contains(&name) {
            state.functions.push(name.clone());
        }
        lines.push(format!("✓ Function '{name}' defined"));
        state.mode = Mode::InFunctionBody { indent };
        return;
    }

    if let Some(rest) = trimmed.strip_prefix("class ") {
        let name = rest
            .split(['(', ':'])
            .next()
            .unwrap_or(rest)
            .trim()
            .to_string();
        if !state.classes.contains(&name) {
            state.classes.push(name.clone());
        }
        lines.push(format!("✓ Class '{name}' defined"));
        state.mode = Mode::InClassBody { indent };
        return;
    }

    if trimmed.contains("input(") {
        react_to_input(trimmed, state, lines);
        return;
    }

    if trimmed.contains("print(") {
        for argument in call_arguments(trimmed, "print") {
            lines.push(render_print_argument(&argument, state));
        }
        return;
    }

    if let Some((name, value)) = split_assignment(trimmed) {
        let rendered = render_assigned_value(value, state);
        lines.push(format!("# {name} = {rendered}"));
        state.assign(name, &rendered);
        return;
    }

    match first_word(trimmed) {
        "if" | "elif" | "else" => lines.push("🔀 Condition evaluated".to_string()),
        "for" | "while" => lines.push("🔁 Loop acknowledged".to_string()),
        _ => lines.push("✓ Processed".to_string()),
    }
}

/// Simulated `input(...)`: echo the prompt, pretend to wait, then feed a
/// fixed placeholder so runs stay reproducible.
fn react_to_input(trimmed: &str, state: &mut SimulatorState, lines: &mut Vec<String>) {
    let arguments = call_arguments(trimmed, "input");
    if let Some(prompt) = arguments.first() {
        let prompt = unquote(prompt);
        if !prompt.is_empty() {
            lines.push(prompt.to_string());
        }
    }
    lines.push(WAITING_NOTICE.to_string());
    lines.push(format!("> {PLACEHOLDER_INPUT}"));

    if let Some((name, _)) = split_assignment(trimmed) {
        state.assign(name, PLACEHOLDER_INPUT);
    }
}

fn summarize(state: &SimulatorState, lines: &mut Vec<String>) {
    lines.push(String::new());
    lines.push(EXECUTION_COMPLETE.to_string());

    if !state.functions.is_empty() {
        lines.push(format!(
            "Functions defined: {}",
            state.functions.join(", ")
        ));
    }
    if !state.classes.is_empty() {
        lines.push(format!("Classes defined: {}", state.classes.join(", ")));
    }
    if !state.variables.is_empty() {
        lines.push("Variables:".to_string());
        for (name, value) in &state.variables {
            lines.push(format!("  {name} = {value}"));
        }
    }

    lines.push(String::new());
    lines.push(DISCLAIMER.to_string());
}

/// Textual value for one `print(...)` argument, in rule order: quoted string
/// literals are unquoted, f-strings lose their prefix but keep their braces,
/// numbers pass through, known variables resolve to their last value, and
/// anything else is emitted as raw expression text.
fn render_print_argument(argument: &str, state: &SimulatorState) -> String {
    let argument = argument.trim();

    if let Some(inner) = quoted_inner(argument, '"').or_else(|| quoted_inner(argument, '\'')) {
        return inner.to_string();
    }
    if let Some(rest) = argument
        .strip_prefix('f')
        .or_else(|| argument.strip_prefix('F'))
    {
        if let Some(inner) = quoted_inner(rest, '"').or_else(|| quoted_inner(rest, '\'')) {
            return inner.to_string();
        }
    }
    if argument.parse::<f64>().is_ok() {
        return argument.to_string();
    }
    if let Some(value) = state.lookup(argument) {
        return value.to_string();
    }
    argument.to_string()
}

fn render_assigned_value(value: &str, state: &SimulatorState) -> String {
    let value = value.trim();
    if let Some(inner) = quoted_inner(value, '"').or_else(|| quoted_inner(value, '\'')) {
        return inner.to_string();
    }
    if value.parse::<f64>().is_ok() {
        return value.to_string();
    }
    if let Some(existing) = state.lookup(value) {
        return existing.to_string();
    }
    value.to_string()
}

/// `name = value` with plain `=`, skipping comparisons and anything whose
/// left-hand side is not a bare identifier (augmented assignment, keyword
/// arguments inside calls, chained expressions).
fn split_assignment(trimmed: &str) -> Option<(&str, &str)> {
    if trimmed.contains("==") {
        return None;
    }
    let index = trimmed.find('=')?;
    let name = trimmed[..index].trim();
    let value = trimmed[index + 1..].trim();
    if !is_identifier(name) {
        return None;
    }
    Some((name, value))
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Argument text of every `function(...)` call on the line, matched by
/// parenthesis depth only. Quotes are not understood; this is a textual
/// extraction, matching how the rest of the simulator reads source.
fn call_arguments(line: &str, function: &str) -> Vec<String> {
    let needle = format!("{function}(");
    let mut arguments = Vec::new();
    let mut from = 0;

    while let Some(found) = line[from..].find(&needle) {
        let start = from + found + needle.len();
        let mut depth = 1usize;
        let mut end = None;
        for (offset, ch) in line[start..].char_indices() {
            match ch {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        end = Some(start + offset);
                        break;
                    }
                }
                _ => {}
            }
        }
        match end {
            Some(end) => {
                arguments.push(line[start..end].to_string());
                from = end + 1;
            }
            None => {
                // Unterminated call: take the rest of the line.
                arguments.push(line[start..].to_string());
                break;
            }
        }
    }

    arguments
}

fn quoted_inner(text: &str, quote: char) -> Option<&str> {
    let text = text.trim();
    if text.len() >= 2 && text.starts_with(quote) && text.ends_with(quote) {
        Some(&text[1..text.len() - 1])
    } else {
        None
    }
}

fn unquote(text: &str) -> &str {
    quoted_inner(text, '"')
        .or_else(|| quoted_inner(text, '\''))
        .unwrap_or_else(|| text.trim())
}

fn first_word(trimmed: &str) -> &str {
    trimmed
        .split([' ', '(', ':'])
        .next()
        .unwrap_or(trimmed)
}

/// Leading whitespace width in characters. Tabs are counted as one column
/// each, not expanded; mixed indentation is the author's problem.
fn leading_whitespace(raw: &str) -> usize {
    raw.chars().take_while(|c| c.is_whitespace()).count()
}
