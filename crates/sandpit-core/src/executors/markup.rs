//! Structural summaries for HTML/CSS buffers.
//!
//! The sandbox never renders markup itself; rendering belongs to the browser
//! preview. What learners get on "Run" is a quick structural read of what
//! they wrote: which elements appear, how many style rules there are, and
//! the output of any embedded scripts, which are extracted textually and
//! delegated to the JavaScript executor.

use once_cell::sync::Lazy;
use regex::Regex;

use super::javascript::JavaScriptExecutor;
use super::{CodeExecutor, ExecutionOutput};
use crate::errors::SandboxError;

#[cfg(test)]
#[path = "markup_test.rs"]
mod tests;

pub const PREVIEW_HINT: &str = "✓ Press Ctrl+B to open a live preview in your browser.";

static ELEMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(\w+)[^>]*>").expect("element pattern"));
static SCRIPT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<script[^>]*>(.*?)</script>").expect("script pattern"));
static STYLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)<style[^>]*>(.*?)</style>").expect("style pattern"));
static RULE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^{}]+\{[^}]*\}").expect("rule pattern"));
static SELECTOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^{}]+\{").expect("selector pattern"));

pub struct MarkupExecutor;

impl CodeExecutor for MarkupExecutor {
    fn run(&self, source: &str) -> Result<ExecutionOutput, SandboxError> {
        let has_tags = source.contains('<') && source.contains('>');

        if has_tags {
            return facet_summary(source);
        }

        if source.contains('{') && source.contains('}') && source.contains(':') {
            return Ok(stylesheet_analysis(source));
        }

        Ok(ExecutionOutput {
            lines: vec![
                "📄 No markup structure detected in this buffer.".to_string(),
                String::new(),
                PREVIEW_HINT.to_string(),
            ],
        })
    }
}

/// Mixed-content path: independent facet detection, one summary per facet.
fn facet_summary(source: &str) -> Result<ExecutionOutput, SandboxError> {
    let has_css = source.contains("<style") || (source.contains('{') && source.contains('}'));
    let has_js = source.contains("<script")
        || source.contains("function")
        || source.contains("console.log");

    let mut lines = vec!["🌐 HTML Structure detected".to_string()];
    let elements = unique_elements(source);
    if !elements.is_empty() {
        lines.push(format!("   Elements: {}", elements.join(", ")));
    }

    if has_css {
        lines.push(String::new());
        lines.push("🎨 CSS Styles detected".to_string());
        let embedded_rules: usize = STYLE_RE
            .captures_iter(source)
            .map(|cap| RULE_RE.find_iter(&cap[1]).count())
            .sum();
        if embedded_rules > 0 {
            lines.push(format!("   {embedded_rules} CSS rules found"));
        }
    }

    if has_js {
        lines.push(String::new());
        lines.push("⚡ JavaScript detected - attempting execution...".to_string());
        let script = extract_scripts(source);
        if !script.trim().is_empty() {
            match JavaScriptExecutor::evaluate(&script)? {
                Ok(logs) if logs.is_empty() => {
                    lines.push("   JavaScript executed (no console output)".to_string());
                }
                Ok(logs) => {
                    lines.push(String::new());
                    lines.push("📄 JavaScript Output:".to_string());
                    lines.extend(logs.into_iter().map(|log| format!("   {log}")));
                }
                Err(message) => {
                    lines.push(format!("   JavaScript Error: {message}"));
                }
            }
        }
    }

    lines.push(String::new());
    lines.push(PREVIEW_HINT.to_string());
    Ok(ExecutionOutput { lines })
}

/// Standalone stylesheet path: rule and selector counts over the whole buffer.
fn stylesheet_analysis(source: &str) -> ExecutionOutput {
    let rule_count = RULE_RE.find_iter(source).count();
    let selector_count = SELECTOR_RE.find_iter(source).count();

    ExecutionOutput {
        lines: vec![
            "🎨 CSS Analysis:".to_string(),
            String::new(),
            format!("{rule_count} CSS rules found"),
            format!("{selector_count} selectors detected"),
            String::new(),
            "✓ CSS parsed successfully. Press Ctrl+B to preview these styles in your browser."
                .to_string(),
        ],
    }
}

/// Opening-tag names in first-seen order, deduplicated.
fn unique_elements(source: &str) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for cap in ELEMENT_RE.captures_iter(source) {
        let name = cap[1].to_lowercase();
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}

/// All `<script>` bodies joined together. Bracket-delimited extraction, not
/// an HTML parse: a script body containing the literal text `</script>`
/// will be cut short.
fn extract_scripts(source: &str) -> String {
    SCRIPT_RE
        .captures_iter(source)
        .map(|cap| cap[1].to_string())
        .collect::<Vec<String>>()
        .join("\n\n")
}
