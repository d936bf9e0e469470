//! Best-effort content-type classification for pasted or typed source.
//!
//! This is a router, not a parser. Learners paste fragments with no file
//! extension attached, so the sandbox guesses from superficial cues which
//! executor should handle the buffer. A wrong guess sends the source to the
//! wrong executor, which is a quality issue rather than a failure; the
//! classifier itself never errors.

use strum_macros::Display;

#[cfg(test)]
#[path = "detect_test.rs"]
mod tests;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ContentType {
    Html,
    Css,
    Javascript,
}

impl ContentType {
    /// Classifies a source buffer. Total: always returns one of the three
    /// variants, defaulting to `Javascript` for anything unrecognized.
    ///
    /// Priority order: HTML markers, then CSS rule syntax, then JavaScript.
    pub fn detect(source: &str) -> ContentType {
        let trimmed = source.trim();

        if trimmed.contains("<html")
            || trimmed.contains("<!DOCTYPE")
            || (trimmed.contains('<') && trimmed.contains('>'))
        {
            return ContentType::Html;
        }

        if trimmed.contains('{') && trimmed.contains('}') && trimmed.contains(':') {
            return ContentType::Css;
        }

        ContentType::Javascript
    }

    /// Honours a declared language before falling back to detection.
    pub fn resolve(declared: &str, source: &str) -> ContentType {
        match declared {
            "html" => ContentType::Html,
            "css" => ContentType::Css,
            "javascript" | "typescript" => ContentType::Javascript,
            _ => ContentType::detect(source),
        }
    }
}
