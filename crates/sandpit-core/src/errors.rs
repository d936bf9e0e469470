//! Error types for the sandbox engine.
//!
//! Most failure modes in the sandbox are deliberately rendered as output
//! lines rather than errors (a thrown script, a blocked preview window), so
//! this taxonomy only covers the genuinely exceptional paths: the embedded
//! engine refusing to initialize, and I/O around the preview document.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SandboxError {
    #[error("JavaScript engine error: {0}")]
    Engine(String),
    #[error("Preview document error: {0}")]
    Preview(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
