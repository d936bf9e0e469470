//! Execution engine for the sandpit learning sandbox.
//!
//! This crate provides everything behind the "Run" button of the sandbox:
//! content-type detection for pasted source, per-language executors that turn
//! source text into terminal-style output lines, a browser preview launcher,
//! the append-only output workspace model, and the layout controller that
//! governs how the editor and output panel share vertical space.
//!
//! It is deliberately free of rendering concerns so the terminal front-end
//! (or any other host) can drive it through plain data types.

pub mod detect;
pub mod errors;
pub mod executors;
pub mod layout;
pub mod preview;
pub mod workspace;

pub use detect::ContentType;
pub use errors::SandboxError;
pub use executors::{CodeExecutor, ExecutionOutput, ExecutorRegistry};
pub use layout::{FullscreenHost, FullscreenState, LayoutController};
pub use preview::PreviewLauncher;
pub use workspace::{Diagnostic, ExecutionRecord, OutputWorkspace, Severity, Surface};
