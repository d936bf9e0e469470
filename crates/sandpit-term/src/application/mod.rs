//! Terminal lifecycle and rendering for the sandbox.

pub mod ui;
