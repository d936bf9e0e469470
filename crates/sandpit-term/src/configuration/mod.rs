//! Process-wide configuration: defaults, config.toml, CLI overrides.

pub mod config;

pub use config::{Config, ConfigKey};
