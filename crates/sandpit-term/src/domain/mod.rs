//! Core domain logic for the sandbox terminal interface.
//!
//! This module contains the models and services that drive the sandbox,
//! independent of rendering or of the concrete editor widget.

pub mod models;
pub mod services;
