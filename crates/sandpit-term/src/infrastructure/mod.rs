//! Concrete implementations of the domain's external contracts.

pub mod editors;
