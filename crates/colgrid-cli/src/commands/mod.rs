//! CLI command implementations.

pub mod derive;
pub mod filters;
