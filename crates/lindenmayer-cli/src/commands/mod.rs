//! CLI command implementations.

pub mod config;
pub mod expand;
pub mod system;
