//! CLI interface for fitlex
//!
//! Provides command-line utilities for ranking, correction and search.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::{Cli, Commands};
pub use paths::{config_dir, PersistentConfig};
