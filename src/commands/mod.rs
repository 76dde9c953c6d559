//! Shared command logic for CLI and REPL
//!
//! Both front ends parse their own input, then hand the work to the
//! handlers here so that ranking, correction and search output read the
//! same everywhere.

pub mod core;
pub mod handlers;

pub use core::{CommandResult, MatchParams, SuggestParams};
