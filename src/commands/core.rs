//! Core command definitions and types shared between CLI and REPL

use crate::matcher::Pass;

/// Suggestion parameters used by both CLI and REPL
#[derive(Debug, Clone)]
pub struct SuggestParams {
    /// The live query
    pub query: String,
    /// Limit number of suggestions
    pub limit: usize,
}

/// Correction parameters used by both CLI and REPL
#[derive(Debug, Clone)]
pub struct MatchParams {
    /// The finalized query
    pub query: String,
    /// Pass whose trigger rules and threshold apply, or `None` for the raw
    /// closest entry with no rules applied
    pub pass: Option<Pass>,
}

/// Result of command execution
#[derive(Debug)]
pub struct CommandResult {
    /// Output message to display
    pub output: String,
}

impl CommandResult {
    /// Create a successful result with output
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
        }
    }
}
