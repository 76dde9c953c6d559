//! Interactive REPL for fitlex
//!
//! A Read-Eval-Print Loop for trying suggestions, corrections and catalogue
//! searches against a corpus interactively.

pub mod command;
pub mod helper;
pub mod highlighter;
pub mod state;

pub use command::{Command, CommandResult};
pub use helper::FitlexHelper;
pub use state::ReplState;

/// REPL configuration
#[derive(Debug, Clone)]
pub struct ReplConfig {
    /// Prompt string
    pub prompt: String,
    /// History file path
    pub history_file: Option<std::path::PathBuf>,
    /// Maximum history entries
    pub max_history: usize,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: "fitlex> ".to_string(),
            history_file: Some(
                dirs::home_dir()
                    .unwrap_or_else(|| std::path::PathBuf::from("."))
                    .join(".fitlex_history"),
            ),
            max_history: 1000,
        }
    }
}
