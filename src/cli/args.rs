//! CLI argument definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fitlex")]
#[command(about = "Exercise name autocomplete and \"did you mean?\" suggestions")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch interactive REPL
    Repl {
        /// Corpus file (one name per line, or a JSON array)
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Exercise detail catalogue (JSON array)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Rank autocomplete suggestions for a partial query
    Suggest {
        /// Live query
        query: String,

        /// Corpus file (one name per line, or a JSON array)
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Limit suggestions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Find the closest exercise name for a finalized query
    Match {
        /// Finalized query
        query: String,

        /// Corpus file (one name per line, or a JSON array)
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Apply the lenient post-failure threshold instead of the primary one
        #[arg(short, long, conflicts_with = "raw")]
        fallback: bool,

        /// Report the closest entry without trigger rules or thresholds
        #[arg(long)]
        raw: bool,

        /// Show distances
        #[arg(short = 's', long)]
        show_distances: bool,
    },

    /// Submit a query: suggestion pass, lookup, and fallback pass
    Search {
        /// Finalized query
        query: String,

        /// Corpus file (one name per line, or a JSON array)
        #[arg(long)]
        corpus: Option<PathBuf>,

        /// Exercise detail catalogue (JSON array)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// List featured exercises, optionally filtered
    Featured {
        /// Filter text (matched as-is, without trimming)
        query: Option<String>,
    },

    /// Compute the edit distance between two names
    Distance {
        /// First name
        source: String,

        /// Second name
        target: String,

        /// Compare case-sensitively
        #[arg(long)]
        case_sensitive: bool,
    },

    /// Display corpus information
    Info {
        /// Corpus file (defaults to the built-in catalogue)
        #[arg(long)]
        corpus: Option<PathBuf>,
    },

    /// Show or update user settings
    Settings {
        /// Set default corpus path
        #[arg(long)]
        set_corpus: Option<PathBuf>,

        /// Set default catalogue path
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Set default suggestion limit
        #[arg(long)]
        set_limit: Option<usize>,

        /// Set the primary pass maximum distance
        #[arg(long)]
        set_max_distance: Option<usize>,

        /// Set the fallback pass maximum distance
        #[arg(long)]
        set_fallback_distance: Option<usize>,

        /// Set whether distances are shown by default
        #[arg(long)]
        set_show_distances: Option<bool>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}
