//! # fitlex
//!
//! Fuzzy exercise-name matching for an exercise dictionary search box.
//!
//! Two pure operations over a fixed catalogue of exercise names:
//!
//! - **Ranking** ([`suggest::rank`]): autocomplete suggestions for a live
//!   query, prefix hits first, then shorter names, at most ten.
//! - **Correction** ([`matcher::closest_match`]): the nearest catalogue
//!   entry by Levenshtein distance, surfaced as "Did you mean?" when it is
//!   close enough.
//!
//! [`search::SearchSession`] wires both to an external lookup
//! collaborator, running a looser fallback pass when the lookup fails.
//!
//! ## Example
//!
//! ```rust
//! use fitlex::prelude::*;
//!
//! let corpus = Corpus::builtin();
//! let suggestions = corpus.rank("nordic", SUGGESTION_LIMIT);
//! assert!(suggestions.iter().all(|s| s.to_lowercase().contains("nordic")));
//!
//! let config = MatchConfig::default();
//! let fix = correction("Bencch Pres", corpus.as_slice(), Pass::Primary, &config).unwrap();
//! assert_eq!(fix.term, "Bench Press");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod commands;
pub mod config;
pub mod corpus;
pub mod distance;
pub mod error;
pub mod matcher;
pub mod search;
pub mod suggest;

/// Interactive REPL for exploring the exercise catalogue
#[cfg(feature = "cli")]
pub mod repl;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::config::{MatchConfig, Threshold};
    pub use crate::corpus::{Corpus, EXERCISE_NAMES, FEATURED_EXERCISES};
    pub use crate::distance::{folded_distance, standard_distance};
    pub use crate::error::{CorpusError, LookupError};
    pub use crate::matcher::{closest_match, correction, ClosestMatch, Pass};
    pub use crate::search::{
        CatalogLookup, ExerciseDetail, ExerciseLookup, SearchOutcome, SearchSession,
    };
    pub use crate::suggest::{filter_featured, rank, SUGGESTION_LIMIT};
}
