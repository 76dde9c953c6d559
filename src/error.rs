//! Error types for corpus loading and exercise lookup.
//!
//! Ranking and fuzzy matching never fail: every input yields an empty or
//! `None` result. Errors only arise at the edges, when a corpus is read
//! from disk or when the external lookup collaborator cannot resolve a
//! name.

use thiserror::Error;

/// Errors that can occur while loading an exercise corpus or catalogue.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// I/O error while reading the source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The source was not a valid JSON document of the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors reported by an [`ExerciseLookup`](crate::search::ExerciseLookup)
/// implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The collaborator does not know the requested exercise.
    #[error("Exercise not found: {0}")]
    NotFound(String),

    /// The collaborator could not be reached or refused the request.
    #[error("Lookup service unavailable: {0}")]
    Unavailable(String),

    /// The collaborator answered, but the response did not have the
    /// expected shape.
    #[error("Malformed lookup response: {0}")]
    Malformed(String),
}

/// A specialized `Result` type for corpus loading.
pub type Result<T> = std::result::Result<T, CorpusError>;
