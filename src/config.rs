//! Tunable thresholds for suggestions and "did you mean?" corrections.

use serde::{Deserialize, Serialize};

use crate::suggest::SUGGESTION_LIMIT;

/// Inclusive range of edit distances a correction pass will surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Threshold {
    /// Smallest distance surfaced
    pub min_distance: usize,
    /// Largest distance surfaced
    pub max_distance: usize,
}

impl Threshold {
    /// Pass run on every submission. Distance 0 is an exact match, which
    /// never reaches this pass.
    pub const PRIMARY: Self = Self {
        min_distance: 1,
        max_distance: 3,
    };

    /// Last-resort pass run after the lookup collaborator fails.
    pub const FALLBACK: Self = Self {
        min_distance: 0,
        max_distance: 4,
    };

    /// Whether `distance` falls inside this threshold.
    #[inline]
    pub fn accepts(&self, distance: usize) -> bool {
        (self.min_distance..=self.max_distance).contains(&distance)
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.min_distance, self.max_distance)
    }
}

/// Matching configuration shared by the ranker and the fuzzy matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Maximum number of autocomplete suggestions
    pub suggestion_limit: usize,
    /// Queries must be strictly longer than this (in characters, after
    /// trimming) before the fuzzy matcher runs
    pub min_query_len: usize,
    /// Threshold for the pass run on every submission
    pub primary: Threshold,
    /// Threshold for the pass run after a failed lookup
    pub fallback: Threshold,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: SUGGESTION_LIMIT,
            min_query_len: 3,
            primary: Threshold::PRIMARY,
            fallback: Threshold::FALLBACK,
        }
    }
}
