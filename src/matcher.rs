//! "Did you mean?" corrections for finalized queries.
//!
//! [`closest_match`] is the raw scan: Levenshtein distance from the query
//! to every corpus entry, keeping the first minimum. [`correction`] wraps
//! it with the trigger rules and thresholds of a correction [`Pass`].

use serde::{Deserialize, Serialize};

use crate::config::{MatchConfig, Threshold};
use crate::distance::{fold, standard_distance};

/// The corpus entry nearest to a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosestMatch {
    /// Corpus entry, in its canonical casing
    pub term: String,
    /// Case-insensitive edit distance from the query
    pub distance: usize,
}

/// Which correction pass is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pass {
    /// Run on every submission that has no exact match.
    Primary,
    /// Run after the lookup collaborator failed and the primary pass
    /// surfaced nothing.
    Fallback,
}

impl Pass {
    /// The threshold this pass applies.
    pub fn threshold(self, config: &MatchConfig) -> Threshold {
        match self {
            Self::Primary => config.primary,
            Self::Fallback => config.fallback,
        }
    }
}

/// Find the corpus entry with the smallest case-insensitive edit distance
/// to `query`.
///
/// The whole corpus is scanned. On ties the earliest entry wins. Returns
/// `None` only for an empty corpus.
///
/// # Example
///
/// ```rust
/// use fitlex::matcher::closest_match;
///
/// let corpus = ["Bench Press", "Leg Press"];
/// let found = closest_match("Bencch Pres", &corpus).unwrap();
/// assert_eq!(found.term, "Bench Press");
/// assert_eq!(found.distance, 2);
/// ```
pub fn closest_match<S: AsRef<str>>(query: &str, corpus: &[S]) -> Option<ClosestMatch> {
    let query = fold(query);
    let mut best: Option<(usize, &str)> = None;

    for entry in corpus {
        let term = entry.as_ref();
        let distance = standard_distance(&query, &fold(term));
        match best {
            Some((best_distance, _)) if distance >= best_distance => {}
            _ => best = Some((distance, term)),
        }
        if distance == 0 {
            break;
        }
    }

    best.map(|(distance, term)| ClosestMatch {
        term: term.to_string(),
        distance,
    })
}

/// Whether a query is long enough for the fuzzy matcher at all.
///
/// Short queries rely on substring suggestions instead.
#[inline]
pub fn is_correctable(query: &str, config: &MatchConfig) -> bool {
    query.trim().chars().count() > config.min_query_len
}

/// Run one correction pass for a finalized query.
///
/// Returns the closest entry only when every rule for `pass` holds:
///
/// - the trimmed query is longer than `config.min_query_len`;
/// - for [`Pass::Primary`], no corpus entry equals the query ignoring case;
/// - the distance falls within the pass threshold.
pub fn correction<S: AsRef<str>>(
    query: &str,
    corpus: &[S],
    pass: Pass,
    config: &MatchConfig,
) -> Option<ClosestMatch> {
    if !is_correctable(query, config) {
        log::debug!("{:?} pass skipped: query {:?} too short", pass, query);
        return None;
    }

    if pass == Pass::Primary {
        let folded = fold(query);
        if corpus
            .iter()
            .any(|entry| entry.as_ref().to_lowercase() == folded)
        {
            log::debug!("Primary pass skipped: {:?} is an exact match", query);
            return None;
        }
    }

    let threshold = pass.threshold(config);
    let candidate = closest_match(query, corpus)?;
    if threshold.accepts(candidate.distance) {
        log::debug!(
            "{:?} pass suggests {:?} (distance {}) for {:?}",
            pass,
            candidate.term,
            candidate.distance,
            query
        );
        Some(candidate)
    } else {
        log::debug!(
            "{:?} pass suppressed {:?}: distance {} outside {}",
            pass,
            candidate.term,
            candidate.distance,
            threshold
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::EXERCISE_NAMES;
    use crate::distance::folded_distance;

    #[test]
    fn test_closest_match_distance_is_folded_distance() {
        let found = closest_match("Plank ", &["Plank"]).unwrap();
        assert_eq!(found.distance, 0);
        assert_eq!(found.distance, folded_distance("Plank ", "Plank"));

        let found = closest_match(" A", &["a"]).unwrap();
        assert_eq!(found.distance, folded_distance(" A", "a"));
    }

    #[test]
    fn test_closest_match_empty_corpus() {
        let corpus: [&str; 0] = [];
        assert_eq!(closest_match("bench press", &corpus), None);
    }

    #[test]
    fn test_closest_match_first_entry_wins_ties() {
        let corpus = ["Dips", "Lips", "Hips"];
        let found = closest_match("zips", &corpus).unwrap();
        assert_eq!(found.term, "Dips");
        assert_eq!(found.distance, 1);
    }

    #[test]
    fn test_closest_match_keeps_canonical_casing() {
        let corpus = ["Romanian Deadlift", "Deadlift"];
        let found = closest_match("DEADLIFT", &corpus).unwrap();
        assert_eq!(found.term, "Deadlift");
        assert_eq!(found.distance, 0);
    }

    #[test]
    fn test_closest_match_empty_entry() {
        let corpus = ["", "Plank"];
        let found = closest_match("abc", &corpus).unwrap();
        assert_eq!(found.term, "");
        assert_eq!(found.distance, 3);
    }

    #[test]
    fn test_primary_pass_suggests_close_term() {
        let config = MatchConfig::default();
        let found = correction("Bencch Pres", EXERCISE_NAMES, Pass::Primary, &config).unwrap();
        assert_eq!(found.term, "Bench Press");
        assert_eq!(found.distance, 2);
    }

    #[test]
    fn test_primary_pass_skips_short_queries() {
        let config = MatchConfig::default();
        let corpus = ["Dips"];
        assert_eq!(correction("dip", &corpus, Pass::Primary, &config), None);
        assert_eq!(correction("  dip  ", &corpus, Pass::Primary, &config), None);
        assert!(correction("dipz", &corpus, Pass::Primary, &config).is_some());
    }

    #[test]
    fn test_primary_pass_skips_exact_match() {
        let config = MatchConfig::default();
        assert_eq!(
            correction("bench press", EXERCISE_NAMES, Pass::Primary, &config),
            None
        );
    }

    #[test]
    fn test_primary_pass_suppresses_distant_terms() {
        let config = MatchConfig::default();
        assert_eq!(
            correction("xyzzyplugh", EXERCISE_NAMES, Pass::Primary, &config),
            None
        );
        let raw = closest_match("xyzzyplugh", EXERCISE_NAMES).unwrap();
        assert!(raw.distance > 3);
    }

    #[test]
    fn test_fallback_pass_is_more_lenient() {
        let config = MatchConfig::default();
        let corpus = ["Deadlift"];
        // four edits away
        let query = "dxxdlixx";
        assert_eq!(standard_distance(query, "deadlift"), 4);
        assert_eq!(correction(query, &corpus, Pass::Primary, &config), None);
        let found = correction(query, &corpus, Pass::Fallback, &config).unwrap();
        assert_eq!(found.distance, 4);
    }

    #[test]
    fn test_fallback_pass_offers_canonical_spelling_of_exact_match() {
        let config = MatchConfig::default();
        let found = correction("bench press", EXERCISE_NAMES, Pass::Fallback, &config).unwrap();
        assert_eq!(found.term, "Bench Press");
        assert_eq!(found.distance, 0);
    }

    #[test]
    fn test_custom_thresholds() {
        let config = MatchConfig {
            min_query_len: 1,
            primary: Threshold {
                min_distance: 1,
                max_distance: 1,
            },
            ..MatchConfig::default()
        };
        let corpus = ["Plank"];
        assert!(correction("plnk", &corpus, Pass::Primary, &config).is_some());
        assert!(correction("pnk", &corpus, Pass::Primary, &config).is_none());
    }
}
