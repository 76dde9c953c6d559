//! Exercise dictionary search flow.
//!
//! Ties the ranker, the fuzzy matcher and the lookup collaborator together
//! the way the dictionary screen drives them:
//!
//! 1. every keystroke: [`SearchSession::suggestions`];
//! 2. on submit: exact-match check, then a primary correction pass for
//!    long enough queries;
//! 3. the lookup collaborator resolves the query;
//! 4. if the lookup fails and nothing was suggested yet, a fallback pass
//!    with a looser threshold runs.
//!
//! # Example
//!
//! ```rust
//! use fitlex::corpus::Corpus;
//! use fitlex::search::{CatalogLookup, SearchSession};
//!
//! let session = SearchSession::new(Corpus::builtin());
//! let outcome = session.submit("Bencch Pres", &CatalogLookup::new()).unwrap();
//!
//! assert!(outcome.detail.is_none());
//! assert_eq!(outcome.did_you_mean.unwrap().term, "Bench Press");
//! ```

pub mod lookup;

pub use lookup::{CatalogLookup, ExerciseDetail, ExerciseLookup};

use serde::{Serialize, Serializer};

use crate::config::MatchConfig;
use crate::corpus::Corpus;
use crate::error::LookupError;
use crate::matcher::{self, ClosestMatch, Pass};
use crate::suggest;

/// Message shown when neither the lookup nor a correction produced
/// anything useful.
pub const NOT_FOUND_MESSAGE: &str = "Exercise not found. Try a different name.";

/// Message shown when the featured filter leaves nothing.
pub const NO_FEATURED_MESSAGE: &str = "No local matches found.";

/// Result of one query submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// The trimmed query, original casing
    pub query: String,
    /// Details returned by the lookup collaborator
    pub detail: Option<ExerciseDetail>,
    /// "Did you mean?" candidate, if one passed its threshold
    pub did_you_mean: Option<ClosestMatch>,
    /// Which pass produced `did_you_mean`
    pub pass: Option<Pass>,
    /// Lookup failure, if any
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<LookupError>,
    /// Not-found message, set only when the lookup failed and there is no
    /// suggestion to offer instead
    pub message: Option<&'static str>,
}

fn serialize_error<S: Serializer>(
    error: &Option<LookupError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match error {
        Some(err) => serializer.serialize_some(&err.to_string()),
        None => serializer.serialize_none(),
    }
}

impl SearchOutcome {
    /// Whether the lookup collaborator resolved the query.
    pub fn is_found(&self) -> bool {
        self.detail.is_some()
    }

    /// The not-found message, shown only when the lookup failed and there
    /// is no suggestion to offer instead.
    pub fn message(&self) -> Option<&'static str> {
        self.message
    }
}

/// A corpus plus matching configuration, ready to serve a search box.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    corpus: Corpus,
    config: MatchConfig,
}

impl SearchSession {
    /// Session over `corpus` with the default thresholds.
    pub fn new(corpus: Corpus) -> Self {
        Self::with_config(corpus, MatchConfig::default())
    }

    /// Session over `corpus` with custom thresholds.
    pub fn with_config(corpus: Corpus, config: MatchConfig) -> Self {
        Self { corpus, config }
    }

    /// The corpus being searched.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// The active thresholds.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Replace the corpus, keeping the thresholds.
    pub fn set_corpus(&mut self, corpus: Corpus) {
        self.corpus = corpus;
    }

    /// Replace the thresholds.
    pub fn set_config(&mut self, config: MatchConfig) {
        self.config = config;
    }

    /// Autocomplete suggestions for the live query.
    pub fn suggestions(&self, live_query: &str) -> Vec<&str> {
        self.corpus.rank(live_query, self.config.suggestion_limit)
    }

    /// Run one correction pass against this session's corpus.
    pub fn correction(&self, query: &str, pass: Pass) -> Option<ClosestMatch> {
        matcher::correction(query, self.corpus.as_slice(), pass, &self.config)
    }

    /// Submit a finalized query.
    ///
    /// Returns `None` for a blank query: nothing is submitted and the
    /// lookup is not called.
    pub fn submit<L: ExerciseLookup + ?Sized>(
        &self,
        raw_query: &str,
        lookup: &L,
    ) -> Option<SearchOutcome> {
        let query = raw_query.trim();
        if query.is_empty() {
            return None;
        }

        let mut outcome = SearchOutcome {
            query: query.to_string(),
            detail: None,
            did_you_mean: None,
            pass: None,
            error: None,
            message: None,
        };

        if let Some(candidate) = self.correction(query, Pass::Primary) {
            outcome.did_you_mean = Some(candidate);
            outcome.pass = Some(Pass::Primary);
        }

        match lookup.lookup(query) {
            Ok(detail) => outcome.detail = Some(detail),
            Err(err) => {
                log::warn!("Lookup failed for {:?}: {}", query, err);
                if outcome.did_you_mean.is_none() {
                    outcome.did_you_mean = self.correction(query, Pass::Fallback);
                    outcome.pass = outcome.did_you_mean.as_ref().map(|_| Pass::Fallback);
                }
                if outcome.did_you_mean.is_none() {
                    outcome.message = Some(NOT_FOUND_MESSAGE);
                }
                outcome.error = Some(err);
            }
        }

        Some(outcome)
    }

    /// Featured exercises filtered by the raw query.
    pub fn featured(&self, raw_query: &str) -> Vec<&'static str> {
        suggest::filter_featured(raw_query, crate::corpus::FEATURED_EXERCISES)
    }
}
