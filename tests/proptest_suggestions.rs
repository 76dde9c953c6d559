//! Property-based tests for autocomplete ranking and correction.
//!
//! Queries are drawn both at random and as fragments of real catalogue
//! entries so that the hit lists are non-trivial.

use fitlex::config::MatchConfig;
use fitlex::corpus::EXERCISE_NAMES;
use fitlex::distance::{fold, folded_distance};
use fitlex::matcher::{closest_match, correction, Pass};
use fitlex::suggest::{rank, rank_with_limit, SUGGESTION_LIMIT};
use proptest::prelude::*;

fn arb_query() -> impl Strategy<Value = String> {
    prop::string::string_regex(" ?[a-zA-Z]{1,6} ?").unwrap()
}

/// A substring of a real catalogue entry, so hits are guaranteed.
fn arb_fragment() -> impl Strategy<Value = String> {
    (0..EXERCISE_NAMES.len(), any::<prop::sample::Index>(), 1usize..6).prop_map(
        |(i, start, len)| {
            let chars: Vec<char> = EXERCISE_NAMES[i].chars().collect();
            let start = start.index(chars.len());
            chars[start..(start + len).min(chars.len())].iter().collect()
        },
    )
}

fn arb_corpus() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::string::string_regex("[A-Za-z]{1,4}( [A-Za-z]{1,6})?").unwrap(),
        0..40,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn rank_never_exceeds_limit(query in arb_fragment()) {
        prop_assert!(rank(&query, EXERCISE_NAMES).len() <= SUGGESTION_LIMIT);
    }

    #[test]
    fn rank_hits_contain_query_but_never_equal_it(query in arb_fragment()) {
        let folded = fold(&query);
        for hit in rank(&query, EXERCISE_NAMES) {
            let lower = hit.to_lowercase();
            prop_assert!(lower.contains(&folded), "{:?} does not contain {:?}", hit, folded);
            prop_assert_ne!(lower, folded.clone());
        }
    }

    #[test]
    fn rank_prefix_hits_lead_and_lengths_ascend(query in arb_fragment()) {
        let folded = fold(&query);
        let keys: Vec<(bool, usize)> = rank(&query, EXERCISE_NAMES)
            .iter()
            .map(|hit| {
                let lower = hit.to_lowercase();
                (!lower.starts_with(&folded), lower.chars().count())
            })
            .collect();

        prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]), "unsorted keys: {:?}", keys);
    }

    #[test]
    fn rank_ties_keep_corpus_order(corpus in arb_corpus(), query in arb_query()) {
        let ranked = rank_with_limit(&query, &corpus, usize::MAX);
        let folded = fold(&query);
        let key = |name: &str| {
            let lower = name.to_lowercase();
            (!lower.starts_with(&folded), lower.chars().count())
        };

        for pair in ranked.windows(2) {
            if key(pair[0]) == key(pair[1]) {
                let first = corpus.iter().position(|n| n == pair[0]);
                let second = corpus.iter().rposition(|n| n == pair[1]);
                prop_assert!(first <= second);
            }
        }
    }

    #[test]
    fn rank_is_case_and_padding_insensitive(query in arb_query()) {
        prop_assert_eq!(
            rank(&query, EXERCISE_NAMES),
            rank(&format!("  {}  ", query.to_uppercase()), EXERCISE_NAMES)
        );
    }

    #[test]
    fn rank_is_a_prefix_of_unbounded_rank(corpus in arb_corpus(), query in arb_query()) {
        let all = rank_with_limit(&query, &corpus, usize::MAX);
        let bounded = rank(&query, &corpus);
        prop_assert_eq!(&all[..bounded.len()], &bounded[..]);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn closest_match_is_minimal(corpus in arb_corpus(), query in arb_query()) {
        match closest_match(&query, &corpus) {
            None => prop_assert!(corpus.is_empty()),
            Some(found) => {
                prop_assert_eq!(found.distance, folded_distance(&query, &found.term));
                for name in &corpus {
                    prop_assert!(folded_distance(&query, name) >= found.distance);
                }
                // First minimum wins
                let first = corpus
                    .iter()
                    .find(|name| folded_distance(&query, name) == found.distance);
                prop_assert_eq!(first.map(String::as_str), Some(found.term.as_str()));
            }
        }
    }

    #[test]
    fn corrections_respect_thresholds(corpus in arb_corpus(), query in arb_query()) {
        let config = MatchConfig::default();
        let long_enough = query.trim().chars().count() > config.min_query_len;

        for pass in [Pass::Primary, Pass::Fallback] {
            if let Some(found) = correction(&query, &corpus, pass, &config) {
                prop_assert!(long_enough);
                prop_assert!(pass.threshold(&config).accepts(found.distance));
            }
        }

        if let Some(found) = correction(&query, &corpus, Pass::Primary, &config) {
            prop_assert!(found.distance > 0);
        }
    }
}
