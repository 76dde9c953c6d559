//! End-to-end tests of the dictionary search flow over the built-in corpus.

use std::cell::RefCell;

use fitlex::prelude::*;
use fitlex::search::NOT_FOUND_MESSAGE;

fn detail(name: &str, muscle_group: &str) -> ExerciseDetail {
    ExerciseDetail {
        name: name.to_string(),
        muscle_group: muscle_group.to_string(),
        kind: "Strength".to_string(),
        description: format!("How to perform the {}.", name.to_lowercase()),
    }
}

fn catalog() -> CatalogLookup {
    CatalogLookup::from_details([
        detail("Bench Press", "Chest"),
        detail("Deadlift", "Back"),
        detail("Plank", "Core"),
    ])
}

#[test]
fn test_live_suggestions_for_prefix() {
    let session = SearchSession::default();
    let suggestions = session.suggestions("nordic");

    assert_eq!(
        suggestions,
        vec![
            "Nordic Hamstring Curl",
            "Nordic Hamstring Drop",
            "Nordic Curl (Regressed)",
            "Nordic Curls (Assisted)",
            "Nordic Hamstring Curl (Weighted)",
            "Reverse Nordic Curl",
        ]
    );
}

#[test]
fn test_prefix_hits_before_substring_hits() {
    let session = SearchSession::default();
    assert_eq!(
        session.suggestions("bench")[..3],
        ["Bench Dips", "Bench Press", "Tempo Bench Press"]
    );
}

#[test]
fn test_primary_pass_on_close_typo() {
    let session = SearchSession::default();
    let found = session.correction("dedlfit", Pass::Primary).unwrap();
    assert_eq!(found.term, "Deadlift");
    assert_eq!(found.distance, 3);
}

#[test]
fn test_exact_hit_has_no_suggestion() {
    let session = SearchSession::default();
    let outcome = session.submit("deadlift", &catalog()).unwrap();

    assert!(outcome.is_found());
    assert_eq!(outcome.did_you_mean, None);
    assert_eq!(outcome.message(), None);
    assert_eq!(outcome.detail.unwrap().muscle_group, "Back");
}

#[test]
fn test_typo_found_by_lookup_still_suggests() {
    let session = SearchSession::default();
    let lookup = |name: &str| -> Result<ExerciseDetail, LookupError> {
        Ok(detail(name, "Chest"))
    };

    let outcome = session.submit("Bench Pres", &lookup).unwrap();
    assert!(outcome.is_found());
    assert_eq!(outcome.pass, Some(Pass::Primary));
    assert_eq!(outcome.did_you_mean.unwrap().term, "Bench Press");
}

#[test]
fn test_lookup_receives_trimmed_query() {
    let session = SearchSession::default();
    let seen = RefCell::new(Vec::new());
    let lookup = |name: &str| -> Result<ExerciseDetail, LookupError> {
        seen.borrow_mut().push(name.to_string());
        Err(LookupError::Unavailable("offline".to_string()))
    };

    let outcome = session.submit("  Plank  ", &lookup).unwrap();
    assert_eq!(seen.into_inner(), vec!["Plank".to_string()]);
    assert_eq!(outcome.query, "Plank");
    // Exact corpus hit: the fallback pass offers the canonical spelling
    assert_eq!(outcome.pass, Some(Pass::Fallback));
    assert_eq!(outcome.did_you_mean.unwrap().distance, 0);
}

#[test]
fn test_unknown_name_reports_not_found() {
    let session = SearchSession::default();
    let outcome = session.submit("xyzzyplugh", &catalog()).unwrap();

    assert!(!outcome.is_found());
    assert!(matches!(outcome.error, Some(LookupError::NotFound(_))));
    assert_eq!(outcome.message(), Some(NOT_FOUND_MESSAGE));
}

#[test]
fn test_custom_thresholds() {
    let config = MatchConfig {
        primary: Threshold {
            min_distance: 1,
            max_distance: 1,
        },
        ..MatchConfig::default()
    };
    let session = SearchSession::with_config(Corpus::builtin(), config);

    // Distance 2 is outside the narrowed primary threshold but inside the
    // fallback one
    assert_eq!(session.correction("Bencch Pres", Pass::Primary), None);
    let outcome = session.submit("Bencch Pres", &catalog()).unwrap();
    assert_eq!(outcome.pass, Some(Pass::Fallback));
    assert_eq!(outcome.did_you_mean.unwrap().term, "Bench Press");
}

#[test]
fn test_featured_filter_uses_raw_query() {
    let session = SearchSession::default();

    assert_eq!(session.featured("").len(), FEATURED_EXERCISES.len());
    assert!(session.featured("zzz").is_empty());

    let padded = session.featured(" press");
    assert!(padded.iter().all(|name| name.to_lowercase().contains(" press")));
}

#[test]
fn test_outcome_serializes_for_clients() {
    let session = SearchSession::default();
    let outcome = session.submit("Bencch Pres", &catalog()).unwrap();
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["query"], "Bencch Pres");
    assert_eq!(json["did_you_mean"]["term"], "Bench Press");
    assert!(json["detail"].is_null());
}
