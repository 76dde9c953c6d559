//! Shared suggestion command handler

use crate::commands::core::SuggestParams;
use crate::search::SearchSession;

/// Rank suggestions for a live query
///
/// This is the core autocomplete logic shared by both CLI and REPL.
pub fn execute_suggest<'s>(session: &'s SearchSession, params: &SuggestParams) -> Vec<&'s str> {
    session.corpus().rank(&params.query, params.limit)
}

/// Format suggestions for display
pub fn format_suggestions(suggestions: &[&str]) -> String {
    if suggestions.is_empty() {
        return "No suggestions".to_string();
    }

    suggestions
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{:2}. {}", i + 1, name))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;

    fn session() -> SearchSession {
        SearchSession::new(Corpus::from_names([
            "Barbell Squat",
            "Front Squat",
            "Squats",
            "Squat",
        ]))
    }

    #[test]
    fn test_execute_suggest() {
        let params = SuggestParams {
            query: "squat".to_string(),
            limit: 10,
        };
        assert_eq!(
            execute_suggest(&session(), &params),
            vec!["Squats", "Front Squat", "Barbell Squat"]
        );
    }

    #[test]
    fn test_execute_suggest_with_limit() {
        let params = SuggestParams {
            query: "squat".to_string(),
            limit: 1,
        };
        assert_eq!(execute_suggest(&session(), &params), vec!["Squats"]);
    }

    #[test]
    fn test_format_suggestions() {
        let output = format_suggestions(&["Squats", "Front Squat"]);
        assert_eq!(output, " 1. Squats\n 2. Front Squat");
        assert_eq!(format_suggestions(&[]), "No suggestions");
    }

    #[test]
    fn test_blank_query_has_no_suggestions() {
        let params = SuggestParams {
            query: "  ".to_string(),
            limit: 10,
        };
        let session = session();
        let results = execute_suggest(&session, &params);
        assert_eq!(format_suggestions(&results), "No suggestions");
    }
}
