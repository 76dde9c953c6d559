//! Shared search command handler

use crate::commands::core::CommandResult;
use crate::search::{ExerciseLookup, SearchOutcome, SearchSession};

/// Format a submission outcome for display
///
/// Mirrors the dictionary screen: the suggestion line comes first, then
/// either the exercise card or the not-found message.
pub fn format_outcome(outcome: &SearchOutcome) -> String {
    let mut lines = Vec::new();

    if let Some(ref suggestion) = outcome.did_you_mean {
        lines.push(format!("Did you mean? {}", suggestion.term));
    }

    if let Some(ref detail) = outcome.detail {
        lines.push(format!("{} [{} / {}]", detail.name, detail.kind, detail.muscle_group));
        lines.push(detail.description.clone());
    } else if let Some(message) = outcome.message() {
        lines.push(message.to_string());
    }

    lines.join("\n")
}

/// Submit a query and return formatted result
///
/// A blank query produces no output.
pub fn search_and_format<L: ExerciseLookup + ?Sized>(
    session: &SearchSession,
    lookup: &L,
    query: &str,
) -> CommandResult {
    match session.submit(query, lookup) {
        Some(outcome) => CommandResult::success(format_outcome(&outcome)),
        None => CommandResult::success(String::new()),
    }
}
