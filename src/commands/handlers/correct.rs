//! Shared "did you mean?" command handler

use crate::commands::core::MatchParams;
use crate::matcher::ClosestMatch;
use crate::search::SearchSession;

/// Run the requested correction pass, or the raw scan when no pass is set
pub fn execute_match(session: &SearchSession, params: &MatchParams) -> Option<ClosestMatch> {
    match params.pass {
        Some(pass) => session.correction(&params.query, pass),
        None => session.corpus().closest_match(&params.query),
    }
}

/// Format a correction for display
pub fn format_match(found: Option<&ClosestMatch>, show_distances: bool) -> String {
    match found {
        None => "No suggestion".to_string(),
        Some(m) if show_distances => format!("Did you mean: {} (distance: {})", m.term, m.distance),
        Some(m) => format!("Did you mean: {}", m.term),
    }
}
