//! Autocomplete ranking for live queries.
//!
//! Recomputed on every keystroke, so everything here is a pure function of
//! `(query, corpus)`: no caching, no I/O, one linear scan.

use crate::distance::fold;

/// Maximum number of suggestions shown for a live query.
pub const SUGGESTION_LIMIT: usize = 10;

/// Rank corpus entries for a live query.
///
/// Keeps entries whose lower-cased form contains the trimmed, lower-cased
/// query, minus any entry that equals it exactly. Entries that start with
/// the query come first; within each group shorter names come first; ties
/// keep corpus order. At most [`SUGGESTION_LIMIT`] entries are returned.
///
/// # Example
///
/// ```rust
/// use fitlex::suggest::rank;
///
/// let corpus = ["Barbell Squat", "Front Squat", "Squats"];
/// assert_eq!(rank("Squat", &corpus), vec!["Squats", "Front Squat", "Barbell Squat"]);
/// assert!(rank("   ", &corpus).is_empty());
/// ```
pub fn rank<'a, S: AsRef<str>>(query: &str, corpus: &'a [S]) -> Vec<&'a str> {
    rank_with_limit(query, corpus, SUGGESTION_LIMIT)
}

/// [`rank`] with a caller-chosen bound instead of [`SUGGESTION_LIMIT`].
pub fn rank_with_limit<'a, S: AsRef<str>>(
    query: &str,
    corpus: &'a [S],
    limit: usize,
) -> Vec<&'a str> {
    let query = fold(query);
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    // (contains-only, length, name): `false` sorts first, so prefix hits lead.
    let mut hits: Vec<(bool, usize, &'a str)> = corpus
        .iter()
        .filter_map(|entry| {
            let name = entry.as_ref();
            let lower = name.to_lowercase();
            if lower == query || !lower.contains(&query) {
                return None;
            }
            Some((!lower.starts_with(&query), lower.chars().count(), name))
        })
        .collect();

    hits.sort_by_key(|&(contains_only, len, _)| (contains_only, len));
    hits.truncate(limit);
    hits.into_iter().map(|(_, _, name)| name).collect()
}

/// Filter the featured-exercise grid by a raw query.
///
/// An empty query shows every featured exercise. Unlike [`rank`], the
/// query is not trimmed and exact matches are kept.
pub fn filter_featured<'a, S: AsRef<str>>(query: &str, featured: &'a [S]) -> Vec<&'a str> {
    if query.is_empty() {
        return featured.iter().map(AsRef::as_ref).collect();
    }

    let query = query.to_lowercase();
    featured
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| name.to_lowercase().contains(&query))
        .collect()
}
