//! Edit distance between exercise names.
//!
//! Classic Levenshtein distance: insertions, deletions and substitutions
//! each cost 1. Strings are compared by `char`, not by byte, so accented
//! names count one edit per visible character.

use smallvec::SmallVec;

/// Normalize a query or corpus entry for comparison.
///
/// Trims surrounding whitespace and lower-cases. The displayed form of a
/// query keeps its original casing; only comparisons go through here.
#[inline]
pub fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Compute standard Levenshtein distance between two strings.
///
/// Uses dynamic programming over two rolling rows sized `target + 1`
/// instead of the full `(source + 1) x (target + 1)` table.
///
/// Comparison is exact: callers fold case first when they want
/// case-insensitive distances.
///
/// # Example
///
/// ```rust
/// use fitlex::distance::standard_distance;
///
/// assert_eq!(standard_distance("bencch pres", "bench press"), 2);
/// assert_eq!(standard_distance("plank", "plank"), 0);
/// assert_eq!(standard_distance("", "dips"), 4);
/// ```
pub fn standard_distance(source: &str, target: &str) -> usize {
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();

    let m = source_chars.len();
    let n = target_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev_row: SmallVec<[usize; 64]> = (0..=n).collect();
    let mut curr_row: SmallVec<[usize; 64]> = SmallVec::from_elem(0, n + 1);

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = if source_chars[i - 1] == target_chars[j - 1] {
                0
            } else {
                1
            };

            curr_row[j] = (prev_row[j - 1] + cost) // substitution
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j] + 1); // deletion
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Levenshtein distance between the folded forms of two strings.
///
/// Both sides go through [`fold`] first, so case and surrounding
/// whitespace are ignored. This is the distance reported by
/// [`closest_match`](crate::matcher::closest_match).
pub fn folded_distance(source: &str, target: &str) -> usize {
    standard_distance(&fold(source), &fold(target))
}
