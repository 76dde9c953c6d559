//! Exercise name corpora.
//!
//! A corpus is an ordered, immutable list of canonical exercise names. The
//! compiled-in catalogue is exposed as a `'static` slice and wrapped by
//! [`Corpus::builtin`]; alternative corpora can be loaded from disk.
//!
//! ## Corpus Formats
//!
//! ### Plain text
//!
//! One name per line. Lines are trimmed and blank lines skipped:
//!
//! ```text
//! Bench Press
//! Nordic Hamstring Curl
//! ```
//!
//! ### JSON
//!
//! A single array of strings:
//!
//! ```text
//! ["Bench Press", "Nordic Hamstring Curl"]
//! ```
//!
//! Order and duplicates are preserved in both formats.

pub mod exercises;

#[cfg(feature = "rand")]
pub mod generator;

pub use exercises::{EXERCISE_NAMES, FEATURED_EXERCISES};
#[cfg(feature = "rand")]
pub use generator::{Edit, TypoGenerator};

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::Result;
use crate::matcher::{self, ClosestMatch};
use crate::suggest;

/// An ordered list of exercise names.
///
/// Borrows the compiled-in catalogue when built with [`Corpus::builtin`]
/// and owns its names when loaded from a file.
#[derive(Debug, Clone)]
pub struct Corpus {
    names: Vec<Cow<'static, str>>,
}

impl Corpus {
    /// The compiled-in exercise catalogue.
    pub fn builtin() -> Self {
        Self {
            names: EXERCISE_NAMES.iter().map(|name| Cow::Borrowed(*name)).collect(),
        }
    }

    /// Build a corpus from owned names, keeping their order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(|name| Cow::Owned(name.into())).collect(),
        }
    }

    /// Read newline-delimited names.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader fails or yields invalid UTF-8.
    pub fn from_text<R: Read>(reader: R) -> Result<Self> {
        let mut names = Vec::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let name = line.trim();
            if !name.is_empty() {
                names.push(name.to_string());
            }
        }
        Ok(Self::from_names(names))
    }

    /// Read a JSON array of names.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader fails or the document is not an
    /// array of strings.
    pub fn from_json<R: Read>(reader: R) -> Result<Self> {
        let names: Vec<String> = serde_json::from_reader(BufReader::new(reader))?;
        Ok(Self::from_names(names))
    }

    /// Load a corpus file, choosing JSON for a `.json` extension and plain
    /// text otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let corpus = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json(file)?,
            _ => Self::from_text(file)?,
        };
        log::info!("Loaded {} exercise name(s) from {}", corpus.len(), path.display());
        Ok(corpus)
    }

    /// Number of names, duplicates included.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the corpus holds no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate names in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(|name| name.as_ref())
    }

    /// The names as a slice, in corpus order.
    pub fn as_slice(&self) -> &[Cow<'static, str>] {
        &self.names
    }

    /// Number of distinct names, compared case-insensitively.
    pub fn unique_len(&self) -> usize {
        let mut folded: Vec<String> = self.iter().map(str::to_lowercase).collect();
        folded.sort_unstable();
        folded.dedup();
        folded.len()
    }

    /// Find the first entry equal to `query` ignoring case and surrounding
    /// whitespace of the query.
    pub fn contains_exact(&self, query: &str) -> Option<&str> {
        let query = crate::distance::fold(query);
        if query.is_empty() {
            return None;
        }
        self.iter().find(|name| name.to_lowercase() == query)
    }

    /// Ranked autocomplete suggestions for a live query.
    pub fn rank(&self, query: &str, limit: usize) -> Vec<&str> {
        suggest::rank_with_limit(query, &self.names, limit)
    }

    /// Closest entry to a finalized query, regardless of thresholds.
    pub fn closest_match(&self, query: &str) -> Option<ClosestMatch> {
        matcher::closest_match(query, &self.names)
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_preserves_order_and_duplicates() {
        let corpus = Corpus::builtin();
        assert_eq!(corpus.len(), EXERCISE_NAMES.len());
        assert_eq!(corpus.iter().next(), Some("Bench Press"));
        assert!(corpus.unique_len() < corpus.len());
        let face_pulls = corpus.iter().filter(|n| *n == "Face Pull").count();
        assert!(face_pulls >= 2);
    }

    #[test]
    fn test_featured_exercises_reach_the_corpus() {
        let corpus = Corpus::builtin();
        for name in FEATURED_EXERCISES {
            let reachable =
                corpus.contains_exact(name).is_some() || !corpus.rank(name, 10).is_empty();
            assert!(reachable, "{} neither listed nor suggestible", name);
        }
        // Featured, but only as part of longer entries
        assert_eq!(corpus.contains_exact("Lunges"), None);
        assert!(!corpus.rank("Hamstring Curl", 10).is_empty());
    }

    #[test]
    fn test_from_text_skips_blank_lines() {
        let input = "Bench Press\n\n  Deadlift  \n\t\nPlank\n";
        let corpus = Corpus::from_text(input.as_bytes()).unwrap();
        assert_eq!(
            corpus.iter().collect::<Vec<_>>(),
            vec!["Bench Press", "Deadlift", "Plank"]
        );
    }

    #[test]
    fn test_from_json() {
        let input = r#"["Plank", "Side Plank", "Plank"]"#;
        let corpus = Corpus::from_json(input.as_bytes()).unwrap();
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus.unique_len(), 2);
    }

    #[test]
    fn test_from_json_rejects_wrong_shape() {
        let input = r#"{"names": ["Plank"]}"#;
        assert!(Corpus::from_json(input.as_bytes()).is_err());
    }

    #[test]
    fn test_contains_exact_is_case_insensitive() {
        let corpus = Corpus::from_names(["Bench Press", "Deadlift"]);
        assert_eq!(corpus.contains_exact("  bench PRESS "), Some("Bench Press"));
        assert_eq!(corpus.contains_exact("bench"), None);
        assert_eq!(corpus.contains_exact("   "), None);
    }

    #[test]
    fn test_empty_corpus() {
        let corpus = Corpus::from_names(Vec::<String>::new());
        assert!(corpus.is_empty());
        assert!(corpus.rank("press", 10).is_empty());
        assert!(corpus.closest_match("press").is_none());
    }
}
