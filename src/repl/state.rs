//! REPL state management

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::paths::PersistentConfig;
use crate::corpus::{Corpus, FEATURED_EXERCISES};
use crate::search::{CatalogLookup, SearchSession};

/// REPL state
#[derive(Debug, Clone, Default)]
pub struct ReplState {
    /// Corpus and thresholds
    pub session: SearchSession,
    /// Detail catalogue answering `search`
    pub catalog: CatalogLookup,
    /// Whether to show distances in match results
    pub show_distances: bool,
    /// Where the corpus came from (`None` for the built-in catalogue)
    pub corpus_path: Option<PathBuf>,
    /// Where the catalogue came from
    pub catalog_path: Option<PathBuf>,
    /// Custom config file path
    pub config_file_path: Option<PathBuf>,
}

impl ReplState {
    /// Create new REPL state over the built-in corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Build state from persisted settings, loading the configured corpus
    /// and catalogue
    pub fn from_config(config: &PersistentConfig, config_file_path: Option<PathBuf>) -> Result<Self> {
        Ok(Self {
            session: config.session()?,
            catalog: config.load_catalog()?,
            show_distances: config.show_distances.unwrap_or(false),
            corpus_path: config.corpus_path.clone(),
            catalog_path: config.catalog_path.clone(),
            config_file_path,
        })
    }

    /// Replace the corpus from a file, returning the number of names loaded
    pub fn load_corpus(&mut self, path: &Path) -> Result<usize> {
        let corpus = Corpus::load(path)
            .with_context(|| format!("Failed to load corpus: {}", path.display()))?;
        let count = corpus.len();
        self.session.set_corpus(corpus);
        self.corpus_path = Some(path.to_path_buf());
        Ok(count)
    }

    /// Restore the built-in corpus
    pub fn reset_corpus(&mut self) -> usize {
        self.session.set_corpus(Corpus::builtin());
        self.corpus_path = None;
        self.session.corpus().len()
    }

    /// Replace the detail catalogue from a file, returning the number of
    /// entries loaded
    pub fn load_catalog(&mut self, path: &Path) -> Result<usize> {
        self.catalog = CatalogLookup::load(path)
            .with_context(|| format!("Failed to load catalogue: {}", path.display()))?;
        self.catalog_path = Some(path.to_path_buf());
        Ok(self.catalog.len())
    }

    /// Change the suggestion limit
    pub fn set_limit(&mut self, limit: usize) {
        let mut config = *self.session.config();
        config.suggestion_limit = limit;
        self.session.set_config(config);
    }

    /// Corpus statistics
    pub fn stats(&self) -> CorpusStats {
        let corpus = self.session.corpus();
        CorpusStats {
            source: self.corpus_path.clone(),
            entries: corpus.len(),
            unique: corpus.unique_len(),
            featured: FEATURED_EXERCISES.len(),
            catalog_entries: self.catalog.len(),
        }
    }

    /// Convert current state to PersistentConfig
    pub fn to_persistent_config(&self) -> PersistentConfig {
        PersistentConfig {
            corpus_path: self.corpus_path.clone(),
            catalog_path: self.catalog_path.clone(),
            show_distances: Some(self.show_distances),
            matching: Some(*self.session.config()),
        }
    }

    /// Save current state to configuration file
    pub fn save_config(&self) -> Result<()> {
        self.to_persistent_config()
            .save_to(self.config_file_path.as_deref())
    }
}

/// Corpus statistics
#[derive(Debug)]
pub struct CorpusStats {
    /// Corpus file, if not built in
    pub source: Option<PathBuf>,
    /// Number of names, duplicates included
    pub entries: usize,
    /// Number of distinct names
    pub unique: usize,
    /// Number of featured exercises
    pub featured: usize,
    /// Number of catalogue entries
    pub catalog_entries: usize,
}

impl std::fmt::Display for CorpusStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.source {
            Some(ref path) => writeln!(f, "Source:     {}", path.display())?,
            None => writeln!(f, "Source:     (built-in)")?,
        }
        writeln!(f, "Entries:    {}", self.entries)?;
        writeln!(f, "Unique:     {}", self.unique)?;
        writeln!(f, "Featured:   {}", self.featured)?;
        writeln!(f, "Catalogue:  {}", self.catalog_entries)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_new_state_uses_builtin_corpus() {
        let state = ReplState::new();
        assert_eq!(state.session.corpus().len(), Corpus::builtin().len());
        assert!(state.catalog.is_empty());
        assert_eq!(state.stats().source, None);
    }

    #[test]
    fn test_load_corpus_from_file() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "Deadlift\nSquat\n\nLunge").unwrap();

        let mut state = ReplState::new();
        assert_eq!(state.load_corpus(file.path()).unwrap(), 3);
        assert_eq!(state.session.suggestions("squ"), vec!["Squat"]);

        state.reset_corpus();
        assert_eq!(state.corpus_path, None);
    }

    #[test]
    fn test_limit_round_trips_through_config() {
        let mut state = ReplState::new();
        state.set_limit(3);
        state.show_distances = true;

        let config = state.to_persistent_config();
        assert_eq!(config.match_config().suggestion_limit, 3);
        assert_eq!(config.show_distances, Some(true));
        assert_eq!(state.session.suggestions("press").len(), 3);
    }
}
