//! Configuration directory and persistent user settings

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::MatchConfig;
use crate::corpus::Corpus;
use crate::search::{CatalogLookup, SearchSession};

/// Get the configuration directory for fitlex
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine configuration directory")?;
    Ok(base.join("fitlex"))
}

/// Get the default user config path
pub fn default_config_path() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    Ok(dir.join("config.json"))
}

/// Get the config file path with optional override
pub fn config_file_path_with_override(custom_path: Option<&Path>) -> Result<PathBuf> {
    match custom_path {
        Some(path) => {
            validate_config_path(path)?;
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
            Ok(path.to_path_buf())
        }
        None => default_config_path(),
    }
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// User configuration stored in config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersistentConfig {
    /// Default corpus file (built-in catalogue if unset)
    pub corpus_path: Option<PathBuf>,
    /// Default exercise detail catalogue
    pub catalog_path: Option<PathBuf>,
    /// Default show distances
    pub show_distances: Option<bool>,
    /// Matching thresholds (defaults if unset)
    pub matching: Option<MatchConfig>,
}

impl PersistentConfig {
    /// Load configuration from custom path
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = config_file_path_with_override(custom_path)?;
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to custom path
    pub fn save_to(&self, custom_path: Option<&Path>) -> Result<()> {
        let path = config_file_path_with_override(custom_path)?;
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(
        &self,
        corpus_path: Option<PathBuf>,
        catalog_path: Option<PathBuf>,
        show_distances: Option<bool>,
    ) -> Self {
        Self {
            corpus_path: corpus_path.or_else(|| self.corpus_path.clone()),
            catalog_path: catalog_path.or_else(|| self.catalog_path.clone()),
            show_distances: show_distances.or(self.show_distances),
            matching: self.matching,
        }
    }

    /// Effective matching thresholds
    pub fn match_config(&self) -> MatchConfig {
        self.matching.unwrap_or_default()
    }

    /// Load the configured corpus, or the built-in one
    pub fn load_corpus(&self) -> Result<Corpus> {
        match self.corpus_path {
            Some(ref path) => Corpus::load(path)
                .with_context(|| format!("Failed to load corpus: {}", path.display())),
            None => Ok(Corpus::builtin()),
        }
    }

    /// Load the configured catalogue, or an empty one
    pub fn load_catalog(&self) -> Result<CatalogLookup> {
        match self.catalog_path {
            Some(ref path) => CatalogLookup::load(path)
                .with_context(|| format!("Failed to load catalogue: {}", path.display())),
            None => Ok(CatalogLookup::new()),
        }
    }

    /// Build a search session from the configured corpus and thresholds
    pub fn session(&self) -> Result<SearchSession> {
        Ok(SearchSession::with_config(
            self.load_corpus()?,
            self.match_config(),
        ))
    }
}
