//! The name-based lookup collaborator.
//!
//! Exercise details come from outside this crate (in production, a
//! generative-AI service). The search flow only needs to know that a
//! lookup exists, may fail, and returns an [`ExerciseDetail`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{LookupError, Result};

/// Structured description of a single exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDetail {
    /// Standard name of the exercise
    pub name: String,
    /// Primary muscle targeted
    pub muscle_group: String,
    /// Training category, e.g. Strength, Hypertrophy, Mobility
    #[serde(rename = "type")]
    pub kind: String,
    /// Short technique guide
    pub description: String,
}

/// Resolves an exercise name to its details.
pub trait ExerciseLookup {
    /// Look up `name` (already trimmed, original casing).
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] when the exercise cannot be resolved.
    fn lookup(&self, name: &str) -> std::result::Result<ExerciseDetail, LookupError>;
}

impl<F> ExerciseLookup for F
where
    F: Fn(&str) -> std::result::Result<ExerciseDetail, LookupError>,
{
    fn lookup(&self, name: &str) -> std::result::Result<ExerciseDetail, LookupError> {
        self(name)
    }
}

/// In-memory catalogue of exercise details, keyed case-insensitively by
/// name.
#[derive(Debug, Clone, Default)]
pub struct CatalogLookup {
    details: FxHashMap<String, ExerciseDetail>,
}

impl CatalogLookup {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalogue from detail records. Later records replace
    /// earlier ones with the same name.
    pub fn from_details<I: IntoIterator<Item = ExerciseDetail>>(details: I) -> Self {
        let mut catalog = Self::new();
        for detail in details {
            catalog.insert(detail);
        }
        catalog
    }

    /// Read a JSON array of detail records.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader fails or a record is malformed.
    pub fn from_json<R: Read>(reader: R) -> Result<Self> {
        let details: Vec<ExerciseDetail> = serde_json::from_reader(BufReader::new(reader))?;
        Ok(Self::from_details(details))
    }

    /// Load a JSON catalogue file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let catalog = Self::from_json(File::open(path)?)?;
        log::info!("Loaded {} exercise detail(s) from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Add or replace a record.
    pub fn insert(&mut self, detail: ExerciseDetail) {
        self.details.insert(detail.name.to_lowercase(), detail);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.details.len()
    }

    /// Whether the catalogue is empty.
    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }
}

impl ExerciseLookup for CatalogLookup {
    fn lookup(&self, name: &str) -> std::result::Result<ExerciseDetail, LookupError> {
        self.details
            .get(&name.trim().to_lowercase())
            .cloned()
            .ok_or_else(|| LookupError::NotFound(name.to_string()))
    }
}
