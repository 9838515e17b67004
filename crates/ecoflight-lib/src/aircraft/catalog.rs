//! Aircraft catalog loading and management.
//!
//! This module handles loading aircraft data from CSV files and provides
//! case-insensitive catalog lookup.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::dataset::read_records;
use crate::error::{Error, Result, StructuralError};
use crate::fuzzy::fuzzy_matches;

use super::attributes::Aircraft;

/// Collection of aircraft performance profiles keyed by model name.
#[derive(Debug, Clone, Default)]
pub struct AircraftCatalog {
    aircraft: HashMap<String, Aircraft>,
}

impl AircraftCatalog {
    /// Build a catalog from already-loaded records.
    ///
    /// Every record is validated and model names must be unique ignoring case.
    pub fn from_records<I>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = Aircraft>,
    {
        let mut aircraft = HashMap::new();
        for mut record in records {
            record.model = record.model.trim().to_string();
            record.validate()?;

            let key = normalize_name(&record.model);
            if aircraft.contains_key(&key) {
                return Err(StructuralError::DuplicateAircraft { name: key }.into());
            }
            aircraft.insert(key, record);
        }

        Ok(Self { aircraft })
    }

    /// Load an aircraft catalog from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::DatasetNotFound {
                path: path.to_path_buf(),
            });
        }
        Self::from_reader(fs::File::open(path)?)
    }

    /// Load an aircraft catalog from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<Aircraft> = read_records(reader)?;
        Self::from_records(records)
    }

    /// Get an aircraft by model name (case-insensitive).
    pub fn get(&self, model: &str) -> Option<&Aircraft> {
        self.aircraft.get(&normalize_name(model))
    }

    /// Get an aircraft by model name, or an error carrying close matches.
    pub fn resolve(&self, model: &str) -> Result<&Aircraft> {
        self.get(model).ok_or_else(|| Error::UnknownAircraft {
            name: model.to_string(),
            suggestions: self.suggestions(model, 3),
        })
    }

    /// Model names similar to `model`, best match first.
    pub fn suggestions(&self, model: &str, limit: usize) -> Vec<String> {
        let mut names: Vec<&str> = self.aircraft.values().map(|a| a.model.as_str()).collect();
        names.sort_unstable();
        fuzzy_matches(model, names, limit)
    }

    /// Get a sorted list of all model names.
    pub fn model_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.aircraft.values().map(|a| a.model.clone()).collect();
        names.sort();
        names
    }

    /// Get all aircraft sorted by model name.
    pub fn aircraft_sorted(&self) -> Vec<&Aircraft> {
        let mut aircraft: Vec<&Aircraft> = self.aircraft.values().collect();
        aircraft.sort_by(|a, b| a.model.cmp(&b.model));
        aircraft
    }

    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }
}

/// Normalize a model name for case-insensitive lookup.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
