use std::collections::HashSet;
use turfbook_shared::Turf;
use crate::search::{self, SearchFilters};

/// Sports offered by the search form, in display order
pub const SPORT_OPTIONS: [&str; 3] = ["Football", "Cricket", "Basketball"];

const BUNDLED_TURFS: &str = include_str!("../data/turfs.json");

/// Read-only collection of every turf the service knows about
#[derive(Debug, Clone)]
pub struct Catalog {
    turfs: Vec<Turf>,
}

impl Catalog {
    /// Load the turf list compiled into the binary
    pub fn bundled() -> Result<Self, CatalogError> {
        let turfs: Vec<Turf> = serde_json::from_str(BUNDLED_TURFS)?;
        Self::from_turfs(turfs)
    }

    /// Build a catalog, rejecting duplicate identifiers
    pub fn from_turfs(turfs: Vec<Turf>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(turfs.len());
        for turf in &turfs {
            if !seen.insert(turf.id.as_str()) {
                return Err(CatalogError::DuplicateId(turf.id.clone()));
            }
        }

        Ok(Self { turfs })
    }

    pub fn get(&self, turf_id: &str) -> Option<&Turf> {
        self.turfs.iter().find(|turf| turf.id == turf_id)
    }

    pub fn contains(&self, turf_id: &str) -> bool {
        self.get(turf_id).is_some()
    }

    pub fn turfs(&self) -> &[Turf] {
        &self.turfs
    }

    pub fn len(&self) -> usize {
        self.turfs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turfs.is_empty()
    }

    pub fn search(&self, query: &SearchFilters) -> Vec<&Turf> {
        search::filter(&self.turfs, query)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate turf id in catalog: {0}")]
    DuplicateId(String),

    #[error("Malformed catalog data: {0}")]
    Malformed(#[from] serde_json::Error),
}
