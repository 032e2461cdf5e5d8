//! Catalog loading
//!
//! The core operations consume a flat in-memory catalog of destinations and
//! attractions. This module loads that catalog from a JSON data file; how
//! the file was produced (imports, scraping, hand curation) is not this
//! crate's concern.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::Result;
use crate::error::YatraError;
use crate::models::{Attraction, Destination};

/// Full in-memory catalog supplied to the core operations
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Catalog {
    #[serde(default)]
    pub destinations: Vec<Destination>,
    #[serde(default)]
    pub attractions: Vec<Attraction>,
}

impl Catalog {
    /// Load a catalog from a JSON file of the shape
    /// `{"destinations": [...], "attractions": [...]}`
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let catalog: Catalog = serde_json::from_str(&raw).map_err(|e| {
            YatraError::data(format!("failed to parse {}: {e}", path.display()))
        })?;

        info!(
            destinations = catalog.destinations.len(),
            attractions = catalog.attractions.len(),
            path = %path.display(),
            "Loaded catalog"
        );
        if catalog.destinations.is_empty() {
            warn!("Catalog contains no destinations; recommendations will be empty");
        }

        Ok(catalog)
    }

    /// Attractions whose destination_id matches no destination are never
    /// selected by the itinerary builder; report them so bad imports are
    /// visible in the logs.
    #[must_use]
    pub fn orphaned_attractions(&self) -> Vec<&Attraction> {
        self.attractions
            .iter()
            .filter(|a| !self.destinations.iter().any(|d| d.id == a.destination_id))
            .collect()
    }
}
