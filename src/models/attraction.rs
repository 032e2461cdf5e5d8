//! Attraction model for points of interest within a destination

use serde::{Deserialize, Serialize};

/// A point of interest owned by a destination
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Attraction {
    /// Unique identifier for the attraction
    pub id: u32,
    /// Id of the owning destination
    pub destination_id: u32,
    pub name: String,
    pub category: String,
    /// Estimated cost in INR
    pub cost: f64,
    pub latitude: f64,
    pub longitude: f64,
    /// Recommended visit duration in hours
    pub visit_duration: f64,
}

impl Attraction {
    /// Attraction coordinate as a (latitude, longitude) pair
    #[must_use]
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}
