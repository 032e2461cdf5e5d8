//! Nearby trip-expansion request/response shapes

use serde::{Deserialize, Serialize};

use crate::error::YatraError;

/// Request for nearby destinations reachable within extra days/budget
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct NearbyExpansionRequest {
    pub destination_id: u32,
    /// Number of additional days the traveler can extend
    #[serde(default)]
    pub extra_days: u32,
    /// Additional budget for nearby expansions
    #[serde(default)]
    pub extra_budget: f64,
    /// Search radius for nearby destinations in kilometers
    #[serde(default = "default_radius_km")]
    pub radius_km: f64,
}

fn default_radius_km() -> f64 {
    350.0
}

impl NearbyExpansionRequest {
    /// Check request bounds before handing the request to the suggester
    pub fn validate(&self) -> Result<(), YatraError> {
        if self.radius_km <= 0.0 {
            return Err(YatraError::validation(format!(
                "radius_km must be positive, got {}",
                self.radius_km
            )));
        }
        if self.extra_budget < 0.0 {
            return Err(YatraError::validation("extra_budget must be non-negative"));
        }
        Ok(())
    }
}

/// A destination within reach of the origin
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NearbySuggestion {
    pub destination_id: u32,
    pub name: String,
    pub country: String,
    pub distance_km: f64,
    /// Whether extra days/budget appear sufficient to visit
    pub feasible: bool,
    pub notes: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NearbyExpansionResponse {
    pub origin_destination_id: u32,
    pub suggestions: Vec<NearbySuggestion>,
}
