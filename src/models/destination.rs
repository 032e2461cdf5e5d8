//! Destination model for catalog destinations and their descriptive attributes

use serde::{Deserialize, Serialize};

/// An Indian travel destination and its key attributes
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Destination {
    /// Unique identifier for the destination
    pub id: u32,
    pub name: String,
    /// Country (the catalog is restricted to India)
    #[serde(default = "default_country")]
    pub country: String,
    /// Indian state or union territory
    pub state: String,
    pub region: Region,
    /// Descriptors like hill-station, beach, wildlife, spiritual, food
    #[serde(default)]
    pub tags: Vec<String>,
    /// Budget tier in INR per day
    pub budget_level: BudgetTier,
    /// Typical average daily cost in INR
    pub avg_daily_cost_inr: u32,
    pub climate: Climate,
    pub crowd_level: CrowdLevel,
    /// Human-readable best season, e.g. "Oct-Mar"
    pub best_season: String,
    /// Common ways to reach (train, road, flight)
    #[serde(default)]
    pub travel_type: Vec<TravelMode>,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Destination {
    /// Destination center coordinate as a (latitude, longitude) pair
    #[must_use]
    pub fn coordinates(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

fn default_country() -> String {
    "India".to_string()
}

/// Indian macro-region
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    North,
    South,
    East,
    West,
    Northeast,
}

impl Region {
    /// Canonical label used in feature encoding
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
            Region::Northeast => "Northeast",
        }
    }
}

/// Budget tiers in INR per day
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    Budget,
    Mid,
    Premium,
}

impl BudgetTier {
    /// Canonical label used in feature encoding
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Budget => "budget",
            BudgetTier::Mid => "mid",
            BudgetTier::Premium => "premium",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Climate {
    Cold,
    Moderate,
    Warm,
}

impl Climate {
    /// Canonical label used in feature encoding
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Climate::Cold => "cold",
            Climate::Moderate => "moderate",
            Climate::Warm => "warm",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
}

impl CrowdLevel {
    /// Canonical label used in feature encoding
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CrowdLevel::Low => "low",
            CrowdLevel::Medium => "medium",
            CrowdLevel::High => "high",
        }
    }
}

/// Common ways to reach a destination
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TravelMode {
    Train,
    Road,
    Flight,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_deserializes_with_defaults() {
        let json = r#"{
            "id": 1,
            "name": "Rishikesh",
            "state": "Uttarakhand",
            "region": "North",
            "budget_level": "budget",
            "avg_daily_cost_inr": 2500,
            "climate": "moderate",
            "crowd_level": "medium",
            "best_season": "Sep-Apr",
            "latitude": 30.0869,
            "longitude": 78.2676
        }"#;

        let dest: Destination = serde_json::from_str(json).unwrap();
        assert_eq!(dest.country, "India");
        assert!(dest.tags.is_empty());
        assert!(dest.travel_type.is_empty());
        assert_eq!(dest.region, Region::North);
        assert_eq!(dest.budget_level, BudgetTier::Budget);
    }

    #[test]
    fn test_enum_labels() {
        assert_eq!(Region::Northeast.as_str(), "Northeast");
        assert_eq!(BudgetTier::Premium.as_str(), "premium");
        assert_eq!(Climate::Cold.as_str(), "cold");
        assert_eq!(CrowdLevel::High.as_str(), "high");
    }
}
