//! Itinerary request/response shapes

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::YatraError;

/// Trip pace, controlling the daily activity-hour cap
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Relaxed,
    #[default]
    Moderate,
    Full,
}

impl Pace {
    /// Maximum activity hours permitted in a single itinerary day
    #[must_use]
    pub fn daily_hour_cap(&self) -> f64 {
        match self {
            Pace::Relaxed => 6.0,
            Pace::Moderate => 8.0,
            Pace::Full => 10.0,
        }
    }

    /// Parse a pace string, falling back to moderate for unrecognized values
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "relaxed" => Pace::Relaxed,
            "full" => Pace::Full,
            _ => Pace::Moderate,
        }
    }
}

// Unrecognized pace strings deserialize to moderate rather than erroring.
fn pace_or_moderate<'de, D>(deserializer: D) -> Result<Pace, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(Pace::parse(&value))
}

/// Request for a multi-day itinerary at a chosen destination
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ItineraryRequest {
    pub destination_id: u32,
    /// Trip length in days (1-30)
    pub days: u32,
    /// Total budget in INR
    pub budget: f64,
    /// Preferred attraction categories
    #[serde(default)]
    pub interests: Vec<String>,
    /// Controls daily hours and activity count
    #[serde(default, deserialize_with = "pace_or_moderate")]
    pub pace: Pace,
}

impl ItineraryRequest {
    /// Check request bounds before handing the request to the builder
    pub fn validate(&self) -> Result<(), YatraError> {
        if !(1..=30).contains(&self.days) {
            return Err(YatraError::validation(format!(
                "days must be between 1 and 30, got {}",
                self.days
            )));
        }
        if self.budget < 0.0 {
            return Err(YatraError::validation("budget must be non-negative"));
        }
        Ok(())
    }
}

/// A single scheduled stop within an itinerary day
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ItineraryActivity {
    pub attraction_id: u32,
    pub name: String,
    pub category: String,
    pub estimated_time_hours: f64,
    pub estimated_cost: f64,
    /// Attraction latitude
    pub latitude: f64,
    /// Attraction longitude
    pub longitude: f64,
    /// Travel distance from the previous stop
    #[serde(default)]
    pub distance_from_prev_km: Option<f64>,
}

/// One day of an itinerary, in selection order
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ItineraryDay {
    pub day: u32,
    pub activities: Vec<ItineraryActivity>,
    pub estimated_day_cost: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ItineraryResponse {
    pub destination_id: u32,
    pub destination_name: String,
    pub days: Vec<ItineraryDay>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pace_caps() {
        assert_eq!(Pace::Relaxed.daily_hour_cap(), 6.0);
        assert_eq!(Pace::Moderate.daily_hour_cap(), 8.0);
        assert_eq!(Pace::Full.daily_hour_cap(), 10.0);
    }

    #[test]
    fn test_unrecognized_pace_falls_back_to_moderate() {
        let json = r#"{
            "destination_id": 1,
            "days": 3,
            "budget": 10000,
            "pace": "leisurely"
        }"#;
        let request: ItineraryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.pace, Pace::Moderate);
    }

    #[test]
    fn test_pace_defaults_to_moderate_when_missing() {
        let json = r#"{"destination_id": 1, "days": 3, "budget": 10000}"#;
        let request: ItineraryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.pace, Pace::Moderate);
    }

    #[test]
    fn test_days_bounds() {
        let mut request = ItineraryRequest {
            destination_id: 1,
            days: 0,
            budget: 0.0,
            interests: vec![],
            pace: Pace::Moderate,
        };
        assert!(request.validate().is_err());
        request.days = 31;
        assert!(request.validate().is_err());
        request.days = 30;
        assert!(request.validate().is_ok());
        request.budget = -1.0;
        assert!(request.validate().is_err());
    }
}
