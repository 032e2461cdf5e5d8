//! User preference input for destination ranking

use serde::{Deserialize, Serialize};

use crate::error::YatraError;

/// User travel preferences used for destination ranking
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PreferenceRequest {
    /// Interests such as Spiritual, Wildlife, Hill station, Beach,
    /// Heritage & Forts, Food & Street food
    #[serde(default)]
    pub tags: Vec<String>,
    /// budget | mid | premium preference (per-day INR tiers);
    /// historic names low/medium/high are also accepted
    #[serde(default)]
    pub budget_level: Option<String>,
    /// cold | moderate | warm preference
    #[serde(default)]
    pub climate: Option<String>,
    /// low | medium | high preference
    #[serde(default)]
    pub crowd_level: Option<String>,
    /// Number of destinations to return (1-20)
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    5
}

impl Default for PreferenceRequest {
    fn default() -> Self {
        Self {
            tags: Vec::new(),
            budget_level: None,
            climate: None,
            crowd_level: None,
            top_k: default_top_k(),
        }
    }
}

impl PreferenceRequest {
    /// Check request bounds before handing the request to the recommender
    pub fn validate(&self) -> Result<(), YatraError> {
        if !(1..=20).contains(&self.top_k) {
            return Err(YatraError::validation(format!(
                "top_k must be between 1 and 20, got {}",
                self.top_k
            )));
        }
        Ok(())
    }
}
