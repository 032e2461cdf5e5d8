//! Data models for the Yatra application
//!
//! This module contains the core domain models organized by concern:
//! - Destination: catalog destinations and their descriptive attributes
//! - Attraction: points of interest owned by a destination
//! - Preferences: user preference input for destination ranking
//! - Itinerary: itinerary request/response shapes
//! - Nearby: nearby trip-expansion request/response shapes

pub mod attraction;
pub mod destination;
pub mod itinerary;
pub mod nearby;
pub mod preferences;

// Re-export all public types for convenient access
pub use attraction::Attraction;
pub use destination::{BudgetTier, Climate, CrowdLevel, Destination, Region, TravelMode};
pub use itinerary::{
    ItineraryActivity, ItineraryDay, ItineraryRequest, ItineraryResponse, Pace,
};
pub use nearby::{NearbyExpansionRequest, NearbyExpansionResponse, NearbySuggestion};
pub use preferences::PreferenceRequest;
