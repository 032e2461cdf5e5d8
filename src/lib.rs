//! `Yatra` - Travel recommendation and itinerary planning for Indian destinations
//!
//! This library provides the core functionality for destination ranking,
//! multi-day itinerary generation, and nearby trip-expansion suggestions.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod geo;
pub mod itinerary;
pub mod models;
pub mod nearby;
pub mod recommender;
pub mod web;

// Re-export core types for public API
pub use catalog::Catalog;
pub use config::YatraConfig;
pub use error::YatraError;
pub use itinerary::generate_itinerary;
pub use models::{
    Attraction, Destination, ItineraryRequest, ItineraryResponse, NearbyExpansionRequest,
    NearbyExpansionResponse, PreferenceRequest,
};
pub use nearby::suggest_nearby_destinations;
pub use recommender::recommend_destinations;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, YatraError>;
