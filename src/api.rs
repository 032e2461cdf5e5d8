//! HTTP API surface
//!
//! Thin axum layer over the core operations: deserialization, request
//! validation, and mapping core failures to HTTP status codes. All
//! algorithmic work lives in the `recommender`, `itinerary`, and `nearby`
//! modules.

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde_json::{Value, json};

use crate::{
    VERSION,
    catalog::Catalog,
    error::YatraError,
    itinerary::generate_itinerary,
    models::{
        Destination, ItineraryRequest, ItineraryResponse, NearbyExpansionRequest,
        NearbyExpansionResponse, PreferenceRequest,
    },
    nearby::suggest_nearby_destinations,
    recommender::recommend_destinations,
};

type ApiError = (StatusCode, Json<Value>);

/// Build the API router over a shared catalog
pub fn router(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/meta", get(meta))
        .route("/recommend-destinations", post(recommend_destinations_route))
        .route("/generate-itinerary", post(generate_itinerary_route))
        .route("/nearby-expansions", post(nearby_expansions_route))
        .with_state(catalog)
}

fn into_api_error(err: &YatraError) -> ApiError {
    let status = match err {
        YatraError::NotFound { .. } => StatusCode::NOT_FOUND,
        YatraError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "detail": err.user_message() })))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn meta() -> Json<Value> {
    Json(json!({ "app": "yatra", "version": VERSION }))
}

async fn recommend_destinations_route(
    State(catalog): State<Arc<Catalog>>,
    Json(preferences): Json<PreferenceRequest>,
) -> Result<Json<Vec<Destination>>, ApiError> {
    preferences.validate().map_err(|e| into_api_error(&e))?;
    // An empty catalog is a valid, empty recommendation set, not an error
    let ranked = recommend_destinations(&catalog.destinations, &preferences);
    Ok(Json(ranked))
}

async fn generate_itinerary_route(
    State(catalog): State<Arc<Catalog>>,
    Json(payload): Json<ItineraryRequest>,
) -> Result<Json<ItineraryResponse>, ApiError> {
    payload.validate().map_err(|e| into_api_error(&e))?;
    let response = generate_itinerary(&catalog.destinations, &catalog.attractions, &payload)
        .map_err(|e| into_api_error(&e))?;
    Ok(Json(response))
}

async fn nearby_expansions_route(
    State(catalog): State<Arc<Catalog>>,
    Json(payload): Json<NearbyExpansionRequest>,
) -> Result<Json<NearbyExpansionResponse>, ApiError> {
    payload.validate().map_err(|e| into_api_error(&e))?;
    let response = suggest_nearby_destinations(&catalog.destinations, &payload)
        .map_err(|e| into_api_error(&e))?;
    Ok(Json(response))
}
