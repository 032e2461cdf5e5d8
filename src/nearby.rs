//! Nearby destination suggestions for trip expansion
//!
//! Filters the catalog to destinations within a radius of the origin and
//! labels each with a feasibility flag derived from the traveler's extra
//! days and budget.

use tracing::debug;

use crate::Result;
use crate::error::YatraError;
use crate::geo::haversine_km;
use crate::models::{
    Destination, NearbyExpansionRequest, NearbyExpansionResponse, NearbySuggestion,
};

/// Minimum extra days for an expansion to count as feasible
const MIN_EXTRA_DAYS: u32 = 1;
/// Minimum extra budget for an expansion to count as feasible
const MIN_EXTRA_BUDGET: f64 = 200.0;

/// Suggest destinations within `radius_km` of the origin, sorted by
/// ascending distance.
///
/// Feasibility is a fixed threshold on the provided buffer (extra days and
/// budget) and is deliberately independent of distance and per-destination
/// cost, so it is identical for every suggestion in a response. Fails with
/// [`YatraError::NotFound`] when the origin id is absent from the catalog.
pub fn suggest_nearby_destinations(
    destinations: &[Destination],
    request: &NearbyExpansionRequest,
) -> Result<NearbyExpansionResponse> {
    let origin = destinations
        .iter()
        .find(|d| d.id == request.destination_id)
        .ok_or(YatraError::NotFound {
            id: request.destination_id,
        })?;
    let origin_point = origin.coordinates();

    let feasible = request.extra_days >= MIN_EXTRA_DAYS && request.extra_budget >= MIN_EXTRA_BUDGET;

    let mut suggestions: Vec<NearbySuggestion> = destinations
        .iter()
        .filter(|dest| dest.id != origin.id)
        .filter_map(|dest| {
            let distance = haversine_km(origin_point, dest.coordinates());
            if distance > request.radius_km {
                return None;
            }

            let verdict = if feasible {
                "doable with provided buffer"
            } else {
                "might need more days/budget"
            };

            Some(NearbySuggestion {
                destination_id: dest.id,
                name: dest.name.clone(),
                country: dest.country.clone(),
                distance_km: (distance * 10.0).round() / 10.0,
                feasible,
                notes: format!("{distance:.1} km away; {verdict}"),
            })
        })
        .collect();

    suggestions.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

    debug!(
        origin = %origin.name,
        radius_km = request.radius_km,
        suggestions = suggestions.len(),
        "Collected nearby expansion suggestions"
    );

    Ok(NearbyExpansionResponse {
        origin_destination_id: origin.id,
        suggestions,
    })
}
