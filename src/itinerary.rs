//! Multi-day itinerary generation
//!
//! Scores a destination's attractions against the trip constraints, then
//! greedily distributes them across the requested days under a
//! pace-dependent daily hour cap.

use std::collections::HashSet;

use tracing::debug;

use crate::Result;
use crate::error::YatraError;
use crate::geo::haversine_km;
use crate::models::{
    Attraction, Destination, ItineraryActivity, ItineraryDay, ItineraryRequest, ItineraryResponse,
};

/// Linear proximity falloff reaches zero at this distance from the
/// destination center
const PROXIMITY_FALLOFF_KM: f64 = 50.0;

/// Build a multi-day itinerary for the requested destination.
///
/// Fails with [`YatraError::NotFound`] when the destination id is absent
/// from the supplied catalog. A destination with no attractions still yields
/// every requested day, each empty with zero cost.
pub fn generate_itinerary(
    destinations: &[Destination],
    attractions: &[Attraction],
    request: &ItineraryRequest,
) -> Result<ItineraryResponse> {
    let destination = find_destination(destinations, request.destination_id)?;
    let center = destination.coordinates();

    let candidates: Vec<&Attraction> = attractions
        .iter()
        .filter(|a| a.destination_id == destination.id)
        .collect();
    let scored = score_attractions(&candidates, request, center);

    debug!(
        destination = %destination.name,
        candidates = scored.len(),
        days = request.days,
        "Distributing attractions into days"
    );

    let days = distribute_into_days(scored, request, center);
    Ok(ItineraryResponse {
        destination_id: destination.id,
        destination_name: destination.name.clone(),
        days,
    })
}

fn find_destination(destinations: &[Destination], id: u32) -> Result<&Destination> {
    destinations
        .iter()
        .find(|d| d.id == id)
        .ok_or(YatraError::NotFound { id })
}

/// Score candidates by interest fit, cost fit, and proximity to the
/// destination center, returning them in descending score order. The order
/// defines visitation priority, not physical route order.
fn score_attractions<'a>(
    attractions: &[&'a Attraction],
    request: &ItineraryRequest,
    center: (f64, f64),
) -> Vec<(&'a Attraction, f64)> {
    let per_day_budget = if request.days > 0 {
        request.budget / f64::from(request.days)
    } else {
        0.0
    };
    let interests: HashSet<String> = request.interests.iter().map(|i| i.to_lowercase()).collect();

    let mut scored: Vec<(&Attraction, f64)> = attractions
        .iter()
        .map(|attraction| {
            let interest_fit = if interests.contains(&attraction.category.to_lowercase()) {
                1.0
            } else {
                0.4
            };
            let cost_fit = if per_day_budget > 0.0 {
                (1.0 - attraction.cost / per_day_budget).max(0.0)
            } else {
                0.8
            };
            let distance = haversine_km(center, attraction.coordinates());
            let proximity_fit = (1.0 - (distance / PROXIMITY_FALLOFF_KM).min(1.0)).max(0.0);

            let score = 0.5 * interest_fit + 0.2 * cost_fit + 0.2 * proximity_fit + 0.1;
            (*attraction, score)
        })
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored
}

/// Greedily fill each day from the score-sorted pool under the pace cap.
///
/// Days other than the last aim for a soft target of 1.3x the average
/// candidate hours per day (capped at the pace cap) so attractions spread
/// evenly; the last day targets the full cap to drain the pool. Attractions
/// whose duration would push a day past the cap are skipped, not removed.
fn distribute_into_days(
    scored: Vec<(&Attraction, f64)>,
    request: &ItineraryRequest,
    center: (f64, f64),
) -> Vec<ItineraryDay> {
    let max_hours = request.pace.daily_hour_cap();
    let total_hours: f64 = scored.iter().map(|(a, _)| a.visit_duration).sum();
    let target_hours_per_day = if request.days > 0 {
        total_hours / f64::from(request.days)
    } else {
        max_hours
    };

    let mut remaining = scored;
    let mut days = Vec::with_capacity(request.days as usize);

    for day_num in 1..=request.days {
        let is_last_day = day_num == request.days;
        let target_for_day = if is_last_day {
            max_hours
        } else {
            (target_hours_per_day * 1.3).min(max_hours)
        };

        let mut day_hours = 0.0;
        let mut activities: Vec<ItineraryActivity> = Vec::new();
        // Distances chain from the previous accepted stop, starting fresh
        // from the destination center each day
        let mut last_point = center;

        let mut idx = 0;
        while idx < remaining.len() {
            let (attraction, _score) = remaining[idx];

            if day_hours + attraction.visit_duration > max_hours {
                idx += 1;
                continue;
            }
            if day_hours >= target_for_day && !is_last_day {
                break;
            }

            let distance = haversine_km(last_point, attraction.coordinates());
            activities.push(ItineraryActivity {
                attraction_id: attraction.id,
                name: attraction.name.clone(),
                category: attraction.category.clone(),
                estimated_time_hours: attraction.visit_duration,
                estimated_cost: attraction.cost,
                latitude: attraction.latitude,
                longitude: attraction.longitude,
                distance_from_prev_km: Some(distance),
            });
            day_hours += attraction.visit_duration;
            last_point = attraction.coordinates();
            remaining.remove(idx);
            // Keep idx in place: removal shifted the next candidate here
        }

        let estimated_day_cost = activities.iter().map(|a| a.estimated_cost).sum();
        days.push(ItineraryDay {
            day: day_num,
            activities,
            estimated_day_cost,
        });
        // Every requested day is emitted even when the pool runs dry
    }

    days
}
