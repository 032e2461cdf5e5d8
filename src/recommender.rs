//! Content-based destination recommender
//!
//! Encodes destinations and user preferences into a shared feature space
//! (tag indicators plus categorical one-hot blocks) and ranks destinations
//! by cosine similarity. Everything is recomputed per call from the input
//! collection; there is no trained or persisted state.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::models::{Destination, PreferenceRequest};

/// Canonical budget tier labels, in slot order
const BUDGET_LEVELS: [&str; 3] = ["budget", "mid", "premium"];
/// Canonical climate labels, in slot order
const CLIMATES: [&str; 3] = ["cold", "moderate", "warm"];
/// Canonical crowd level labels, in slot order
const CROWD_LEVELS: [&str; 3] = ["low", "medium", "high"];
/// Canonical region labels, in slot order
const REGIONS: [&str; 5] = ["North", "South", "East", "West", "Northeast"];

/// Deterministic mapping from lowercased descriptive tag to vector slot
///
/// Built fresh from the current destination set on every call. Slots are
/// assigned in sorted tag order, so the same input set always produces the
/// same layout regardless of collection iteration order.
#[derive(Debug, Clone)]
pub struct TagVocabulary {
    slots: BTreeMap<String, usize>,
}

impl TagVocabulary {
    /// Collect the distinct lowercased tags across the full collection and
    /// assign them stable integer slots in sorted order
    #[must_use]
    pub fn build(destinations: &[Destination]) -> Self {
        let tags: BTreeSet<String> = destinations
            .iter()
            .flat_map(|d| d.tags.iter().map(|t| t.to_lowercase()))
            .collect();

        let slots = tags
            .into_iter()
            .enumerate()
            .map(|(idx, tag)| (tag, idx))
            .collect();

        Self { slots }
    }

    /// Number of tag slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot for a tag, matched case-insensitively; unknown tags have none
    #[must_use]
    pub fn slot(&self, tag: &str) -> Option<usize> {
        self.slots.get(&tag.to_lowercase()).copied()
    }
}

/// One-hot encode a nullable value against an ordered list of allowed labels.
///
/// Comparison is case-insensitive; a null or unmatched value yields the
/// all-zero vector rather than an error.
#[must_use]
pub fn one_hot(value: Option<&str>, allowed: &[&str]) -> Vec<f64> {
    let mut vec = vec![0.0; allowed.len()];
    if let Some(value) = value {
        if let Some(idx) = allowed
            .iter()
            .position(|label| label.eq_ignore_ascii_case(value))
        {
            vec[idx] = 1.0;
        }
    }
    vec
}

/// Encode a destination into a numeric feature vector.
///
/// Layout: [tag indicators | budget tier (3) | climate (3) | crowd level (3)
/// | region (5)].
#[must_use]
pub fn encode_destination(destination: &Destination, vocab: &TagVocabulary) -> Vec<f64> {
    let mut features = vec![0.0; vocab.len()];
    for tag in &destination.tags {
        if let Some(idx) = vocab.slot(tag) {
            features[idx] = 1.0;
        }
    }

    features.extend(one_hot(
        Some(destination.budget_level.as_str()),
        &BUDGET_LEVELS,
    ));
    features.extend(one_hot(Some(destination.climate.as_str()), &CLIMATES));
    features.extend(one_hot(Some(destination.crowd_level.as_str()), &CROWD_LEVELS));
    features.extend(one_hot(Some(destination.region.as_str()), &REGIONS));
    features
}

/// Encode user preferences into the same feature space as destinations.
///
/// Tags absent from the vocabulary are dropped. Budget preference names are
/// normalized first (low/budget, mid/medium, high/premium). The region block
/// stays all-zero: preferences never currently express a region.
#[must_use]
pub fn encode_preferences(prefs: &PreferenceRequest, vocab: &TagVocabulary) -> Vec<f64> {
    let mut features = vec![0.0; vocab.len()];
    for tag in &prefs.tags {
        if let Some(idx) = vocab.slot(tag) {
            features[idx] = 1.0;
        }
    }

    // Normalize historic level names if they appear
    let budget = prefs.budget_level.as_ref().map(|value| {
        let lowered = value.to_lowercase();
        match lowered.as_str() {
            "low" | "budget" => "budget".to_string(),
            "mid" | "medium" => "mid".to_string(),
            "high" | "premium" => "premium".to_string(),
            _ => lowered,
        }
    });

    features.extend(one_hot(budget.as_deref(), &BUDGET_LEVELS));
    features.extend(one_hot(prefs.climate.as_deref(), &CLIMATES));
    features.extend(one_hot(prefs.crowd_level.as_deref(), &CROWD_LEVELS));
    features.extend(vec![0.0; REGIONS.len()]);
    features
}

/// Cosine similarity of two equal-length vectors.
///
/// Defined as 0 when either vector has zero magnitude, so degenerate inputs
/// never produce NaN.
#[must_use]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Rank destinations against user preferences using content-based filtering
/// and cosine similarity, returning the top `min(top_k, N)` destinations in
/// descending score order. Ties keep the input order (stable sort).
#[must_use]
pub fn recommend_destinations(
    destinations: &[Destination],
    preferences: &PreferenceRequest,
) -> Vec<Destination> {
    if destinations.is_empty() {
        return Vec::new();
    }

    let vocab = TagVocabulary::build(destinations);
    let pref_vector = encode_preferences(preferences, &vocab);

    let mut ranked: Vec<(&Destination, f64)> = destinations
        .iter()
        .map(|d| {
            let score = cosine_similarity(&pref_vector, &encode_destination(d, &vocab));
            (d, score)
        })
        .collect();

    // Stable sort: equal scores preserve catalog order
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    debug!(
        candidates = ranked.len(),
        top_k = preferences.top_k,
        "Ranked destinations against preference vector"
    );

    ranked
        .into_iter()
        .take(preferences.top_k.min(destinations.len()))
        .map(|(d, _)| d.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetTier, Climate, CrowdLevel, Region};
    use rstest::rstest;

    fn destination(id: u32, name: &str, tags: &[&str], region: Region) -> Destination {
        Destination {
            id,
            name: name.to_string(),
            country: "India".to_string(),
            state: "Test State".to_string(),
            region,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            budget_level: BudgetTier::Mid,
            avg_daily_cost_inr: 4000,
            climate: Climate::Moderate,
            crowd_level: CrowdLevel::Medium,
            best_season: "Oct-Mar".to_string(),
            travel_type: vec![],
            latitude: 20.0,
            longitude: 77.0,
        }
    }

    fn catalog() -> Vec<Destination> {
        vec![
            destination(1, "Rishikesh", &["Spiritual", "Adventure"], Region::North),
            destination(2, "Goa", &["Beach", "Nightlife"], Region::West),
            destination(3, "Munnar", &["Hill station", "Nature"], Region::South),
            destination(4, "Jaipur", &["Heritage & Forts"], Region::North),
            destination(5, "Kaziranga", &["Wildlife", "Nature"], Region::Northeast),
        ]
    }

    #[test]
    fn test_vocabulary_is_sorted_and_deduplicated() {
        let vocab = TagVocabulary::build(&catalog());
        assert_eq!(vocab.len(), 8);
        // "adventure" sorts first, so it owns slot 0
        assert_eq!(vocab.slot("Adventure"), Some(0));
        assert_eq!(vocab.slot("adventure"), Some(0));
        assert_eq!(vocab.slot("unknown tag"), None);
    }

    #[test]
    fn test_one_hot_matches_case_insensitively() {
        let vec = one_hot(Some("PREMIUM"), &BUDGET_LEVELS);
        assert_eq!(vec, vec![0.0, 0.0, 1.0]);
    }

    #[rstest]
    #[case(None)]
    #[case(Some("luxury"))]
    fn test_one_hot_null_or_unmatched_is_all_zero(#[case] value: Option<&str>) {
        let vec = one_hot(value, &BUDGET_LEVELS);
        assert_eq!(vec, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_encoded_vectors_share_a_layout() {
        let destinations = catalog();
        let vocab = TagVocabulary::build(&destinations);

        let dest_vec = encode_destination(&destinations[0], &vocab);
        let pref_vec = encode_preferences(&PreferenceRequest::default(), &vocab);
        assert_eq!(dest_vec.len(), vocab.len() + 3 + 3 + 3 + 5);
        assert_eq!(dest_vec.len(), pref_vec.len());

        // Preference region block is always neutral
        assert!(pref_vec[pref_vec.len() - 5..].iter().all(|&v| v == 0.0));
    }

    #[rstest]
    #[case("low", 0)]
    #[case("Budget", 0)]
    #[case("medium", 1)]
    #[case("mid", 1)]
    #[case("high", 2)]
    #[case("premium", 2)]
    fn test_budget_synonyms_normalize(#[case] name: &str, #[case] slot: usize) {
        let vocab = TagVocabulary::build(&[]);
        let prefs = PreferenceRequest {
            budget_level: Some(name.to_string()),
            ..PreferenceRequest::default()
        };
        let vec = encode_preferences(&prefs, &vocab);
        let budget_block = &vec[0..3];
        assert_eq!(budget_block[slot], 1.0);
        assert_eq!(budget_block.iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn test_cosine_similarity_of_zero_vector_is_zero() {
        let zero = vec![0.0; 4];
        let other = vec![1.0, 0.0, 1.0, 0.0];
        assert_eq!(cosine_similarity(&zero, &other), 0.0);
        assert_eq!(cosine_similarity(&other, &zero), 0.0);
    }

    #[test]
    fn test_cosine_similarity_of_identical_vectors_is_one() {
        let v = vec![1.0, 2.0, 3.0];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_recommend_returns_top_k_members_of_catalog() {
        let destinations = catalog();
        let prefs = PreferenceRequest {
            tags: vec!["Wildlife".to_string(), "Nature".to_string()],
            top_k: 3,
            ..PreferenceRequest::default()
        };

        let ranked = recommend_destinations(&destinations, &prefs);
        assert_eq!(ranked.len(), 3);
        for dest in &ranked {
            assert!(destinations.iter().any(|d| d.id == dest.id));
        }
        // Kaziranga carries both requested tags and must rank first
        assert_eq!(ranked[0].name, "Kaziranga");
    }

    #[test]
    fn test_recommend_empty_catalog_returns_empty() {
        let ranked = recommend_destinations(&[], &PreferenceRequest::default());
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_recommend_empty_preferences_is_stable() {
        // With no tags and no categorical preferences the preference vector
        // is all-zero, every score is 0, and the stable sort keeps the
        // catalog order.
        let destinations = catalog();
        let prefs = PreferenceRequest {
            top_k: 5,
            ..PreferenceRequest::default()
        };

        let ranked = recommend_destinations(&destinations, &prefs);
        let ids: Vec<u32> = ranked.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_top_k_larger_than_catalog_returns_all() {
        let destinations = catalog();
        let prefs = PreferenceRequest {
            top_k: 20,
            ..PreferenceRequest::default()
        };
        let ranked = recommend_destinations(&destinations, &prefs);
        assert_eq!(ranked.len(), destinations.len());
    }
}
