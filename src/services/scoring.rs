use crate::models::EcoBadge;

/// Upper bounds (exclusive) on kg CO2 per km and the score each band earns.
const SCORE_BANDS: [(f64, i32); 5] = [(0.05, 95), (0.10, 85), (0.20, 70), (0.30, 55), (0.50, 40)];
const FLOOR_SCORE: i32 = 25;

/// Eco-score from emissions per kilometre. Distances below 1 km count as 1.
pub fn eco_score(co2_kg: f64, distance: f64) -> i32 {
    let co2_per_km = co2_kg / distance.max(1.0);

    SCORE_BANDS
        .iter()
        .find(|(limit, _)| co2_per_km < *limit)
        .map(|(_, score)| *score)
        .unwrap_or(FLOOR_SCORE)
}

pub fn badge(eco_score: i32) -> EcoBadge {
    if eco_score >= 80 {
        EcoBadge::Green
    } else if eco_score >= 50 {
        EcoBadge::Yellow
    } else {
        EcoBadge::Red
    }
}
