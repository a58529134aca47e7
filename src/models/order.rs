use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EcoBadge;
use crate::services::scoring;
use crate::utils::{round2, round_to};

/// Order as submitted by the client. `co2_value` and `eco_score` are taken
/// as given; nothing here is recomputed from the delivery fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewOrder {
    pub product_name: String,
    pub distance: f64,
    pub weight: f64,
    pub vehicle_type: String,
    pub packaging_type: String,
    pub co2_value: f64,
    pub eco_score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub product_name: String,
    pub distance: f64,
    pub weight: f64,
    pub vehicle_type: String,
    pub packaging_type: String,
    pub co2_value: f64,
    pub eco_score: i32,
    pub eco_badge: EcoBadge,
    pub timestamp: DateTime<Utc>,
}

impl Order {
    /// Stamps a submitted order with a fresh id, the current UTC time and the
    /// badge for its eco-score.
    pub fn create(new: NewOrder) -> Self {
        Self {
            id: Uuid::new_v4(),
            eco_badge: scoring::badge(new.eco_score),
            // Postgres keeps microseconds; match it so both stores agree.
            timestamp: Utc::now().trunc_subsecs(6),
            product_name: new.product_name,
            distance: new.distance,
            weight: new.weight,
            vehicle_type: new.vehicle_type,
            packaging_type: new.packaging_type,
            co2_value: new.co2_value,
            eco_score: new.eco_score,
        }
    }
}

/// Running aggregate over every stored order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EcoSummary {
    pub eco_score: i32,
    pub total_co2: f64,
    pub total_orders: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_co2_per_order: Option<f64>,
}

impl EcoSummary {
    pub const EMPTY_SCORE: i32 = 100;

    pub fn from_totals(total_orders: u64, total_co2: f64, eco_score_sum: i64) -> Self {
        if total_orders == 0 {
            return Self {
                eco_score: Self::EMPTY_SCORE,
                total_co2: 0.0,
                total_orders: 0,
                avg_co2_per_order: None,
            };
        }

        let count = total_orders as f64;
        Self {
            eco_score: round_to(eco_score_sum as f64 / count, 0) as i32,
            total_co2: round2(total_co2),
            total_orders,
            avg_co2_per_order: Some(round2(total_co2 / count)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewOrder {
        NewOrder {
            product_name: "Bamboo toothbrush".to_string(),
            distance: 25.0,
            weight: 1.5,
            vehicle_type: "ev".to_string(),
            packaging_type: "reusable".to_string(),
            co2_value: 2.3,
            eco_score: 85,
        }
    }

    #[test]
    fn test_create_derives_badge_from_score() {
        let order = Order::create(sample());
        assert_eq!(order.eco_badge, EcoBadge::Green);

        let mut low = sample();
        low.eco_score = 40;
        assert_eq!(Order::create(low).eco_badge, EcoBadge::Red);
    }

    #[test]
    fn test_create_generates_unique_ids() {
        let a = Order::create(sample());
        let b = Order::create(sample());
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.get_version_num(), 4);
    }

    #[test]
    fn test_create_keeps_caller_values() {
        let order = Order::create(sample());
        assert_eq!(order.product_name, "Bamboo toothbrush");
        assert_eq!(order.co2_value, 2.3);
        assert_eq!(order.eco_score, 85);
        assert_eq!(order.timestamp.timestamp_subsec_nanos() % 1_000, 0);
    }

    #[test]
    fn test_empty_summary() {
        let summary = EcoSummary::from_totals(0, 0.0, 0);
        assert_eq!(summary.eco_score, 100);
        assert_eq!(summary.total_co2, 0.0);
        assert_eq!(summary.total_orders, 0);
        assert!(summary.avg_co2_per_order.is_none());

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json.get("avg_co2_per_order").is_none());
    }

    #[test]
    fn test_summary_averages() {
        let summary = EcoSummary::from_totals(3, 10.0, 85 + 55 + 70);
        assert_eq!(summary.eco_score, 70);
        assert_eq!(summary.total_co2, 10.0);
        assert_eq!(summary.total_orders, 3);
        assert_eq!(summary.avg_co2_per_order, Some(3.33));
    }
}
