use crate::models::PackagingAdvice;
use crate::utils::round2;

const FRAGILE_REASONING: &str = "Reusable protective packaging recommended for fragile items.";
const BULKY_REASONING: &str =
    "Circular packaging system ideal for large items with return logistics.";
const DEFAULT_REASONING: &str =
    "Reusable packaging provides best balance of protection and sustainability.";

const HEAVY_WEIGHT_KG: f64 = 5.0;
const LARGE_VOLUME: f64 = 1000.0;
const SAVINGS_PER_KG: f64 = 0.2;

/// Picks a packaging type for a product. First matching branch wins.
pub fn optimize_packaging(weight: f64, volume: f64, fragile: bool) -> PackagingAdvice {
    let (best, savings_factor, reasoning) = if fragile {
        ("reusable", 0.5, FRAGILE_REASONING)
    } else if weight > HEAVY_WEIGHT_KG || volume > LARGE_VOLUME {
        ("circular", 0.8, BULKY_REASONING)
    } else {
        ("reusable", 0.6, DEFAULT_REASONING)
    };

    PackagingAdvice {
        best_packaging_type: best.to_string(),
        co2_saved_estimate: round2(savings_factor * weight * SAVINGS_PER_KG),
        reasoning: reasoning.to_string(),
    }
}
