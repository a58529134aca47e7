use crate::models::{PackagingType, VehicleType};

pub const SWITCH_TO_EV: &str = "Switch to EV delivery to reduce emissions by up to 70%.";
pub const USE_REUSABLE: &str = "Use reusable packaging to cut CO₂ by 60%.";
pub const CONSOLIDATE: &str =
    "Consider consolidating orders or choosing local suppliers to reduce distance.";
pub const OPTIMIZE_ROUTE: &str =
    "Optimize load efficiency and route planning to lower your carbon footprint.";
pub const TRY_CIRCULAR: &str = "Try circular packaging systems for maximum sustainability.";
pub const ALREADY_ECO_FRIENDLY: &str = "Great job! Your delivery is already eco-friendly.";

const MAX_SENTENCES: usize = 2;

/// Recommendation text for a delivery. Rules are evaluated in a fixed order
/// and at most the first two that fire are returned.
pub fn advise(vehicle: VehicleType, packaging: PackagingType, co2_kg: f64, distance: f64) -> String {
    let rules = [
        (vehicle.burns_fuel(), SWITCH_TO_EV),
        (packaging == PackagingType::SingleUse, USE_REUSABLE),
        (distance > 50.0, CONSOLIDATE),
        (co2_kg > 10.0, OPTIMIZE_ROUTE),
        (packaging != PackagingType::Circular, TRY_CIRCULAR),
    ];

    let fired: Vec<&str> = rules
        .iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, message)| *message)
        .take(MAX_SENTENCES)
        .collect();

    if fired.is_empty() {
        ALREADY_ECO_FRIENDLY.to_string()
    } else {
        fired.join(" ")
    }
}
