pub mod badge;
pub mod delivery;
pub mod footprint;
pub mod order;
pub mod packaging;

pub use badge::EcoBadge;
pub use delivery::{DeliveryRequest, EmissionResult, PackagingType, VehicleType};
pub use order::{EcoSummary, NewOrder, Order};
pub use packaging::{PackagingAdvice, PackagingRequest};
