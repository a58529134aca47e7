pub mod advice;
pub mod emissions;
pub mod footprint;
pub mod packaging;
pub mod scoring;

use std::sync::Arc;

use crate::config::{database, Config};
use crate::models::{DeliveryRequest, EmissionResult, PackagingType, VehicleType};
use crate::repository::{MemoryOrderStore, OrderStore, PgOrderStore};

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn OrderStore>,
}

impl AppState {
    /// Connects the order store named by `config`: Postgres when a database
    /// URL is set, otherwise an in-process store.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store: Arc<dyn OrderStore> = match config.database_url.as_deref() {
            Some(url) => {
                let pool = database::create_pool(url, &config).await?;
                database::init_db(&pool).await?;
                tracing::info!("using postgres order store");
                Arc::new(PgOrderStore::new(pool))
            }
            None => {
                tracing::warn!("DATABASE_URL not set, orders will not survive a restart");
                Arc::new(MemoryOrderStore::new())
            }
        };

        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: Config, store: Arc<dyn OrderStore>) -> Self {
        Self { config, store }
    }
}

/// Runs estimator, classifier and advice generator for one delivery.
pub fn predict(request: &DeliveryRequest) -> EmissionResult {
    let vehicle = VehicleType::from_label(&request.vehicle_type);
    let packaging = PackagingType::from_label(&request.packaging_type);

    let co2_kg = emissions::estimate(
        request.distance,
        request.weight,
        vehicle,
        packaging,
        request.load_efficiency,
    );
    let eco_score = scoring::eco_score(co2_kg, request.distance);

    EmissionResult {
        predicted_co2_kg: co2_kg,
        eco_score,
        advice: advice::advise(vehicle, packaging, co2_kg, request.distance),
        eco_badge: scoring::badge(eco_score),
    }
}
