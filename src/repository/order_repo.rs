use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::{OrderStore, StoreError, LIST_LIMIT};
use crate::models::{EcoBadge, EcoSummary, NewOrder, Order};

pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn order_from_row(row: &PgRow) -> Result<Order, StoreError> {
    let id: uuid::Uuid = row.try_get("id")?;
    let badge: String = row.try_get("eco_badge")?;
    let eco_badge = badge.parse::<EcoBadge>().map_err(|e| StoreError::Corrupt {
        id: id.to_string(),
        reason: e.to_string(),
    })?;

    Ok(Order {
        id,
        product_name: row.try_get("product_name")?,
        distance: row.try_get("distance")?,
        weight: row.try_get("weight")?,
        vehicle_type: row.try_get("vehicle_type")?,
        packaging_type: row.try_get("packaging_type")?,
        co2_value: row.try_get("co2_value")?,
        eco_score: row.try_get("eco_score")?,
        eco_badge,
        timestamp: row.try_get("created_at")?,
    })
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn insert(&self, order: NewOrder) -> Result<Order, StoreError> {
        let order = Order::create(order);

        sqlx::query(
            "INSERT INTO orders (id, product_name, distance, weight, vehicle_type, packaging_type,
                                 co2_value, eco_score, eco_badge, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(order.id)
        .bind(&order.product_name)
        .bind(order.distance)
        .bind(order.weight)
        .bind(&order.vehicle_type)
        .bind(&order.packaging_type)
        .bind(order.co2_value)
        .bind(order.eco_score)
        .bind(order.eco_badge.as_str())
        .bind(order.timestamp)
        .execute(&self.pool)
        .await?;

        tracing::debug!(order_id = %order.id, "order persisted");
        Ok(order)
    }

    async fn list_all(&self) -> Result<Vec<Order>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, product_name, distance, weight, vehicle_type, packaging_type,
                    co2_value, eco_score, eco_badge, created_at
             FROM orders
             ORDER BY seq
             LIMIT $1",
        )
        .bind(LIST_LIMIT as i64)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(order_from_row).collect()
    }

    async fn aggregate(&self) -> Result<EcoSummary, StoreError> {
        let row = sqlx::query(
            "SELECT COUNT(*) AS total_orders,
                    COALESCE(SUM(co2_value), 0)::DOUBLE PRECISION AS total_co2,
                    COALESCE(SUM(eco_score), 0)::BIGINT AS score_sum
             FROM orders",
        )
        .fetch_one(&self.pool)
        .await?;

        let total_orders: i64 = row.try_get("total_orders")?;
        let total_co2: f64 = row.try_get("total_co2")?;
        let score_sum: i64 = row.try_get("score_sum")?;

        Ok(EcoSummary::from_totals(total_orders.max(0) as u64, total_co2, score_sum))
    }
}
