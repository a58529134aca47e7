use async_trait::async_trait;
use parking_lot::RwLock;

use super::{OrderStore, StoreError, LIST_LIMIT};
use crate::models::{EcoSummary, NewOrder, Order};

/// Process-local store used when no database is configured.
#[derive(Default)]
pub struct MemoryOrderStore {
    orders: RwLock<Vec<Order>>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.read().is_empty()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn insert(&self, order: NewOrder) -> Result<Order, StoreError> {
        let order = Order::create(order);
        self.orders.write().push(order.clone());
        Ok(order)
    }

    async fn list_all(&self) -> Result<Vec<Order>, StoreError> {
        let orders = self.orders.read();
        Ok(orders.iter().take(LIST_LIMIT).cloned().collect())
    }

    async fn aggregate(&self) -> Result<EcoSummary, StoreError> {
        let orders = self.orders.read();
        let total_co2: f64 = orders.iter().map(|o| o.co2_value).sum();
        let score_sum: i64 = orders.iter().map(|o| i64::from(o.eco_score)).sum();
        Ok(EcoSummary::from_totals(orders.len() as u64, total_co2, score_sum))
    }
}
