use async_trait::async_trait;
use dashmap::DashMap;

use luxe_core::domain::{DateRange, Order};
use luxe_core::error::DomainError;
use luxe_core::repositories::OrderRepository;

#[derive(Default)]
pub struct MemoryOrderRepository {
    map: DashMap<String, Order>,
}

#[async_trait]
impl OrderRepository for MemoryOrderRepository {
    async fn create(&self, order: &Order) -> Result<Order, DomainError> {
        self.map.insert(order.id.clone(), order.clone());
        Ok(order.clone())
    }

    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<Order>, DomainError> {
        let mut orders: Vec<Order> = self.map.iter().map(|r| r.value().clone()).collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders.into_iter().skip(skip).take(limit).collect())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.map.len() as u64)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Order>, DomainError> {
        Ok(self.map.get(id).map(|o| o.value().clone()))
    }

    async fn replace(&self, id: &str, order: &Order) -> Result<bool, DomainError> {
        match self.map.get_mut(id) {
            Some(mut existing) => {
                *existing = order.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn find_confirmed(&self, range: &DateRange) -> Result<Vec<Order>, DomainError> {
        let mut orders: Vec<Order> = self
            .map
            .iter()
            .filter(|r| r.payment.is_confirmed() && range.contains(&r.created_at))
            .map(|r| r.value().clone())
            .collect();
        orders.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(orders)
    }
}
