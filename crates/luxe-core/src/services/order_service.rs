//! Checkout orders and admin fulfillment updates

use std::sync::Arc;
use tracing::info;
use validator::Validate;

use luxe_shared::{Page, Pagination};

use crate::domain::{Order, OrderUpdate};
use crate::error::DomainError;
use crate::repositories::OrderRepository;

pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(orders: Arc<dyn OrderRepository>) -> Self {
        Self { orders }
    }

    pub async fn place(&self, order: Order) -> Result<Order, DomainError> {
        order.validate()?;
        let created = self.orders.create(&order).await?;
        info!("Order placed: {} ({})", created.order_number, created.id);
        Ok(created)
    }

    pub async fn list(&self, pagination: Pagination) -> Result<Page<Order>, DomainError> {
        let items = self
            .orders
            .list(pagination.skip(), pagination.limit as usize)
            .await?;
        let total = self.orders.count().await?;
        Ok(Page::new(items, total, pagination))
    }

    pub async fn get(&self, id: &str) -> Result<Order, DomainError> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound("Order"))
    }

    /// Merge the allow-listed fields into the stored order.
    pub async fn update(&self, id: &str, update: OrderUpdate) -> Result<Order, DomainError> {
        let mut order = self.get(id).await?;
        update.apply(&mut order);

        if !self.orders.replace(id, &order).await? {
            return Err(DomainError::NotFound("Order"));
        }
        info!("Order {} updated, status {}", order.order_number, order.status);
        Ok(order)
    }
}
