//! Order repository trait (port)

use async_trait::async_trait;

use crate::domain::{DateRange, Order};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, order: &Order) -> Result<Order, DomainError>;
    /// Newest first.
    async fn list(&self, skip: usize, limit: usize) -> Result<Vec<Order>, DomainError>;
    async fn count(&self) -> Result<u64, DomainError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Order>, DomainError>;
    async fn replace(&self, id: &str, order: &Order) -> Result<bool, DomainError>;
    /// Orders whose payment is confirmed and whose `createdAt` lies in `range`.
    async fn find_confirmed(&self, range: &DateRange) -> Result<Vec<Order>, DomainError>;
}
