//! Product repository trait (port)

use async_trait::async_trait;

use crate::domain::{Product, ProductFilter, ProductSort, RatingSummary};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find(
        &self,
        filter: &ProductFilter,
        sort: ProductSort,
        skip: usize,
        limit: usize,
    ) -> Result<Vec<Product>, DomainError>;
    async fn count(&self, filter: &ProductFilter) -> Result<u64, DomainError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, DomainError>;
    /// Returns the product after the increment, `None` if it does not exist.
    async fn increment_view_count(&self, id: &str) -> Result<Option<Product>, DomainError>;
    async fn create(&self, product: &Product) -> Result<Product, DomainError>;
    /// Returns `false` when no product has this id.
    async fn replace(&self, id: &str, product: &Product) -> Result<bool, DomainError>;
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
    async fn top_sellers(&self, limit: usize) -> Result<Vec<Product>, DomainError>;
    async fn update_rating(&self, id: &str, summary: RatingSummary) -> Result<(), DomainError>;
}
