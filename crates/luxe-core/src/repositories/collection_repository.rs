//! Collection repository trait (port)

use async_trait::async_trait;

use crate::domain::Collection;
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// Ordered by `displayOrder` ascending.
    async fn list(&self, limit: usize) -> Result<Vec<Collection>, DomainError>;
    async fn create(&self, collection: &Collection) -> Result<Collection, DomainError>;
    async fn replace(&self, id: &str, collection: &Collection) -> Result<bool, DomainError>;
}
