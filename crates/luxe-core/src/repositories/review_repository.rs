//! Review repository trait (port)

use async_trait::async_trait;

use crate::domain::{Review, ReviewStatus};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: &Review) -> Result<Review, DomainError>;
    /// Newest first, optionally narrowed by product and status.
    async fn find(
        &self,
        product_id: Option<String>,
        status: Option<ReviewStatus>,
        limit: usize,
    ) -> Result<Vec<Review>, DomainError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Review>, DomainError>;
    async fn replace(&self, id: &str, review: &Review) -> Result<bool, DomainError>;
}
