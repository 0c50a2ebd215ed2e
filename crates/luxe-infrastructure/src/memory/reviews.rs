use async_trait::async_trait;
use dashmap::DashMap;

use luxe_core::domain::{Review, ReviewStatus};
use luxe_core::error::DomainError;
use luxe_core::repositories::ReviewRepository;

#[derive(Default)]
pub struct MemoryReviewRepository {
    map: DashMap<String, Review>,
}

#[async_trait]
impl ReviewRepository for MemoryReviewRepository {
    async fn create(&self, review: &Review) -> Result<Review, DomainError> {
        self.map.insert(review.id.clone(), review.clone());
        Ok(review.clone())
    }

    async fn find(
        &self,
        product_id: Option<String>,
        status: Option<ReviewStatus>,
        limit: usize,
    ) -> Result<Vec<Review>, DomainError> {
        let mut reviews: Vec<Review> = self
            .map
            .iter()
            .filter(|r| product_id.as_deref().map_or(true, |p| r.product_id == p))
            .filter(|r| status.map_or(true, |s| r.status == s))
            .map(|r| r.value().clone())
            .collect();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reviews.truncate(limit);
        Ok(reviews)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Review>, DomainError> {
        Ok(self.map.get(id).map(|r| r.value().clone()))
    }

    async fn replace(&self, id: &str, review: &Review) -> Result<bool, DomainError> {
        match self.map.get_mut(id) {
            Some(mut existing) => {
                *existing = review.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
