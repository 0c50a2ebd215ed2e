//! Review submission and moderation

use std::sync::Arc;
use tracing::info;
use validator::Validate;

use luxe_shared::constants::REVIEW_LIST_LIMIT;

use crate::domain::{RatingSummary, Review, ReviewStatus, ReviewUpdate};
use crate::error::DomainError;
use crate::repositories::{ProductRepository, ReviewRepository};

pub struct ReviewService {
    reviews: Arc<dyn ReviewRepository>,
    products: Arc<dyn ProductRepository>,
}

impl ReviewService {
    pub fn new(reviews: Arc<dyn ReviewRepository>, products: Arc<dyn ProductRepository>) -> Self {
        Self { reviews, products }
    }

    pub async fn submit(&self, review: Review) -> Result<Review, DomainError> {
        review.validate()?;
        let created = self.reviews.create(&review).await?;
        info!("Review {} submitted for product {}", created.id, created.product_id);
        Ok(created)
    }

    pub async fn list(
        &self,
        product_id: Option<String>,
        status: Option<ReviewStatus>,
    ) -> Result<Vec<Review>, DomainError> {
        self.reviews.find(product_id, status, REVIEW_LIST_LIMIT).await
    }

    /// Apply a moderation decision. Approving a review refreshes the
    /// product's rating aggregate.
    pub async fn moderate(&self, id: &str, update: ReviewUpdate) -> Result<Review, DomainError> {
        let mut review = self
            .reviews
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound("Review"))?;

        let approves = update.approves();
        update.apply(&mut review);

        if !self.reviews.replace(id, &review).await? {
            return Err(DomainError::NotFound("Review"));
        }

        if approves {
            self.refresh_rating(&review.product_id).await?;
        }
        Ok(review)
    }

    async fn refresh_rating(&self, product_id: &str) -> Result<(), DomainError> {
        let approved = self
            .reviews
            .find(
                Some(product_id.to_string()),
                Some(ReviewStatus::Approved),
                REVIEW_LIST_LIMIT,
            )
            .await?;

        if let Some(summary) = RatingSummary::from_approved(&approved) {
            self.products.update_rating(product_id, summary).await?;
            info!(
                "Product {} rating now {} over {} reviews",
                product_id, summary.average_rating, summary.review_count
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::review::tests::sample_review;
    use crate::repositories::product_repository::MockProductRepository;
    use crate::repositories::review_repository::MockReviewRepository;

    #[tokio::test]
    async fn test_approval_recomputes_rating() {
        let mut reviews = MockReviewRepository::new();
        reviews
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_review(id, "p1", 4, ReviewStatus::Pending))));
        reviews.expect_replace().returning(|_, _| Ok(true));
        reviews
            .expect_find()
            .withf(|product, status, _| {
                product.as_deref() == Some("p1") && *status == Some(ReviewStatus::Approved)
            })
            .returning(|_, _, _| {
                Ok(vec![
                    sample_review("r1", "p1", 4, ReviewStatus::Approved),
                    sample_review("r2", "p1", 5, ReviewStatus::Approved),
                ])
            });

        let mut products = MockProductRepository::new();
        products
            .expect_update_rating()
            .withf(|id, s| id == "p1" && s.average_rating == 4.5 && s.review_count == 2)
            .times(1)
            .returning(|_, _| Ok(()));

        let update = ReviewUpdate {
            status: Some(ReviewStatus::Approved),
            admin_response: None,
        };
        let review = ReviewService::new(Arc::new(reviews), Arc::new(products))
            .moderate("r1", update)
            .await
            .unwrap();
        assert_eq!(review.status, ReviewStatus::Approved);
    }

    #[tokio::test]
    async fn test_rejection_leaves_rating() {
        let mut reviews = MockReviewRepository::new();
        reviews
            .expect_find_by_id()
            .returning(|id| Ok(Some(sample_review(id, "p1", 1, ReviewStatus::Pending))));
        reviews.expect_replace().returning(|_, _| Ok(true));
        reviews.expect_find().never();

        let mut products = MockProductRepository::new();
        products.expect_update_rating().never();

        let update = ReviewUpdate {
            status: Some(ReviewStatus::Rejected),
            admin_response: Some("Spam".to_string()),
        };
        ReviewService::new(Arc::new(reviews), Arc::new(products))
            .moderate("r1", update)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_moderate_missing_review() {
        let mut reviews = MockReviewRepository::new();
        reviews.expect_find_by_id().returning(|_| Ok(None));

        let err = ReviewService::new(Arc::new(reviews), Arc::new(MockProductRepository::new()))
            .moderate("r1", ReviewUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound("Review")));
    }
}
