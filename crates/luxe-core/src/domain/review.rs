// ============================================================================
// Luxe Core - Review Entity
// File: crates/luxe-core/src/domain/review.rs
// Description: Customer product review with moderation status
// ============================================================================

use serde::{Deserialize, Serialize};
use validator::Validate;

use luxe_shared::utils::{new_id, now_iso};

/// Review moderation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Rejected => "rejected",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(ReviewStatus::Pending),
            "approved" => Some(ReviewStatus::Approved),
            "rejected" => Some(ReviewStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default = "new_id")]
    pub id: String,
    #[validate(length(min = 1, message = "Product id is required"))]
    pub product_id: String,
    pub order_id: String,
    pub customer_id: String,
    #[validate(length(min = 1, max = 100, message = "Customer name must be between 1 and 100 characters"))]
    pub customer_name: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i32,
    #[validate(length(max = 200, message = "Title too long"))]
    pub title: String,
    #[validate(length(max = 5000, message = "Comment too long"))]
    pub comment: String,
    #[serde(default)]
    pub status: ReviewStatus,
    pub admin_response: Option<String>,
    #[serde(default = "default_true")]
    pub verified_purchase: bool,
    #[serde(default = "now_iso")]
    pub created_at: String,
    #[serde(default = "now_iso")]
    pub updated_at: String,
}

fn default_true() -> bool {
    true
}

/// Moderation fields an admin may change on a review.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUpdate {
    pub status: Option<ReviewStatus>,
    pub admin_response: Option<String>,
}

impl ReviewUpdate {
    pub fn approves(&self) -> bool {
        self.status == Some(ReviewStatus::Approved)
    }

    pub fn apply(self, review: &mut Review) {
        if let Some(status) = self.status {
            review.status = status;
        }
        if let Some(response) = self.admin_response {
            review.admin_response = Some(response);
        }
        review.updated_at = now_iso();
    }
}

/// Aggregate of a product's approved reviews.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingSummary {
    pub average_rating: f64,
    pub review_count: i64,
}

impl RatingSummary {
    /// Mean rating rounded to one decimal. `None` when nothing is approved.
    pub fn from_approved(reviews: &[Review]) -> Option<Self> {
        let approved: Vec<&Review> = reviews
            .iter()
            .filter(|r| r.status == ReviewStatus::Approved)
            .collect();
        if approved.is_empty() {
            return None;
        }
        let sum: i64 = approved.iter().map(|r| r.rating as i64).sum();
        let mean = sum as f64 / approved.len() as f64;
        Some(Self {
            average_rating: (mean * 10.0).round() / 10.0,
            review_count: approved.len() as i64,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn sample_review(id: &str, product_id: &str, rating: i32, status: ReviewStatus) -> Review {
        let mut review: Review = serde_json::from_value(serde_json::json!({
            "id": id,
            "productId": product_id,
            "orderId": "o1",
            "customerId": "c1",
            "customerName": "Achieng",
            "rating": rating,
            "title": "Lovely",
            "comment": "Sparkles beautifully.",
        }))
        .unwrap();
        review.status = status;
        review
    }

    #[test]
    fn test_rating_validation() {
        assert!(sample_review("r1", "p1", 5, ReviewStatus::Pending).validate().is_ok());
        assert!(sample_review("r1", "p1", 6, ReviewStatus::Pending).validate().is_err());
        assert!(sample_review("r1", "p1", 0, ReviewStatus::Pending).validate().is_err());
    }

    #[test]
    fn test_update_allow_list() {
        let update: ReviewUpdate = serde_json::from_value(serde_json::json!({
            "status": "approved",
            "adminResponse": "Thank you!",
            "rating": 1,
        }))
        .unwrap();
        assert!(update.approves());

        let mut review = sample_review("r1", "p1", 5, ReviewStatus::Pending);
        update.apply(&mut review);
        assert_eq!(review.status, ReviewStatus::Approved);
        assert_eq!(review.rating, 5);
        assert_eq!(review.admin_response.as_deref(), Some("Thank you!"));
    }

    #[test]
    fn test_unknown_status_rejected() {
        let parsed: Result<ReviewUpdate, _> =
            serde_json::from_value(serde_json::json!({ "status": "published" }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_rating_summary_rounds() {
        let reviews = vec![
            sample_review("r1", "p1", 5, ReviewStatus::Approved),
            sample_review("r2", "p1", 4, ReviewStatus::Approved),
            sample_review("r3", "p1", 4, ReviewStatus::Approved),
            sample_review("r4", "p1", 1, ReviewStatus::Rejected),
        ];
        let summary = RatingSummary::from_approved(&reviews).unwrap();
        assert_eq!(summary.average_rating, 4.3);
        assert_eq!(summary.review_count, 3);

        assert!(RatingSummary::from_approved(&reviews[3..]).is_none());
    }
}
