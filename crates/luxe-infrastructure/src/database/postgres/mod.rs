//! PostgreSQL repository implementations
//!
//! Every table stores one JSONB document per row, keyed by the entity id.

pub mod admin_store_impl;
pub mod product_repo_impl;
pub mod order_repo_impl;
pub mod review_repo_impl;
pub mod collection_repo_impl;
pub mod settings_repo_impl;
pub mod analytics_repo_impl;

pub use admin_store_impl::PgAdminStore;
pub use product_repo_impl::PgProductRepository;
pub use order_repo_impl::PgOrderRepository;
pub use review_repo_impl::PgReviewRepository;
pub use collection_repo_impl::PgCollectionRepository;
pub use settings_repo_impl::PgSettingsRepository;
pub use analytics_repo_impl::PgAnalyticsRepository;

use luxe_core::error::DomainError;
use tracing::error;

/// Log a driver error and convert it for the domain layer.
pub(crate) fn db_error(action: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        error!("Database error {}: {}", action, e);
        DomainError::DatabaseError(e.to_string())
    }
}
