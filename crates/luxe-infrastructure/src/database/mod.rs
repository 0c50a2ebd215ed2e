//! Database module

pub mod connection;
pub mod postgres;

pub use connection::{create_pool, run_migrations};
pub use postgres::{
    PgAdminStore, PgAnalyticsRepository, PgCollectionRepository, PgOrderRepository,
    PgProductRepository, PgReviewRepository, PgSettingsRepository,
};
