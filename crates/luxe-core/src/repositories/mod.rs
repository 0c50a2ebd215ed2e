//! Repository traits (ports)

pub mod admin_store;
pub mod product_repository;
pub mod order_repository;
pub mod review_repository;
pub mod collection_repository;
pub mod settings_repository;
pub mod analytics_repository;
pub mod image_store;

use std::sync::Arc;

pub use admin_store::AdminStore;
pub use product_repository::ProductRepository;
pub use order_repository::OrderRepository;
pub use review_repository::ReviewRepository;
pub use collection_repository::CollectionRepository;
pub use settings_repository::SettingsRepository;
pub use analytics_repository::AnalyticsRepository;
pub use image_store::ImageStore;

/// Every adapter the services need, bundled so a backend can be swapped
/// in one place.
#[derive(Clone)]
pub struct Stores {
    pub admin: Arc<dyn AdminStore>,
    pub products: Arc<dyn ProductRepository>,
    pub orders: Arc<dyn OrderRepository>,
    pub reviews: Arc<dyn ReviewRepository>,
    pub collections: Arc<dyn CollectionRepository>,
    pub settings: Arc<dyn SettingsRepository>,
    pub analytics: Arc<dyn AnalyticsRepository>,
    pub images: Arc<dyn ImageStore>,
}
