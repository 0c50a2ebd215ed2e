//! In-memory adapters backed by `DashMap`
//!
//! Selected when no database URL is configured. Each map entry is updated
//! atomically, which gives the per-key read-your-writes the guard expects.

pub mod admin_store;
pub mod catalog;
pub mod orders;
pub mod reviews;
pub mod settings;
pub mod analytics;
pub mod images;

pub use admin_store::MemoryAdminStore;
pub use catalog::{MemoryCollectionRepository, MemoryProductRepository};
pub use orders::MemoryOrderRepository;
pub use reviews::MemoryReviewRepository;
pub use settings::MemorySettingsRepository;
pub use analytics::MemoryAnalyticsRepository;
pub use images::MemoryImageStore;
