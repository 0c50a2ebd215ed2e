//! # Luxe Infrastructure
//! 
//! Storage adapters for the repository ports: PostgreSQL, in-memory and
//! filesystem.

pub mod database;
pub mod memory;
pub mod storage;

use std::path::PathBuf;
use std::sync::Arc;

use luxe_core::repositories::Stores;
use sqlx::PgPool;

pub use database::{create_pool, run_migrations};
pub use memory::{
    MemoryAdminStore, MemoryAnalyticsRepository, MemoryCollectionRepository, MemoryImageStore,
    MemoryOrderRepository, MemoryProductRepository, MemoryReviewRepository,
    MemorySettingsRepository,
};
pub use storage::FsImageStore;

/// PostgreSQL document tables, images on local disk.
pub fn postgres_stores(pool: PgPool, upload_dir: impl Into<PathBuf>) -> Stores {
    use database::postgres::*;

    Stores {
        admin: Arc::new(PgAdminStore::new(pool.clone())),
        products: Arc::new(PgProductRepository::new(pool.clone())),
        orders: Arc::new(PgOrderRepository::new(pool.clone())),
        reviews: Arc::new(PgReviewRepository::new(pool.clone())),
        collections: Arc::new(PgCollectionRepository::new(pool.clone())),
        settings: Arc::new(PgSettingsRepository::new(pool.clone())),
        analytics: Arc::new(PgAnalyticsRepository::new(pool)),
        images: Arc::new(FsImageStore::new(upload_dir)),
    }
}

/// Everything in process memory. Used for development and tests; nothing
/// survives a restart.
pub fn memory_stores() -> Stores {
    Stores {
        admin: Arc::new(MemoryAdminStore::default()),
        products: Arc::new(MemoryProductRepository::default()),
        orders: Arc::new(MemoryOrderRepository::default()),
        reviews: Arc::new(MemoryReviewRepository::default()),
        collections: Arc::new(MemoryCollectionRepository::default()),
        settings: Arc::new(MemorySettingsRepository::default()),
        analytics: Arc::new(MemoryAnalyticsRepository::default()),
        images: Arc::new(MemoryImageStore::default()),
    }
}

/// In-memory stores with the admin password already set.
pub fn seeded_memory_stores(password_hash: impl Into<String>) -> Stores {
    Stores {
        admin: Arc::new(MemoryAdminStore::with_password_hash(password_hash)),
        ..memory_stores()
    }
}
