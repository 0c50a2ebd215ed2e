use chrono::Duration;
use std::sync::Arc;

use luxe_core::repositories::Stores;
use luxe_core::services::{
    AdminAuthService, AdminPolicy, CatalogService, OrderService, ReportService, ReviewService,
    SettingsService, UploadPolicy, UploadService,
};
use luxe_shared::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AdminAuthService>,
    pub catalog: Arc<CatalogService>,
    pub orders: Arc<OrderService>,
    pub reviews: Arc<ReviewService>,
    pub settings: Arc<SettingsService>,
    pub reports: Arc<ReportService>,
    pub uploads: Arc<UploadService>,
    pub allow_query_token: bool,
}

impl AppState {
    pub fn new(stores: Stores, config: &AppConfig) -> Self {
        let policy = AdminPolicy {
            session_ttl: Duration::hours(config.admin.session_ttl_hours),
            min_password_length: config.admin.min_password_length,
        };
        let upload_policy = UploadPolicy {
            max_bytes: config.uploads.max_bytes,
            public_prefix: config.uploads.public_prefix.clone(),
        };

        Self {
            auth: Arc::new(AdminAuthService::new(stores.admin, policy)),
            catalog: Arc::new(CatalogService::new(stores.products.clone(), stores.collections)),
            orders: Arc::new(OrderService::new(stores.orders.clone())),
            reviews: Arc::new(ReviewService::new(stores.reviews, stores.products.clone())),
            settings: Arc::new(SettingsService::new(stores.settings)),
            reports: Arc::new(ReportService::new(stores.analytics, stores.products, stores.orders)),
            uploads: Arc::new(UploadService::new(stores.images, upload_policy)),
            allow_query_token: config.admin.allow_query_token,
        }
    }
}
