//! # Luxe Core - Services
//!
//! Business rules over the repository ports.

pub mod admin_auth_service;
pub mod catalog_service;
pub mod order_service;
pub mod review_service;
pub mod settings_service;
pub mod report_service;
pub mod upload_service;

pub use admin_auth_service::{AdminAuthService, AdminPolicy};
pub use catalog_service::CatalogService;
pub use order_service::OrderService;
pub use review_service::ReviewService;
pub use settings_service::SettingsService;
pub use report_service::ReportService;
pub use upload_service::{UploadPolicy, UploadService};
