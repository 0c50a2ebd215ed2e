//! # Luxe Core - Domain Module
//! 
//! Domain entities for the storefront backend.

pub mod admin;
pub mod product;
pub mod order;
pub mod review;
pub mod collection;
pub mod settings;
pub mod analytics;
pub mod upload;

// Re-export all entities and enums
pub use admin::{AdminCredential, AdminKey, AdminSession};
pub use product::{Product, ProductFilter, ProductSort, ProductVariant};
pub use order::{CartItem, CustomerInfo, DeliveryInfo, Order, OrderUpdate, PaymentInfo, StatusChange};
pub use review::{RatingSummary, Review, ReviewStatus, ReviewUpdate};
pub use collection::Collection;
pub use settings::Settings;
pub use analytics::{AnalyticsEvent, DateRange, RevenueReport};
