//! Router assembly

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{warn, Level};

use luxe_shared::config::{AppConfig, CorsSettings};

use crate::handlers;
use crate::state::AppState;

/// Multipart framing on top of the image itself.
const MULTIPART_OVERHEAD: usize = 1024 * 1024;

pub fn build_router(state: AppState, config: &AppConfig) -> Router {
    // Public storefront routes
    let public_routes = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/", get(handlers::health::root))
        .route("/api/products", get(handlers::products::list_products))
        .route("/api/products/{id}", get(handlers::products::get_product))
        .route("/api/orders", post(handlers::orders::create_order))
        .route("/api/reviews", post(handlers::reviews::create_review))
        .route("/api/collections", get(handlers::collections::list_collections))
        .route("/api/settings", get(handlers::settings::get_settings))
        .route("/api/reports/bestsellers", get(handlers::reports::bestsellers))
        .route("/api/reports/revenue", get(handlers::reports::revenue))
        .route("/api/admin/login", post(handlers::admin::login));

    // Admin routes; each handler takes an `AdminGuard`
    let admin_routes = Router::new()
        .route("/api/admin/logout", post(handlers::admin::logout))
        .route("/api/admin/verify", get(handlers::admin::verify))
        .route("/api/admin/change-password", post(handlers::admin::change_password))
        .route("/api/admin/upload-image", post(handlers::upload::upload_image))
        .route("/api/products", post(handlers::products::create_product))
        .route(
            "/api/products/{id}",
            put(handlers::products::update_product).delete(handlers::products::delete_product),
        )
        .route("/api/orders", get(handlers::orders::list_orders))
        .route(
            "/api/orders/{id}",
            get(handlers::orders::get_order).put(handlers::orders::update_order),
        )
        .route("/api/reviews", get(handlers::reviews::list_reviews))
        .route("/api/reviews/{id}", put(handlers::reviews::update_review))
        .route("/api/collections", post(handlers::collections::create_collection))
        .route("/api/collections/{id}", put(handlers::collections::update_collection))
        .route("/api/settings", put(handlers::settings::update_settings))
        .route("/api/analytics/track", post(handlers::reports::track_event));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                        .on_response(DefaultOnResponse::new().level(Level::INFO)),
                )
                .layer(cors_layer(&config.cors)),
        )
        .layer(DefaultBodyLimit::max(config.uploads.max_bytes + MULTIPART_OVERHEAD))
        .with_state(state)
}

fn cors_layer(settings: &CorsSettings) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if settings.allows_any() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = settings
        .origins()
        .into_iter()
        .filter_map(|origin| match HeaderValue::from_str(&origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    layer.allow_origin(origins)
}
