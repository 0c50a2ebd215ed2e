use anyhow::Context;
use std::net::SocketAddr;
use tracing::{info, warn};

use luxe_api::{build_router, AppState};
use luxe_infrastructure::{create_pool, postgres_stores, run_migrations, seeded_memory_stores};
use luxe_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    // Initialize telemetry; the guard flushes the log file on exit
    let _log_guard = luxe_shared::telemetry::init_telemetry(&config.log, &config.app.name)?;

    info!("{} starting in {} mode...", config.app.name, config.app.env);

    // Storage backend
    let stores = if config.database.is_in_memory() {
        warn!("No database URL configured; using the in-memory store. Data is lost on restart.");
        let hash = config.admin.password_hash().context(
            "admin.password_hash (ADMIN__PASSWORD_HASH) must be set when running on the in-memory store",
        )?;
        seeded_memory_stores(hash)
    } else {
        info!("Connecting to database...");
        let pool = create_pool(&config.database)
            .await
            .context("Failed to connect to database")?;
        run_migrations(&pool).await.context("Failed to run migrations")?;
        info!("Database connection established.");
        postgres_stores(pool, &config.uploads.dir)
    };

    // Build router
    let state = AppState::new(stores, &config);
    let app = build_router(state, &config);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
