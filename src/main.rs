use anyhow::Context;
use filmes_api::api::{self, AppState};
use filmes_api::config::AppConfig;
use filmes_api::storage::ReviewStore;
use filmes_api::{server, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init()?;

    info!("🚀 Starting Filmes API");

    // Load configuration
    let config = AppConfig::load()?;
    info!("📋 Configuration loaded");
    info!("   - Database: {}", config.database.redacted_url());
    info!(
        "   - Connect attempts: {} ({}s apart)",
        config.database.connect_attempts, config.database.retry_delay_secs
    );
    info!("   - Server: {}", config.server.bind_addr());

    // The table must exist before the first request is accepted.
    info!("💾 Initializing database...");
    let store = ReviewStore::new(config.database.clone());
    store
        .init_schema()
        .await
        .context("Failed to initialize database")?;
    info!("✅ Database initialized");

    let app = api::router(AppState::new(store));

    info!("📡 Available endpoints:");
    info!("   GET  /          - Welcome message");
    info!("   GET  /filmes    - Movie list");
    info!("   GET  /health    - Database health check");
    info!("   GET  /reviews   - List reviews");
    info!("   POST /reviews   - Create review");

    server::serve(app, &config.server).await
}
