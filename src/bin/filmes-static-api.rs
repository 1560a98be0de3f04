use filmes_api::config::AppConfig;
use filmes_api::{api, server, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init()?;

    info!("🚀 Starting Filmes static API");

    let config = AppConfig::load()?;
    info!("   - Server: {}", config.server.bind_addr());

    info!("📡 Available endpoints:");
    info!("   GET  /          - Welcome message");
    info!("   GET  /filmes    - Movie list");
    info!("   GET  /health    - Health check");

    server::serve(api::static_router(), &config.server).await
}
