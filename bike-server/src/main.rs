use std::error::Error;
use std::net::SocketAddr;

use bike_server::config::{Config, SourceConfig};
use bike_server::service::StationService;
use bike_server::upstream::{BikeClient, MockUpstream, UpstreamSource};
use bike_server::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let Config {
        source,
        listen_addr,
    } = Config::from_env()?;

    match source {
        SourceConfig::Http(client_config) => {
            info!(base_url = %client_config.base_url, "using live upstream");
            serve(BikeClient::new(client_config)?, listen_addr).await
        }
        SourceConfig::Mock(dir) => {
            info!(dir = %dir.display(), "using mock upstream");
            serve(MockUpstream::new(&dir)?, listen_addr).await
        }
    }
}

async fn serve<S: UpstreamSource + 'static>(
    source: S,
    addr: SocketAddr,
) -> Result<(), Box<dyn Error>> {
    let state = AppState::new(StationService::new(source));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "bike server listening");
    info!("API endpoints:");
    info!("  GET  /health           - Health check");
    info!("  GET  /v1/stations      - List stations");
    info!("  GET  /v1/stations/:id  - Get a single station");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("terminated");
    Ok(())
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
