//! Print every station as a table.

use std::error::Error;
use std::process::ExitCode;

use bike_server::config::{Config, SourceConfig};
use bike_server::service::StationService;
use bike_server::table::render_table;
use bike_server::upstream::{BikeClient, MockUpstream, UpstreamSource};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(table) => {
            print!("{table}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "failed to get stations");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<String, Box<dyn Error>> {
    match Config::from_env()?.source {
        SourceConfig::Http(client_config) => stations_table(BikeClient::new(client_config)?).await,
        SourceConfig::Mock(dir) => stations_table(MockUpstream::new(&dir)?).await,
    }
}

async fn stations_table<S: UpstreamSource>(source: S) -> Result<String, Box<dyn Error>> {
    let stations = StationService::new(source).list().await?;
    Ok(render_table(&stations)?)
}
