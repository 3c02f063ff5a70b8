//! Review analyzer entry-point: loads settings, installs logging, and serves
//! the review endpoints until shutdown.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use review_analyzer::config::ReviewServiceSettings;
use review_analyzer::inbound::http::health::HealthState;
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ReviewServiceSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;

    let config = ServerConfig::new(settings.bind_addr(), settings.data_path());
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(server::metrics::build_prometheus()?));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    server.await
}
