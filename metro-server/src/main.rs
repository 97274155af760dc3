use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use metro_server::config::ServerConfig;
use metro_server::domain::Network;
use metro_server::storage;
use metro_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("metro_server=info,tower_http=info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Fail fast on a bad network file; an unset path starts empty.
    let network = match &config.network_path {
        Some(path) => match storage::load(path) {
            Ok(network) => network,
            Err(e) => {
                error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            warn!("METRO_NETWORK not set, serving an empty network");
            Network::new()
        }
    };

    let state = AppState::new(network, &config.cache, config.network_path.clone());
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Metro route finder listening on http://{}", config.addr);
    info!("  GET  /health              - Health check");
    info!("  GET  /api/network         - Network summary");
    info!("  POST /api/network/reload  - Reload the network file");
    info!("  GET  /api/lines           - List lines");
    info!("  GET  /api/stations?q=     - Search stations");
    info!("  GET  /api/interchanges    - Interchanges between two lines");
    info!("  GET  /api/route?from=&to= - Find a route");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
