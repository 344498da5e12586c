mod aggregate;
mod config;
mod dedup;
mod extract;
mod fetch;
mod model;
mod rank;
mod server;

use std::sync::Arc;

use config::{AppConfig, load_config};
use fetch::{Fetcher, HttpFetcher};
use server::AppState;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load configuration from file, falling back to built-in defaults
    let config = match load_config("config.json") {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Config load error ({}), using defaults", e);
            AppConfig::default()
        }
    };

    let fetcher: Arc<dyn Fetcher> = match HttpFetcher::new(&config) {
        Ok(f) => Arc::new(f),
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            return;
        }
    };

    let app = server::build_router(AppState { fetcher });

    let listener = match tokio::net::TcpListener::bind(&config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {}: {}", config.bind_addr, e);
            return;
        }
    };

    info!("provider-scout listening on {}", config.bind_addr);
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
    }
}
