//! Memoria API - external memory over a vector store
//!
//! HTTP service that stores text chunks and answers semantic similarity
//! queries, backed by Qdrant and a local sentence-embedding model. Both
//! backends are initialized lazily on the first request that needs them.

use axum_helpers::server::{create_app, create_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        "Starting {} {} (collection '{}')",
        config.app.name, config.app.version, config.collection
    );

    let state = AppState::new(config.clone());
    let api_routes = api::routes(state);
    let app = create_router::<openapi::ApiDoc>(api_routes);

    create_app(app, &config.server).await?;

    info!("Memoria API shutdown complete");
    Ok(())
}
