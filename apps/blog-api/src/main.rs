//! Blog API - users and posts over an embedded SQLite store

use axum_helpers::server::{create_app, create_router, health_router};
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

    info!("Opening SQLite database at {}", config.database.path);
    let db = database::sqlite::connect(&config.database).await?;

    // One-time idempotent setup: schema first, then optional demo data
    database::sqlite::init_schema(&db).await?;
    if config.seed_demo_data {
        database::sqlite::seed_demo_data(&db).await?;
    }

    let state = AppState {
        config: config.clone(),
        db,
    };

    // Health is merged before the middleware stack so it carries the
    // same CORS headers as the resource routes
    let api_routes = api::routes(&state).merge(health_router(config.app));
    let router = create_router::<openapi::ApiDoc>(api_routes);

    info!(
        "Starting {} v{} on {}",
        config.app.name,
        config.app.version,
        config.server.address()
    );

    create_app(router, &config.server).await?;

    info!("{} shutdown complete", config.app.name);
    Ok(())
}
