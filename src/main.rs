mod app;
mod routes;
mod services;
mod types;
mod utils;
use std::{env, time::Duration};

use services::overpass_service::overpass_service::OverpassServiceConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;
use types::{bounding_box::BoundingBox, map_config::MapConfig};

fn overpass_config_from_env() -> OverpassServiceConfig {
    let defaults = OverpassServiceConfig::default();

    OverpassServiceConfig {
        host: env::var("OVERPASS_HOST").unwrap_or(defaults.host),
        timeout: env::var("OVERPASS_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout),
        user_agent: defaults.user_agent,
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    info!("Starting app...");

    let state = app::gen_state(
        overpass_config_from_env(),
        MapConfig::default(),
        BoundingBox::north_carolina(),
    )?;

    // One fetch per session; the map polls /golf-courses until it settles.
    state.course_layer.load(state.default_bounds);

    let app = app::gen_app(state);

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Listening on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
