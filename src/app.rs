use std::sync::Arc;

use crate::{
    routes::apply_routes,
    services::{
        course_layer::CourseLayer,
        overpass_service::overpass_service::{OverpassService, OverpassServiceConfig},
    },
    types::{app_state::AppState, bounding_box::BoundingBox, map_config::MapConfig},
};
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

/// Wires the fetcher and the course layer together. Nothing is fetched until
/// the caller loads the layer.
pub fn gen_state(
    overpass_config: OverpassServiceConfig,
    map_config: MapConfig,
    default_bounds: BoundingBox,
) -> Result<AppState, reqwest::Error> {
    let overpass_service = OverpassService::new(overpass_config)?;
    let course_layer = CourseLayer::new(Arc::new(overpass_service.clone()));

    Ok(AppState {
        overpass_service,
        course_layer: Arc::new(course_layer),
        map_config: Arc::new(map_config),
        default_bounds,
    })
}

pub fn gen_app(state: AppState) -> Router {
    let cors_middleware = CorsLayer::new();

    apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .with_state(state)
}

// basic handler that responds with a static string
async fn root() -> &'static str {
    "Golf course locator"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub state: AppState,
    pub overpass_server: mockito::ServerGuard,
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    let overpass_server = mockito::Server::new_async().await;

    let state = gen_state(
        OverpassServiceConfig {
            host: overpass_server.url(),
            timeout: std::time::Duration::from_secs(5),
            ..Default::default()
        },
        MapConfig::default(),
        BoundingBox::north_carolina(),
    )
    .expect("Failed to build app state");

    MockApp {
        app: gen_app(state.clone()),
        state,
        overpass_server,
    }
}
