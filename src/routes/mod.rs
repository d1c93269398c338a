use axum::{
    routing::{get, post},
    Router,
};

use crate::types::app_state::AppState;

mod get_golf_courses;
mod get_golf_courses_in_bounds;
mod get_map_config;
mod refresh_golf_courses;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/map-config", get(get_map_config::get_map_config))
        .route("/golf-courses", get(get_golf_courses::get_golf_courses))
        .route(
            "/golf-courses/refresh",
            post(refresh_golf_courses::refresh_golf_courses),
        )
        .route(
            "/golf-courses/search",
            get(get_golf_courses_in_bounds::get_golf_courses_in_bounds),
        )
}
