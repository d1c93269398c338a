use crate::{
    services::overpass_service::query_builder,
    types::{app_state::AppState, bounding_box::BoundingBox, point_of_interest::Marker},
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};
use tracing::error;
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetGolfCoursesInBoundsPayload {
    #[validate(range(min = -90.0, max = 90.0, message = "Must be a latitude"))]
    pub min_lat: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Must be a longitude"))]
    pub min_lon: f64,

    #[validate(range(min = -90.0, max = 90.0, message = "Must be a latitude"))]
    pub max_lat: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Must be a longitude"))]
    pub max_lon: f64,
}

#[derive(Serialize, Deserialize)]
pub struct GetGolfCoursesInBoundsResponseData {
    pub markers: Vec<Marker>,
}

#[derive(Serialize, Deserialize)]
pub struct GetGolfCoursesInBoundsResponse {
    pub data: GetGolfCoursesInBoundsResponseData,
}

#[cfg_attr(test, debug_handler)]
pub async fn get_golf_courses_in_bounds(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetGolfCoursesInBoundsPayload>,
) -> Result<Response, AppError> {
    let bounds = BoundingBox::new(
        payload.min_lat,
        payload.min_lon,
        payload.max_lat,
        payload.max_lon,
    )
    .map_err(|e| AppError::new(StatusCode::BAD_REQUEST, e.to_string().as_str()))?;

    let markers = state
        .overpass_service
        .fetch(&query_builder::build(&bounds))
        .await
        .map_err(|e| {
            error!("Failed to fetch golf courses in bounds: {}", e);
            AppError::from(&e)
        })?
        .iter()
        .map(Marker::from)
        .collect::<Vec<Marker>>();

    Ok((
        StatusCode::OK,
        Json(GetGolfCoursesInBoundsResponse {
            data: GetGolfCoursesInBoundsResponseData { markers },
        }),
    )
        .into_response())
}
