use crate::{
    services::course_layer::FetchState,
    types::{app_state::AppState, point_of_interest::Marker},
    utils::app_error::AppError,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
#[cfg(test)]
use axum_macros::debug_handler;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;

#[derive(Serialize, Deserialize)]
pub struct GetGolfCoursesResponseData {
    pub markers: Vec<Marker>,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize)]
pub struct GetGolfCoursesResponse {
    pub data: GetGolfCoursesResponseData,
}

#[derive(Serialize, Deserialize)]
pub struct LoadingResponse {
    pub status: String,
}

impl LoadingResponse {
    pub fn loading() -> Self {
        LoadingResponse {
            status: "loading".to_string(),
        }
    }
}

#[cfg_attr(test, debug_handler)]
pub async fn get_golf_courses(State(state): State<AppState>) -> Result<Response, AppError> {
    match state.course_layer.state() {
        FetchState::Idle | FetchState::Requesting => {
            Ok((StatusCode::ACCEPTED, Json(LoadingResponse::loading())).into_response())
        }
        FetchState::Succeeded {
            courses,
            fetched_at,
        } => Ok((
            StatusCode::OK,
            Json(GetGolfCoursesResponse {
                data: GetGolfCoursesResponseData {
                    markers: courses.iter().map(Marker::from).collect(),
                    fetched_at,
                },
            }),
        )
            .into_response()),
        FetchState::Failed { error: e, .. } => {
            error!("Serving golf course failure to map: {}", e);
            Err(AppError::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "Golf courses are unavailable right now",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;
    use crate::{app::gen_mock_app, utils::app_error::ErrorResponseJson};

    #[tokio::test]
    async fn reports_loading_before_first_fetch() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/golf-courses")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: LoadingResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.status, "loading");
    }

    #[tokio::test]
    async fn serves_markers_after_fetch() {
        let mut mock_app = gen_mock_app().await;

        let mock_overpass_response = json!({
            "elements": [
                { "id": 11, "lat": 35.19, "lon": -79.47, "tags": { "name": "Pinehurst No. 2" } },
                { "id": 12, "lat": 35.9, "lon": -78.9 }
            ]
        });

        let mock_server = mock_app
            .overpass_server
            .mock("POST", "/api/interpreter")
            .with_header("content-type", "application/json")
            .with_body(mock_overpass_response.to_string())
            .create_async()
            .await;

        let layer = mock_app.state.course_layer.clone();
        layer.load(mock_app.state.default_bounds);
        layer.wait_settled().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/golf-courses")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        mock_server.assert();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: GetGolfCoursesResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(body.data.markers.len(), 2);
        assert_eq!(body.data.markers[0].key, 11);
        assert_eq!(body.data.markers[0].position, [35.19, -79.47]);
        assert_eq!(body.data.markers[0].popup, "Pinehurst No. 2");
        assert_eq!(body.data.markers[1].popup, "Unnamed Golf Course");
    }

    #[tokio::test]
    async fn serves_notice_when_fetch_failed() {
        let mut mock_app = gen_mock_app().await;

        mock_app
            .overpass_server
            .mock("POST", "/api/interpreter")
            .with_status(429)
            .create_async()
            .await;

        let layer = mock_app.state.course_layer.clone();
        layer.load(mock_app.state.default_bounds);
        layer.wait_settled().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/golf-courses")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponseJson = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.message, "Golf courses are unavailable right now");
    }
}
