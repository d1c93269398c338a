use crate::{routes::get_golf_courses::LoadingResponse, types::app_state::AppState};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

/// Starts a fresh fetch of the default region. Any fetch still running is
/// cancelled and the current markers are replaced once the new one lands.
pub async fn refresh_golf_courses(State(state): State<AppState>) -> Response {
    info!("Refreshing golf courses");
    state.course_layer.load(state.default_bounds);

    (StatusCode::ACCEPTED, Json(LoadingResponse::loading())).into_response()
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use crate::{app::gen_mock_app, services::course_layer::FetchState};

    #[tokio::test]
    async fn refresh_triggers_new_fetch() {
        let mut mock_app = gen_mock_app().await;

        let mock_server = mock_app
            .overpass_server
            .mock("POST", "/api/interpreter")
            .with_header("content-type", "application/json")
            .with_body(r#"{"elements": [{"id": 5, "lat": 35.0, "lon": -80.0}]}"#)
            .expect(1)
            .create_async()
            .await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/golf-courses/refresh")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);

        match mock_app.state.course_layer.wait_settled().await {
            FetchState::Succeeded { courses, .. } => assert_eq!(courses.len(), 1),
            other => panic!("expected success, got {:?}", other),
        }

        mock_server.assert_async().await;
    }
}
