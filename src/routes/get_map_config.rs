use crate::types::{app_state::AppState, map_config::MapConfig};
use axum::{extract::State, Json};

pub async fn get_map_config(State(state): State<AppState>) -> Json<MapConfig> {
    Json(state.map_config.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    use super::*;
    use crate::app::gen_mock_app;

    #[tokio::test]
    async fn serves_default_config() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/map-config")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: MapConfig = serde_json::from_slice(&body).unwrap();

        assert_eq!(body, MapConfig::default());
        assert_eq!(body.center, [35.5, -79.5]);
        assert_eq!(body.icon.size, [25, 41]);
    }
}
