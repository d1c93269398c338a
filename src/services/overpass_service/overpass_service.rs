use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use urlencoding::encode;

use super::{
    query_builder::SpatialQuery,
    types::{
        fetch_error::FetchError,
        overpass_response::{OverpassResponse, RawFeature},
    },
};
use crate::types::point_of_interest::PointOfInterest;

#[derive(Clone)]
pub struct OverpassServiceConfig {
    pub host: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for OverpassServiceConfig {
    fn default() -> Self {
        Self {
            host: "https://overpass-api.de".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("golf-course-locator/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Anything that can turn a query into normalized courses.
#[async_trait]
pub trait GeoDataSource: Send + Sync {
    async fn fetch_with_cancel(
        &self,
        query: &SpatialQuery,
        cancel: &CancellationToken,
    ) -> Result<Vec<PointOfInterest>, FetchError>;
}

#[derive(Clone)]
pub struct OverpassService {
    config: OverpassServiceConfig,
    client: reqwest::Client,
}

impl OverpassService {
    pub fn new(config: OverpassServiceConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { config, client })
    }

    /// One POST, no retry. Records that cannot be placed on a map are
    /// dropped; everything else about the exchange either succeeds whole or
    /// fails with a single classified error.
    pub async fn fetch(&self, query: &SpatialQuery) -> Result<Vec<PointOfInterest>, FetchError> {
        let url = format!("{}/api/interpreter", self.config.host);

        let resp = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(format!("data={}", encode(query.as_str())))
            .send()
            .await
            .map_err(|e| FetchError::transport(None, format!("Failed to send request: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::transport(
                Some(status),
                "Overpass responded with a non-success status",
            ));
        }

        let body = resp.text().await.map_err(|e| {
            FetchError::transport(None, format!("Failed to read response body: {}", e))
        })?;

        let courses = parse_courses(&body)?;
        info!("Fetched {} golf courses from {}", courses.len(), url);

        Ok(courses)
    }
}

#[async_trait]
impl GeoDataSource for OverpassService {
    async fn fetch_with_cancel(
        &self,
        query: &SpatialQuery,
        cancel: &CancellationToken,
    ) -> Result<Vec<PointOfInterest>, FetchError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(FetchError::Cancelled),
            result = self.fetch(query) => result,
        }
    }
}

fn parse_courses(body: &str) -> Result<Vec<PointOfInterest>, FetchError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| FetchError::Parse(format!("Response body is not valid JSON: {}", e)))?;

    if !value.is_object() {
        return Err(FetchError::Parse(
            "Response body is not a JSON object".to_string(),
        ));
    }

    let response: OverpassResponse = serde_json::from_value(value)
        .map_err(|e| FetchError::Parse(format!("Unexpected response shape: {}", e)))?;

    if let Some(remark) = &response.remark {
        match remark.as_str() {
            Some(text) => warn!("Overpass remark: {}", text),
            None => warn!("Overpass remark: {}", remark),
        }
    }

    let mut courses = Vec::with_capacity(response.elements.len());

    for (index, element) in response.elements.into_iter().enumerate() {
        let feature = match serde_json::from_value::<RawFeature>(element) {
            Ok(f) => f,
            Err(e) => {
                warn!("Skipping malformed element at index {}: {}", index, e);
                continue;
            }
        };

        let id = feature.id;
        match feature.into_point_of_interest() {
            Some(poi) => courses.push(poi),
            None => warn!("Skipping feature {} without usable coordinates", id),
        }
    }

    Ok(courses)
}
