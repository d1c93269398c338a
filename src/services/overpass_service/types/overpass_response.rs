use std::collections::HashMap;

use serde::Deserialize;

use crate::types::point_of_interest::{PointOfInterest, UNNAMED_GOLF_COURSE};

/// Top-level Overpass JSON. Elements stay untyped until each one is checked
/// on its own, so one bad entry cannot fail the whole payload. `remark` is
/// only logged, so any shape is accepted.
#[derive(Deserialize)]
pub struct OverpassResponse {
    pub elements: Vec<serde_json::Value>,
    #[serde(default)]
    pub remark: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct RawFeature {
    pub id: u64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub tags: Option<HashMap<String, serde_json::Value>>,
}

impl RawFeature {
    /// `None` when either coordinate is missing or not finite.
    pub fn into_point_of_interest(self) -> Option<PointOfInterest> {
        let lat = self.lat.filter(|l| l.is_finite())?;
        let lng = self.lon.filter(|l| l.is_finite())?;

        let name = self
            .tags
            .and_then(|mut tags| tags.remove("name"))
            .and_then(|name| name.as_str().map(str::to_string))
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNNAMED_GOLF_COURSE.to_string());

        Some(PointOfInterest {
            id: self.id,
            name,
            lat,
            lng,
        })
    }
}
