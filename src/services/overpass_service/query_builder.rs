use crate::types::bounding_box::BoundingBox;

const FEATURE_KEY: &str = "leisure";
const FEATURE_VALUE: &str = "golf_course";

/// Overpass QL text. Only [`build`] creates one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpatialQuery(String);

impl SpatialQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SpatialQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Golf course nodes inside `bounds`, coordinates in Overpass order
/// (south, west, north, east).
pub fn build(bounds: &BoundingBox) -> SpatialQuery {
    let bbox = [
        bounds.min_lat(),
        bounds.min_lon(),
        bounds.max_lat(),
        bounds.max_lon(),
    ]
    .iter()
    .map(|c| c.to_string())
    .collect::<Vec<String>>()
    .join(",");

    SpatialQuery(format!(
        "[out:json];\nnode[\"{}\"=\"{}\"]({});\nout body;",
        FEATURE_KEY, FEATURE_VALUE, bbox
    ))
}
