use serde::{Deserialize, Serialize};

pub const UNNAMED_GOLF_COURSE: &str = "Unnamed Golf Course";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub id: u64,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// What the map draws for one course: a marker keyed by the record id so it
/// re-renders stably, with the name as its popup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub key: u64,
    pub position: [f64; 2],
    pub popup: String,
}

impl From<&PointOfInterest> for Marker {
    fn from(poi: &PointOfInterest) -> Self {
        Marker {
            key: poi.id,
            position: [poi.lat, poi.lng],
            popup: poi.name.clone(),
        }
    }
}
