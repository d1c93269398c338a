use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerIcon {
    pub url: String,
    pub size: [u32; 2],
    pub anchor: [i32; 2],
    pub popup_anchor: [i32; 2],
}

/// Presentation settings handed to the map client as-is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub tile_url: String,
    pub attribution: String,
    pub center: [f64; 2],
    pub zoom: u8,
    pub icon: MarkerIcon,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; OpenStreetMap contributors".to_string(),
            center: [35.5, -79.5],
            zoom: 8,
            icon: MarkerIcon {
                url: "https://unpkg.com/leaflet@1.7.1/dist/images/marker-icon.png".to_string(),
                size: [25, 41],
                anchor: [12, 41],
                popup_anchor: [1, -34],
            },
        }
    }
}
