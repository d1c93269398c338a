use std::sync::Arc;

use crate::{
    services::{course_layer::CourseLayer, overpass_service::overpass_service::OverpassService},
    types::{bounding_box::BoundingBox, map_config::MapConfig},
};

#[derive(Clone)]
pub struct AppState {
    pub overpass_service: OverpassService,
    pub course_layer: Arc<CourseLayer>,
    pub map_config: Arc<MapConfig>,
    pub default_bounds: BoundingBox,
}
