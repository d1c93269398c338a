pub mod course_layer;
pub mod overpass_service;
