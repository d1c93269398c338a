pub mod app_state;
pub mod bounding_box;
pub mod map_config;
pub mod point_of_interest;
