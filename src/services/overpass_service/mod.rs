pub mod overpass_service;
pub mod query_builder;
pub mod types;
