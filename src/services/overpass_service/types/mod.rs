pub mod fetch_error;
pub mod overpass_response;
