mod directions_query;
mod directions_response;
mod directions_source;
mod parse_ops;
mod traffic_model;

pub use directions_query::DirectionsQuery;
pub use directions_response::{DirectionsLeg, DirectionsResponse, DirectionsRoute, LatLng};
pub use directions_source::DirectionsSource;
pub use parse_ops::parse_routes;
pub use traffic_model::TrafficModel;
