mod error;
mod route;
mod route_row;
mod text_value;

pub use error::TrafficInfoError;
pub use route::{Route, RouteEndpoint};
pub use route_row::{RouteRow, ROUTES_PARTITION_KEY};
pub use text_value::TextValue;
