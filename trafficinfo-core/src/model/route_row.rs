use super::Route;
use serde::{Deserialize, Serialize};

/// every route row shares this partition.
pub const ROUTES_PARTITION_KEY: &str = "Routes";

/// flat table projection of a [`Route`]. column names match the table
/// schema already in use, including coordinates stored as text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RouteRow {
    pub partition_key: String,
    pub row_key: String,
    pub summary: String,
    pub distance_value: i32,
    pub distance_text: String,
    pub duration_value: i32,
    pub duration_text: String,
    pub duration_in_traffic_value: i32,
    pub duration_in_traffic_text: String,
    pub start_location_lat: String,
    pub start_location_lng: String,
    pub start_address: String,
    pub end_location_lat: String,
    pub end_location_lng: String,
    pub end_address: String,
}

impl From<&Route> for RouteRow {
    fn from(route: &Route) -> Self {
        Self {
            partition_key: ROUTES_PARTITION_KEY.to_string(),
            row_key: route.row_key().to_string(),
            summary: route.summary().to_string(),
            distance_value: route.distance().value,
            distance_text: route.distance().text.clone(),
            duration_value: route.duration().value,
            duration_text: route.duration().text.clone(),
            duration_in_traffic_value: route.duration_in_traffic().value,
            duration_in_traffic_text: route.duration_in_traffic().text.clone(),
            start_location_lat: route.start().lat.to_string(),
            start_location_lng: route.start().lng.to_string(),
            start_address: route.start().address.clone(),
            end_location_lat: route.end().lat.to_string(),
            end_location_lng: route.end().lng.to_string(),
            end_address: route.end().address.clone(),
        }
    }
}
