use crate::model::{RouteEndpoint, TextValue};
use serde::Deserialize;

/// the subset of the directions api response used to build routes.
/// fields not listed here are ignored; fields listed here are required
/// unless optional.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
    pub routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsRoute {
    pub summary: String,
    pub legs: Vec<DirectionsLeg>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsLeg {
    pub distance: TextValue,
    pub duration: TextValue,
    pub duration_in_traffic: TextValue,
    pub start_address: String,
    pub start_location: LatLng,
    pub end_address: String,
    pub end_location: LatLng,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl DirectionsResponse {
    pub const STATUS_OK: &'static str = "OK";
    pub const STATUS_ZERO_RESULTS: &'static str = "ZERO_RESULTS";

    /// true when the provider reported a status other than success or an
    /// empty result.
    pub fn is_error_status(&self) -> bool {
        match self.status.as_deref() {
            None => false,
            Some(s) => s != Self::STATUS_OK && s != Self::STATUS_ZERO_RESULTS,
        }
    }
}

impl DirectionsLeg {
    pub fn start(&self) -> RouteEndpoint {
        RouteEndpoint {
            address: self.start_address.clone(),
            lat: self.start_location.lat,
            lng: self.start_location.lng,
        }
    }

    pub fn end(&self) -> RouteEndpoint {
        RouteEndpoint {
            address: self.end_address.clone(),
            lat: self.end_location.lat,
            lng: self.end_location.lng,
        }
    }
}
