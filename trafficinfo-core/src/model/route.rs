use super::TextValue;
use serde::Serialize;
use uuid::Uuid;

/// one candidate path for a trip as reported by the directions provider.
/// the row key is generated when the route is created since the provider
/// supplies no natural key. routes are written once and never modified,
/// so fields are only exposed through accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    row_key: Uuid,
    summary: String,
    distance: TextValue,
    duration: TextValue,
    duration_in_traffic: TextValue,
    start: RouteEndpoint,
    end: RouteEndpoint,
}

/// address and coordinate of one end of a route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteEndpoint {
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

impl Route {
    pub fn new(
        summary: String,
        distance: TextValue,
        duration: TextValue,
        duration_in_traffic: TextValue,
        start: RouteEndpoint,
        end: RouteEndpoint,
    ) -> Self {
        Self {
            row_key: Uuid::new_v4(),
            summary,
            distance,
            duration,
            duration_in_traffic,
            start,
            end,
        }
    }

    pub fn row_key(&self) -> &Uuid {
        &self.row_key
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn distance(&self) -> &TextValue {
        &self.distance
    }

    pub fn duration(&self) -> &TextValue {
        &self.duration
    }

    pub fn duration_in_traffic(&self) -> &TextValue {
        &self.duration_in_traffic
    }

    pub fn start(&self) -> &RouteEndpoint {
        &self.start
    }

    pub fn end(&self) -> &RouteEndpoint {
        &self.end
    }
}
