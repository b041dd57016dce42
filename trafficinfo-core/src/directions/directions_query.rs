use super::TrafficModel;
use crate::window::CommuteWindow;

/// a live-traffic directions request between two locations. the api key
/// is not part of the query; it belongs to the client that sends it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionsQuery {
    pub origin: String,
    pub destination: String,
    pub alternatives: bool,
    pub traffic_model: TrafficModel,
}

impl DirectionsQuery {
    pub const DEPARTURE_TIME_NOW: &'static str = "now";

    pub fn new(origin: &str, destination: &str, traffic_model: TrafficModel) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            alternatives: true,
            traffic_model,
        }
    }

    pub fn from_window(window: &CommuteWindow, traffic_model: TrafficModel) -> Self {
        Self::new(&window.origin, &window.destination, traffic_model)
    }

    /// request parameters in the order they are sent, excluding the key.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("origin", self.origin.clone()),
            ("destination", self.destination.clone()),
            ("departure_time", Self::DEPARTURE_TIME_NOW.to_string()),
            ("alternatives", self.alternatives.to_string()),
            ("traffic_model", self.traffic_model.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::DirectionsQuery;
    use crate::directions::TrafficModel;

    #[test]
    fn test_live_traffic_parameters() {
        let query = DirectionsQuery::new("A", "B", TrafficModel::default());
        let pairs = query.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("origin", String::from("A")),
                ("destination", String::from("B")),
                ("departure_time", String::from("now")),
                ("alternatives", String::from("true")),
                ("traffic_model", String::from("best_guess")),
            ]
        );
    }
}
