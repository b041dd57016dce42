use serde::{Deserialize, Serialize};
use trafficinfo_core::directions::TrafficModel;

pub const GOOGLE_DIRECTIONS_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";

/// where directions are requested from and how traffic is predicted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionsConfig {
    #[serde(default = "DirectionsConfig::default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub traffic_model: TrafficModel,
}

impl Default for DirectionsConfig {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            traffic_model: TrafficModel::default(),
        }
    }
}

impl DirectionsConfig {
    fn default_base_url() -> String {
        String::from(GOOGLE_DIRECTIONS_URL)
    }
}
