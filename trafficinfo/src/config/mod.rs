mod directions_config;
mod store_config;
mod traffic_info_config;

pub use directions_config::{DirectionsConfig, GOOGLE_DIRECTIONS_URL};
pub use store_config::{StoreConfig, DEFAULT_TABLE_NAME};
pub use traffic_info_config::{TrafficInfoConfig, ENV_PREFIX};
