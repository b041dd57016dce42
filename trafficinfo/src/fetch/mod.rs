mod google_directions_client;

pub use google_directions_client::GoogleDirectionsClient;
