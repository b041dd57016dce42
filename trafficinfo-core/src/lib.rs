pub mod directions;
pub mod model;
pub mod pipeline;
pub mod sink;
pub mod window;

pub use model::TrafficInfoError;
