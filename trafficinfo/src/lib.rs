pub mod app;
pub mod config;
mod error;
pub mod fetch;
pub mod store;

pub use error::TrafficInfoAppError;
