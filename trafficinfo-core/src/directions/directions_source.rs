use super::DirectionsQuery;
use crate::model::TrafficInfoError;

/// a provider of directions responses. implementations issue exactly one
/// request per call and return the raw response body; failures surface as
/// [`TrafficInfoError::FetchError`] and are not retried.
pub trait DirectionsSource {
    fn fetch_directions(&self, query: &DirectionsQuery) -> Result<String, TrafficInfoError>;
}
