use super::{DirectionsResponse, DirectionsRoute};
use crate::model::{Route, TrafficInfoError};

/// deserializes a directions response body into one [`Route`] per
/// alternative route, built from the first leg of each. any missing or
/// malformed field fails the whole response; no partial result is returned.
pub fn parse_routes(json: &str) -> Result<Vec<Route>, TrafficInfoError> {
    let response: DirectionsResponse = serde_json::from_str(json)
        .map_err(|source| TrafficInfoError::ParseError { source })?;

    if response.is_error_status() {
        return Err(TrafficInfoError::ProviderStatusError {
            status: response.status.unwrap_or_default(),
            message: response
                .error_message
                .unwrap_or_else(|| String::from("no error message provided")),
        });
    }

    response
        .routes
        .into_iter()
        .enumerate()
        .map(|(index, route)| into_route(index, route))
        .collect()
}

fn into_route(index: usize, route: DirectionsRoute) -> Result<Route, TrafficInfoError> {
    let DirectionsRoute { summary, legs } = route;
    let leg = legs
        .into_iter()
        .next()
        .ok_or(TrafficInfoError::MissingLegError(index))?;
    let start = leg.start();
    let end = leg.end();
    Ok(Route::new(
        summary,
        leg.distance,
        leg.duration,
        leg.duration_in_traffic,
        start,
        end,
    ))
}
