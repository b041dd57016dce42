use super::RouteSink;
use crate::model::{Route, TrafficInfoError};

/// appends routes one at a time. writes are independent: the first failure
/// stops the batch and rows already written stay written.
///
/// # Result
/// the number of rows written, or a [`TrafficInfoError::SinkError`] naming the
/// failed row and how many rows preceded it.
pub fn append_all<S>(sink: &mut S, routes: &[Route]) -> Result<usize, TrafficInfoError>
where
    S: RouteSink + ?Sized,
{
    for (rows_written, route) in routes.iter().enumerate() {
        sink.append(route)
            .map_err(|e| TrafficInfoError::SinkError {
                row_key: route.row_key().to_string(),
                rows_written,
                message: e.to_string(),
            })?;
        log::info!(
            "route '{}' takes {} to reach.",
            route.summary(),
            route.duration_in_traffic()
        );
    }
    Ok(routes.len())
}
