use crate::model::{Route, RouteRow, TrafficInfoError};

/// destination for route records. each call writes one row under the
/// fixed routes partition, keyed by the route's generated row key. adapters
/// report failures as [`TrafficInfoError::StoreError`].
pub trait RouteSink {
    fn append(&mut self, route: &Route) -> Result<(), TrafficInfoError>;
}

/// in-memory table, collects rows in append order.
impl RouteSink for Vec<RouteRow> {
    fn append(&mut self, route: &Route) -> Result<(), TrafficInfoError> {
        self.push(RouteRow::from(route));
        Ok(())
    }
}
