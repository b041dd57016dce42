use crate::directions::{self, DirectionsQuery, DirectionsSource, TrafficModel};
use crate::model::TrafficInfoError;
use crate::sink::{append_all, RouteSink};
use crate::window::{CommuteLocations, CommuteWindow, WindowSelector};
use chrono::{DateTime, Utc};
use itertools::Itertools;

use super::TickOutcome;

/// the fetch-parse-store flow for a single scheduled tick. holds no state
/// between ticks.
#[derive(Debug, Clone)]
pub struct CommutePipeline {
    pub selector: WindowSelector,
    pub locations: CommuteLocations,
    pub traffic_model: TrafficModel,
}

impl CommutePipeline {
    pub fn new(
        selector: WindowSelector,
        locations: CommuteLocations,
        traffic_model: TrafficModel,
    ) -> Self {
        Self {
            selector,
            locations,
            traffic_model,
        }
    }

    /// [`TickOutcome::Inactive`] when no commute window is active at `now`,
    /// None otherwise. lets callers skip opening the source and sink.
    pub fn inactive_outcome(&self, now: &DateTime<Utc>) -> Option<TickOutcome> {
        self.select_window(now).err()
    }

    fn select_window(&self, now: &DateTime<Utc>) -> Result<CommuteWindow, TickOutcome> {
        match self.selector.select(now, &self.locations) {
            Some(window) => Ok(window),
            None => {
                let local_time = self.selector.local_time(now);
                log::info!("skipping computation as it is not in travel hours: {local_time}");
                Err(TickOutcome::Inactive { local_time })
            }
        }
    }

    /// runs one tick at time `now`. outside of a commute window this returns
    /// [`TickOutcome::Inactive`] without contacting the source or the sink.
    /// a fetch or parse failure aborts before any row is written.
    pub fn run_tick<D, S>(
        &self,
        now: &DateTime<Utc>,
        source: &D,
        sink: &mut S,
    ) -> Result<TickOutcome, TrafficInfoError>
    where
        D: DirectionsSource + ?Sized,
        S: RouteSink + ?Sized,
    {
        let window = match self.select_window(now) {
            Ok(window) => window,
            Err(inactive) => return Ok(inactive),
        };
        log::info!("commute window active: {window}");

        let query = DirectionsQuery::from_window(&window, self.traffic_model);
        let body = source.fetch_directions(&query)?;
        log::debug!("received directions response of {} bytes", body.len());

        let routes = directions::parse_routes(&body)?;
        log::debug!(
            "parsed routes: [{}]",
            routes.iter().map(|r| r.summary()).join(", ")
        );

        let routes_written = append_all(sink, &routes)?;
        log::info!("number of routes processed: {routes_written}");

        Ok(TickOutcome::Completed {
            window,
            routes_written,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::CommutePipeline;
    use crate::directions::{DirectionsQuery, DirectionsSource, TrafficModel};
    use crate::model::{RouteRow, TrafficInfoError, ROUTES_PARTITION_KEY};
    use crate::pipeline::TickOutcome;
    use crate::window::{CommuteDirection, CommuteLocations, WindowSelector};
    use chrono::{DateTime, TimeZone, Utc};
    use std::cell::RefCell;

    const TWO_ROUTES: &str = include_str!("../../test/directions_two_routes.json");

    /// replays a canned response and records each query it receives.
    struct StubSource {
        response: Result<String, String>,
        queries: RefCell<Vec<DirectionsQuery>>,
    }

    impl StubSource {
        fn replying(body: &str) -> Self {
            Self {
                response: Ok(body.to_string()),
                queries: RefCell::new(vec![]),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                response: Err(message.to_string()),
                queries: RefCell::new(vec![]),
            }
        }
    }

    impl DirectionsSource for StubSource {
        fn fetch_directions(&self, query: &DirectionsQuery) -> Result<String, TrafficInfoError> {
            self.queries.borrow_mut().push(query.clone());
            self.response
                .clone()
                .map_err(TrafficInfoError::FetchError)
        }
    }

    fn pipeline() -> CommutePipeline {
        CommutePipeline::new(
            WindowSelector::default(),
            CommuteLocations::new("A", "B"),
            TrafficModel::BestGuess,
        )
    }

    fn local(hour: u32) -> DateTime<Utc> {
        chrono_tz::America::Los_Angeles
            .with_ymd_and_hms(2024, 3, 1, hour, 0, 0)
            .single()
            .expect("unambiguous local time")
            .with_timezone(&Utc)
    }

    #[test]
    fn test_morning_tick_writes_every_route() {
        let source = StubSource::replying(TWO_ROUTES);
        let mut table: Vec<RouteRow> = vec![];
        let outcome = pipeline()
            .run_tick(&local(8), &source, &mut table)
            .expect("tick should succeed");

        assert_eq!(outcome.routes_written(), 2);
        assert_eq!(table.len(), 2);
        assert!(table.iter().all(|r| r.partition_key == ROUTES_PARTITION_KEY));
        assert_ne!(table[0].row_key, table[1].row_key);

        let queries = source.queries.borrow();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].origin, "A");
        assert_eq!(queries[0].destination, "B");
        assert!(queries[0].alternatives);
        match outcome {
            TickOutcome::Completed { window, .. } => {
                assert_eq!(window.direction, CommuteDirection::HomeToWork)
            }
            other => panic!("expected completed tick, found {other:?}"),
        }
    }

    #[test]
    fn test_evening_tick_reverses_direction() {
        let source = StubSource::replying(TWO_ROUTES);
        let mut table: Vec<RouteRow> = vec![];
        pipeline()
            .run_tick(&local(17), &source, &mut table)
            .expect("tick should succeed");
        let queries = source.queries.borrow();
        assert_eq!(queries[0].origin, "B");
        assert_eq!(queries[0].destination, "A");
    }

    #[test]
    fn test_midday_tick_makes_no_call_and_no_writes() {
        let source = StubSource::replying(TWO_ROUTES);
        let mut table: Vec<RouteRow> = vec![];
        let outcome = pipeline()
            .run_tick(&local(13), &source, &mut table)
            .expect("inactive tick is not an error");
        assert!(matches!(outcome, TickOutcome::Inactive { .. }));
        assert!(source.queries.borrow().is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_inactive_outcome_only_outside_windows() {
        let pipeline = pipeline();
        assert!(matches!(
            pipeline.inactive_outcome(&local(13)),
            Some(TickOutcome::Inactive { .. })
        ));
        assert!(pipeline.inactive_outcome(&local(8)).is_none());
        assert!(pipeline.inactive_outcome(&local(18)).is_none());
    }

    #[test]
    fn test_fetch_failure_writes_nothing() {
        let source = StubSource::failing("connection refused");
        let mut table: Vec<RouteRow> = vec![];
        let result = pipeline().run_tick(&local(8), &source, &mut table);
        assert!(matches!(result, Err(TrafficInfoError::FetchError(_))));
        assert!(table.is_empty());
    }

    #[test]
    fn test_parse_failure_writes_nothing() {
        let source = StubSource::replying(r#"{"routes": [{"summary": "I-5 N"}]}"#);
        let mut table: Vec<RouteRow> = vec![];
        let result = pipeline().run_tick(&local(8), &source, &mut table);
        assert!(matches!(result, Err(TrafficInfoError::ParseError { .. })));
        assert!(table.is_empty());
    }
}
