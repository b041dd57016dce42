use chrono::{DateTime, Utc};
use trafficinfo_core::pipeline::TickOutcome;
use trafficinfo_core::window::CommuteWindow;

use crate::config::TrafficInfoConfig;
use crate::fetch::GoogleDirectionsClient;
use crate::store::TableStore;
use crate::TrafficInfoAppError;

/// runs one collection tick at `now` against the configured directions
/// api and table store.
///
/// # Arguments
/// * config - locations, api key, schedule and store settings
/// * now - the time the tick is evaluated at
///
/// # Result
/// the tick outcome, or the error that aborted it. outside the commute
/// windows neither the directions client nor the table store is built.
pub fn run_collection(
    config: &TrafficInfoConfig,
    now: &DateTime<Utc>,
) -> Result<TickOutcome, TrafficInfoAppError> {
    let pipeline = config.pipeline()?;
    if let Some(outcome) = pipeline.inactive_outcome(now) {
        return Ok(outcome);
    }
    let source =
        GoogleDirectionsClient::try_from_config(&config.directions, config.api_key.clone())?;
    let mut store = TableStore::try_from(config.store_config()?)?;
    let outcome = pipeline.run_tick(now, &source, &mut store)?;
    Ok(outcome)
}

/// the commute window active at `now`, if any.
pub fn active_window(
    config: &TrafficInfoConfig,
    now: &DateTime<Utc>,
) -> Result<Option<CommuteWindow>, TrafficInfoAppError> {
    let selector = config.window_selector()?;
    Ok(selector.select(now, &config.locations()))
}
