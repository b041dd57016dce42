use super::{CommuteLocations, CommuteSchedule, CommuteWindow};
use crate::model::TrafficInfoError;
use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;

/// IANA equivalent of Pacific Standard Time, observing daylight saving.
pub const DEFAULT_TIME_ZONE: &str = "America/Los_Angeles";

/// decides from the current time whether a commute is underway and
/// which of the configured locations are its origin and destination.
#[derive(Debug, Clone)]
pub struct WindowSelector {
    time_zone: Tz,
    schedule: CommuteSchedule,
}

impl Default for WindowSelector {
    fn default() -> Self {
        Self {
            time_zone: chrono_tz::America::Los_Angeles,
            schedule: CommuteSchedule::default(),
        }
    }
}

impl WindowSelector {
    pub fn new(time_zone: Tz, schedule: CommuteSchedule) -> Result<Self, TrafficInfoError> {
        schedule.validate()?;
        Ok(Self {
            time_zone,
            schedule,
        })
    }

    /// builds a selector from an IANA time zone name such as "America/Chicago".
    pub fn try_from_zone_name(
        time_zone: &str,
        schedule: CommuteSchedule,
    ) -> Result<Self, TrafficInfoError> {
        let tz = time_zone
            .parse::<Tz>()
            .map_err(|_| TrafficInfoError::InvalidTimeZoneError(time_zone.to_string()))?;
        Self::new(tz, schedule)
    }

    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    pub fn local_time(&self, now: &DateTime<Utc>) -> DateTime<Tz> {
        now.with_timezone(&self.time_zone)
    }

    /// the active commute window at `now`, or None outside of commute hours
    /// or when a location is not configured.
    pub fn select(
        &self,
        now: &DateTime<Utc>,
        locations: &CommuteLocations,
    ) -> Option<CommuteWindow> {
        let local_time = self.local_time(now);
        let direction = self.schedule.direction_at_hour(local_time.hour())?;
        let (origin, destination) = locations.endpoints(direction)?;
        Some(CommuteWindow {
            direction,
            origin: origin.to_string(),
            destination: destination.to_string(),
            local_time,
        })
    }
}
