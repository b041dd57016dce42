use super::{CommuteDirection, HourRange};
use crate::model::TrafficInfoError;
use serde::{Deserialize, Serialize};

/// local hours during which each commute direction is assumed to be underway.
/// outbound (home to work) defaults to 06:00-12:59 and inbound (work to home)
/// to 16:00-19:59. when the ranges overlap, outbound wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommuteSchedule {
    #[serde(default = "CommuteSchedule::default_outbound")]
    pub outbound: HourRange,
    #[serde(default = "CommuteSchedule::default_inbound")]
    pub inbound: HourRange,
}

impl Default for CommuteSchedule {
    fn default() -> Self {
        Self {
            outbound: Self::default_outbound(),
            inbound: Self::default_inbound(),
        }
    }
}

impl CommuteSchedule {
    fn default_outbound() -> HourRange {
        HourRange {
            first_hour: 6,
            last_hour: 12,
        }
    }

    fn default_inbound() -> HourRange {
        HourRange {
            first_hour: 16,
            last_hour: 19,
        }
    }

    pub fn direction_at_hour(&self, hour: u32) -> Option<CommuteDirection> {
        if self.outbound.contains(hour) {
            Some(CommuteDirection::HomeToWork)
        } else if self.inbound.contains(hour) {
            Some(CommuteDirection::WorkToHome)
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<(), TrafficInfoError> {
        self.outbound.validate()?;
        self.inbound.validate()
    }
}
