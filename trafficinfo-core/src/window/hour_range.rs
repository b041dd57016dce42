use crate::model::TrafficInfoError;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// inclusive range of local clock hours, `first..=last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub first_hour: u32,
    pub last_hour: u32,
}

impl HourRange {
    pub fn new(first_hour: u32, last_hour: u32) -> Result<Self, TrafficInfoError> {
        let range = Self {
            first_hour,
            last_hour,
        };
        range.validate()?;
        Ok(range)
    }

    pub fn contains(&self, hour: u32) -> bool {
        self.first_hour <= hour && hour <= self.last_hour
    }

    pub fn validate(&self) -> Result<(), TrafficInfoError> {
        if self.last_hour > 23 {
            return Err(TrafficInfoError::InvalidScheduleError(format!(
                "hour range {self} ends after hour 23"
            )));
        }
        if self.first_hour > self.last_hour {
            return Err(TrafficInfoError::InvalidScheduleError(format!(
                "hour range {self} starts after it ends"
            )));
        }
        Ok(())
    }
}

impl Display for HourRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:02}:00, {:02}:59]", self.first_hour, self.last_hour)
    }
}
