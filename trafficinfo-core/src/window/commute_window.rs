use super::CommuteDirection;
use chrono::DateTime;
use chrono_tz::Tz;
use std::fmt::Display;

/// an active commute: which way traffic is being sampled and between which
/// locations, as of the local reference time.
#[derive(Debug, Clone, PartialEq)]
pub struct CommuteWindow {
    pub direction: CommuteDirection,
    pub origin: String,
    pub destination: String,
    pub local_time: DateTime<Tz>,
}

impl Display for CommuteWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} -> {}) at {}",
            self.direction,
            self.origin,
            self.destination,
            self.local_time.format("%Y-%m-%d %H:%M %Z")
        )
    }
}
