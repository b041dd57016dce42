use crate::window::CommuteWindow;
use chrono::DateTime;
use chrono_tz::Tz;
use std::fmt::Display;

/// result of one scheduled tick that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// outside of commute hours or missing locations; nothing was fetched.
    Inactive { local_time: DateTime<Tz> },
    Completed {
        window: CommuteWindow,
        routes_written: usize,
    },
}

impl TickOutcome {
    pub fn routes_written(&self) -> usize {
        match self {
            TickOutcome::Inactive { .. } => 0,
            TickOutcome::Completed { routes_written, .. } => *routes_written,
        }
    }
}

impl Display for TickOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TickOutcome::Inactive { local_time } => write!(
                f,
                "no commute window active at {}",
                local_time.format("%Y-%m-%d %H:%M %Z")
            ),
            TickOutcome::Completed {
                window,
                routes_written,
            } => write!(f, "{window}: wrote {routes_written} routes"),
        }
    }
}
