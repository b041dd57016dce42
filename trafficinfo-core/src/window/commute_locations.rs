use super::CommuteDirection;

/// the two named endpoints of a commute. either may be unset, in which
/// case no commute window can become active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommuteLocations {
    pub home: Option<String>,
    pub work: Option<String>,
}

impl CommuteLocations {
    pub fn new(home: &str, work: &str) -> Self {
        Self {
            home: Some(home.to_string()),
            work: Some(work.to_string()),
        }
    }

    /// (origin, destination) for a direction, or None when either location
    /// is missing or blank. values are passed through as configured.
    pub fn endpoints(&self, direction: CommuteDirection) -> Option<(&str, &str)> {
        let home = non_empty(&self.home)?;
        let work = non_empty(&self.work)?;
        match direction {
            CommuteDirection::HomeToWork => Some((home, work)),
            CommuteDirection::WorkToHome => Some((work, home)),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
