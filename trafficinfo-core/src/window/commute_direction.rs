use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommuteDirection {
    HomeToWork,
    WorkToHome,
}

impl Display for CommuteDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommuteDirection::HomeToWork => write!(f, "home to work"),
            CommuteDirection::WorkToHome => write!(f, "work to home"),
        }
    }
}
