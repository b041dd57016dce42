mod commute_direction;
mod commute_locations;
mod commute_schedule;
mod commute_window;
mod hour_range;
mod window_selector;

pub use commute_direction::CommuteDirection;
pub use commute_locations::CommuteLocations;
pub use commute_schedule::CommuteSchedule;
pub use commute_window::CommuteWindow;
pub use hour_range::HourRange;
pub use window_selector::{WindowSelector, DEFAULT_TIME_ZONE};
